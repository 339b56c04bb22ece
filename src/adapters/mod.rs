pub mod oracle;
pub mod provider;
