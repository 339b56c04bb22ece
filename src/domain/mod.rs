pub mod error;
pub mod explorer;
pub mod graph;
pub mod node;
pub mod oracle;
pub mod ports;
pub mod render;
pub mod session;
