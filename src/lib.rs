//! type-closure library — bounded type-graph exploration and oracle-driven
//! constructor resolution over method graph dumps.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
