use anyhow::Result;

use crate::domain::graph::MethodGraph;

/// Method graph source port (implemented by infrastructure).
pub trait MethodGraphSource {
    fn load(&self) -> Result<MethodGraph>;
}
