//! JSON method-graph dump loader.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::domain::graph::MethodGraph;
use crate::domain::ports::MethodGraphSource;

/// Reads a `graph.json` method dump produced by the reflection provider.
pub struct JsonGraphSource {
    path: PathBuf,
}

impl JsonGraphSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MethodGraphSource for JsonGraphSource {
    fn load(&self) -> Result<MethodGraph> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read method graph: {}", self.path.display()))?;
        let method: MethodGraph = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse method graph JSON: {}", self.path.display()))?;
        tracing::debug!(
            path = %self.path.display(),
            types = method.nodes.len(),
            "loaded method graph"
        );
        Ok(method)
    }
}
