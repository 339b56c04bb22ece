//! Serializable request/response types for the engine surface.

use serde::Serialize;

use crate::domain::explorer::ALL_LAYERS;
use crate::domain::session::ResolutionEntry;

#[derive(Debug, Clone, Serialize)]
pub struct MethodSummary {
    pub method_name: String,
    pub class_name: String,
    pub return_type: String,
    pub is_static: bool,
    pub parameter_count: usize,
    pub type_count: usize,
}

#[derive(Debug, Clone)]
pub struct ExploreRequest {
    /// Root type names; `None` means the method's parameter types.
    pub roots: Option<Vec<String>>,
    pub max_depth: i32,
    pub max_branch: Option<usize>,
}

impl Default for ExploreRequest {
    fn default() -> Self {
        Self {
            roots: None,
            max_depth: ALL_LAYERS,
            max_branch: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExploreResponse {
    pub type_count: usize,
    pub report: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    pub entries: Vec<ResolutionEntry>,
    pub report: String,
    /// Constructor/builder block of the class under test; present for
    /// non-static methods.
    pub class_report: Option<String>,
}
