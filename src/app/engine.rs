//! Application orchestration over one method graph.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::adapters::provider::json::JsonGraphSource;
use crate::app::dto::{ExploreRequest, ExploreResponse, MethodSummary, ResolveResponse};
use crate::domain::error::ResolveError;
use crate::domain::explorer::{ExploreLimits, GraphExplorer};
use crate::domain::graph::MethodGraph;
use crate::domain::node::TypeNode;
use crate::domain::oracle::Oracle;
use crate::domain::ports::MethodGraphSource;
use crate::domain::render::ReportRenderer;
use crate::domain::session::ResolutionSession;

pub struct ClosureEngine {
    method: MethodGraph,
}

impl ClosureEngine {
    pub fn from_method_graph(method: MethodGraph) -> Self {
        Self { method }
    }

    pub fn load_from_json(path: &Path) -> Result<Self> {
        let method = JsonGraphSource::new(path).load()?;
        Ok(Self { method })
    }

    pub fn method(&self) -> &MethodGraph {
        &self.method
    }

    pub fn summary(&self) -> MethodSummary {
        MethodSummary {
            method_name: self.method.method_name.clone(),
            class_name: self.method.class_name.clone(),
            return_type: self.method.return_type.clone(),
            is_static: self.method.is_static,
            parameter_count: self.method.parameters.len(),
            type_count: self.method.nodes.len(),
        }
    }

    pub fn explore(&self, request: &ExploreRequest) -> ExploreResponse {
        let roots = match &request.roots {
            Some(roots) if !roots.is_empty() => roots.clone(),
            _ => self.method.parameter_types(),
        };
        let mut limits = ExploreLimits::depth(request.max_depth);
        if let Some(max_branch) = request.max_branch {
            limits = limits.with_max_branch(max_branch);
        }
        let subgraph = GraphExplorer::new().explore(&self.method.nodes, &roots, limits);
        ExploreResponse {
            type_count: subgraph.len(),
            report: ReportRenderer::new().dependency_report(&subgraph),
        }
    }

    /// Runs one resolution session against `oracle`.
    ///
    /// Non-static methods additionally need a receiver object, so the declaring
    /// class must offer at least one constructor or builder.
    pub fn resolve(
        &self,
        oracle: &dyn Oracle,
        max_branch: Option<usize>,
    ) -> Result<ResolveResponse> {
        let class_report = self.receiver_report()?;

        let mut session = ResolutionSession::new(&self.method.nodes);
        if let Some(max_branch) = max_branch {
            session = session.with_max_branch(max_branch);
        }
        let transcript = session
            .resolve(&self.method.code, &self.method.parameters, oracle)
            .with_context(|| {
                format!("Failed to resolve parameters of {}", self.method.method_name)
            })?;
        tracing::info!(
            method = self.method.method_name,
            resolved = transcript.len(),
            "resolution session finished"
        );

        Ok(ResolveResponse {
            report: ReportRenderer::new().transcript_report(&transcript),
            entries: transcript.entries().to_vec(),
            class_report,
        })
    }

    fn receiver_report(&self) -> Result<Option<String>> {
        if self.method.is_static {
            return Ok(None);
        }
        let class_name = &self.method.class_name;
        if let Some(node) = self.method.nodes.node(class_name)
            && node
                .members()
                .is_some_and(|m| !m.constructors.is_empty() || !m.builders.is_empty())
        {
            return Ok(Some(ReportRenderer::new().class_report(class_name, node)));
        }
        Err(ResolveError::NoReceiver {
            class_name: class_name.clone(),
        }
        .into())
    }
}
