//! Stateful constructor resolution for one method under test.
//!
//! Unlike the explorer's BFS, resolution is depth-first: each step depends
//! causally on the constructor the oracle chose in the previous one.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::error::ResolveError;
use crate::domain::explorer::{ExploreLimits, GraphExplorer};
use crate::domain::graph::TypeGraph;
use crate::domain::node::{ParamMap, TypeName, TypeNode};
use crate::domain::oracle::{Oracle, OracleRequest, QueryScope, parse_constructor_choice};
use crate::domain::render::ReportRenderer;

/// One resolved fact: a type and the constructor chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionEntry {
    pub type_name: TypeName,
    /// Chosen constructor (or builder) signature.
    pub signature: String,
    /// Its parameter list from the graph, declaration order.
    pub params: ParamMap,
    /// Set when the declared type was abstract/interface and the signature
    /// belongs to this subtype.
    pub via_subclass: Option<TypeName>,
}

impl ResolutionEntry {
    pub fn is_via_subclass(&self) -> bool {
        self.via_subclass.is_some()
    }
}

/// Insertion-ordered resolution facts, parent before children.
///
/// Never reordered or deduplicated after the fact: duplicates are suppressed at
/// resolution time, so each type name appears at most once. A constructor
/// parameter whose type was resolved earlier in the run shares that earlier
/// entry — [`ResolutionTranscript::find`] is the reuse point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolutionTranscript {
    entries: Vec<ResolutionEntry>,
}

impl ResolutionTranscript {
    pub fn push(&mut self, entry: ResolutionEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ResolutionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The shared resolution for `type_name`, if one was recorded.
    pub fn find(&self, type_name: &str) -> Option<&ResolutionEntry> {
        self.entries.iter().find(|e| e.type_name == type_name)
    }
}

/// Resolves a method's parameters into a concrete instantiation plan, one
/// oracle query per unresolved type.
///
/// `visited` and the transcript are owned by the session and live for exactly
/// one run; [`ResolutionSession::resolve`] consumes the session.
pub struct ResolutionSession<'g> {
    graph: &'g TypeGraph,
    explorer: GraphExplorer,
    renderer: ReportRenderer,
    max_branch: usize,
    visited: HashSet<TypeName>,
    transcript: ResolutionTranscript,
}

impl<'g> ResolutionSession<'g> {
    pub fn new(graph: &'g TypeGraph) -> Self {
        Self {
            graph,
            explorer: GraphExplorer::new(),
            renderer: ReportRenderer::new(),
            max_branch: usize::MAX,
            visited: HashSet::new(),
            transcript: ResolutionTranscript::default(),
        }
    }

    /// Caps how many subclass/implementor candidates each oracle report shows.
    pub fn with_max_branch(mut self, max_branch: usize) -> Self {
        self.max_branch = max_branch;
        self
    }

    /// Resolves every method parameter in declaration order.
    pub fn resolve(
        mut self,
        code: &str,
        parameters: &ParamMap,
        oracle: &dyn Oracle,
    ) -> Result<ResolutionTranscript, ResolveError> {
        for (param_name, type_name) in parameters.iter() {
            let scope = QueryScope::Method {
                code: code.to_string(),
            };
            self.resolve_param(&scope, param_name, type_name, oracle)?;
        }
        Ok(self.transcript)
    }

    fn resolve_param(
        &mut self,
        scope: &QueryScope,
        param_name: &str,
        type_name: &str,
        oracle: &dyn Oracle,
    ) -> Result<(), ResolveError> {
        let graph = self.graph;
        let Some(node) = graph.node(type_name) else {
            tracing::debug!(type_name, "type unknown to the provider, treated as leaf");
            return Ok(());
        };
        if node.is_builtin() {
            return Ok(());
        }
        if !self.visited.insert(type_name.to_string()) {
            tracing::debug!(type_name, "already resolved, reusing earlier entry");
            return Ok(());
        }

        // Depth 1 reveals the type itself, its direct candidates, and their
        // immediate constructors; the oracle never sees more than that per query.
        let roots = vec![type_name.to_string()];
        let limits = ExploreLimits::depth(1).with_max_branch(self.max_branch);
        let subgraph = self.explorer.explore(graph, &roots, limits);
        let request = OracleRequest {
            scope: scope.clone(),
            param_name: param_name.to_string(),
            dependency_report: self.renderer.dependency_report(&subgraph),
        };
        tracing::debug!(type_name, param = param_name, "querying oracle");
        let reply = oracle.choose_constructor(&request)?;
        let choice = parse_constructor_choice(type_name, &reply)?;

        let entry = if node.is_abstract() {
            self.match_candidate(type_name, node, &choice.signature)?
        } else {
            self.match_concrete(type_name, node, &choice.signature)?
        };
        tracing::info!(
            type_name,
            signature = entry.signature,
            via_subclass = entry.via_subclass.as_deref().unwrap_or(""),
            "constructor resolved"
        );

        let follow_scope = QueryScope::Constructor {
            signature: format!("{}: {}", entry.signature, entry.params.to_literal()),
        };
        let ctor_params = entry.params.clone();
        self.transcript.push(entry);

        // Pre-order: the parent entry lands before its parameters are walked.
        for (p_name, p_type) in ctor_params.iter() {
            self.resolve_param(&follow_scope, p_name, p_type, oracle)?;
        }
        Ok(())
    }

    /// Locates the chosen signature among the abstract type's candidates,
    /// preferring the first matching subtype in declared order.
    fn match_candidate(
        &self,
        type_name: &str,
        node: &TypeNode,
        signature: &str,
    ) -> Result<ResolutionEntry, ResolveError> {
        if let Some(members) = node.members() {
            for candidate in members.candidates() {
                if let Some(cand_members) = self.graph.node(candidate).and_then(TypeNode::members)
                    && let Some(params) = cand_members.constructors.get(signature)
                {
                    return Ok(ResolutionEntry {
                        type_name: type_name.to_string(),
                        signature: signature.to_string(),
                        params: params.clone(),
                        via_subclass: Some(candidate.clone()),
                    });
                }
            }
        }
        Err(ResolveError::UnknownConstructor {
            type_name: type_name.to_string(),
            signature: signature.to_string(),
        })
    }

    fn match_concrete(
        &self,
        type_name: &str,
        node: &TypeNode,
        signature: &str,
    ) -> Result<ResolutionEntry, ResolveError> {
        if let Some(members) = node.members()
            && let Some(params) = members
                .constructors
                .get(signature)
                .or_else(|| members.builders.get(signature))
        {
            return Ok(ResolutionEntry {
                type_name: type_name.to_string(),
                signature: signature.to_string(),
                params: params.clone(),
                via_subclass: None,
            });
        }
        Err(ResolveError::UnknownConstructor {
            type_name: type_name.to_string(),
            signature: signature.to_string(),
        })
    }
}
