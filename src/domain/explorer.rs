//! Bounded breadth-first closure over a [`TypeGraph`].

use std::collections::{HashMap, VecDeque};

use crate::domain::graph::TypeGraph;
use crate::domain::node::{ClassKind, CtorMap, TypeName, TypeNode};

/// Sentinel for unbounded depth.
pub const ALL_LAYERS: i32 = -1;

/// Bounds for one [`GraphExplorer::explore`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExploreLimits {
    /// BFS layers expanded beyond the roots; `ALL_LAYERS` removes the bound.
    /// Depth 0 records the roots and expands nothing.
    pub max_depth: i32,
    /// Per node, how many subclasses (and how many implementors) are kept:
    /// the first N in declared order.
    pub max_branch: usize,
}

impl ExploreLimits {
    pub fn unbounded() -> Self {
        Self {
            max_depth: ALL_LAYERS,
            max_branch: usize::MAX,
        }
    }

    pub fn depth(max_depth: i32) -> Self {
        Self {
            max_depth,
            ..Self::unbounded()
        }
    }

    pub fn with_max_branch(mut self, max_branch: usize) -> Self {
        self.max_branch = max_branch;
        self
    }

    fn allows_layer(&self, layer: usize) -> bool {
        self.max_depth == ALL_LAYERS || layer as i64 <= self.max_depth as i64
    }
}

impl Default for ExploreLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Trimmed view of one visited type.
#[derive(Debug, Clone, PartialEq)]
pub enum SubgraphNode {
    /// JDK builtin, or a name the graph does not know.
    Builtin,
    Type(TypeView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeView {
    pub kind: ClassKind,
    /// Copied for concrete classes only; parameters stay type-named.
    pub constructors: CtorMap,
    pub builders: CtorMap,
    /// Capped to `max_branch`, declared order.
    pub subclasses: Vec<TypeName>,
    pub implementors: Vec<TypeName>,
}

/// Depth/branch-bounded extract of a `TypeGraph`, keyed by type name in
/// first-visit order.
#[derive(Debug, Clone, Default)]
pub struct Subgraph {
    order: Vec<TypeName>,
    nodes: HashMap<TypeName, SubgraphNode>,
}

impl Subgraph {
    fn insert(&mut self, name: &str, node: SubgraphNode) {
        if !self.nodes.contains_key(name) {
            self.order.push(name.to_string());
            self.nodes.insert(name.to_string(), node);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SubgraphNode> {
        self.nodes.get(name)
    }

    /// Entries in first-visit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubgraphNode)> {
        self.order.iter().map(|name| (name.as_str(), &self.nodes[name]))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Multi-source BFS collecting every constructor, subclass, implementor, and
/// field type reachable within the configured limits.
///
/// Two cooperating frontiers keep the depth counter layer-accurate: the current
/// layer drains completely before the next one starts. Each type name enters the
/// result at most once, so the walk terminates on cyclic graphs.
#[derive(Debug, Default)]
pub struct GraphExplorer;

impl GraphExplorer {
    pub fn new() -> Self {
        Self
    }

    pub fn explore(&self, graph: &TypeGraph, roots: &[TypeName], limits: ExploreLimits) -> Subgraph {
        let mut out = Subgraph::default();
        let mut current: VecDeque<TypeName> = roots.iter().cloned().collect();
        let mut next: VecDeque<TypeName> = VecDeque::new();
        let mut layer: usize = 0;

        while !current.is_empty() {
            while let Some(name) = current.pop_front() {
                if out.contains(&name) {
                    continue;
                }
                let Some(node) = graph.node(&name) else {
                    // Unknown to the provider: record as an unparseable leaf.
                    out.insert(&name, SubgraphNode::Builtin);
                    continue;
                };
                let (kind, members) = match node {
                    TypeNode::Builtin => {
                        out.insert(&name, SubgraphNode::Builtin);
                        continue;
                    }
                    TypeNode::Class(m) => (ClassKind::Class, m),
                    TypeNode::AbstractClass(m) => (ClassKind::AbstractClass, m),
                    TypeNode::Interface(m) => (ClassKind::Interface, m),
                };

                let subclasses: Vec<TypeName> = members
                    .subclasses
                    .iter()
                    .take(limits.max_branch)
                    .cloned()
                    .collect();
                let implementors: Vec<TypeName> = members
                    .implementors
                    .iter()
                    .take(limits.max_branch)
                    .cloned()
                    .collect();
                let is_concrete = kind == ClassKind::Class;

                for cand in subclasses.iter().chain(implementors.iter()) {
                    if !out.contains(cand) {
                        next.push_back(cand.clone());
                    }
                }
                for field_type in members.fields.values() {
                    if !out.contains(field_type) {
                        next.push_back(field_type.clone());
                    }
                }
                if is_concrete {
                    for params in members.constructors.values() {
                        for param_type in params.values() {
                            if !out.contains(param_type) {
                                next.push_back(param_type.clone());
                            }
                        }
                    }
                }

                out.insert(
                    &name,
                    SubgraphNode::Type(TypeView {
                        kind,
                        constructors: if is_concrete {
                            members.constructors.clone()
                        } else {
                            CtorMap::new()
                        },
                        builders: if is_concrete {
                            members.builders.clone()
                        } else {
                            CtorMap::new()
                        },
                        subclasses,
                        implementors,
                    }),
                );
            }

            // Layer cap reached: queued references stay recorded-by-name only.
            if next.is_empty() || !limits.allows_layer(layer + 1) {
                break;
            }
            layer += 1;
            std::mem::swap(&mut current, &mut next);
            tracing::trace!(layer, frontier = current.len(), "advancing BFS layer");
        }

        out
    }
}
