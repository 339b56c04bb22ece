//! Pure text rendering of subgraphs and transcripts.
//!
//! Output feeds oracle prompts downstream, so the format is fixed: per-type
//! blocks in first-visit order, single-quoted parameter literals in declaration
//! order, byte-identical across runs for identical input.

use std::fmt::Write as _;

use crate::domain::explorer::{Subgraph, SubgraphNode};
use crate::domain::node::TypeNode;
use crate::domain::session::ResolutionTranscript;

#[derive(Debug, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The "Dependent Types" block: one entry per visited type.
    pub fn dependency_report(&self, subgraph: &Subgraph) -> String {
        let mut out = String::new();
        for (name, node) in subgraph.iter() {
            match node {
                SubgraphNode::Builtin => {
                    let _ = writeln!(out, "  - {name}: a jdk-builtin type or cannot be parsed");
                }
                SubgraphNode::Type(view) => {
                    let _ = writeln!(out, "  - {}: {name}", view.kind.label());
                    if !view.subclasses.is_empty() {
                        out.push_str("    - Sub classes name:\n");
                        for sub in &view.subclasses {
                            let _ = writeln!(out, "        - {sub}");
                        }
                    }
                    if !view.implementors.is_empty() {
                        out.push_str("    - Implementation classes name:\n");
                        for imp in &view.implementors {
                            let _ = writeln!(out, "        - {imp}");
                        }
                    }
                    if !view.constructors.is_empty() {
                        out.push_str("    - Constructors:\n");
                        for (signature, params) in view.constructors.iter() {
                            let _ = writeln!(out, "        - {signature}: {}", params.to_literal());
                        }
                    }
                    if !view.builders.is_empty() {
                        out.push_str("    - Builders:\n");
                        for (signature, params) in view.builders.iter() {
                            let _ = writeln!(out, "        - {signature}: {}", params.to_literal());
                        }
                    }
                }
            }
        }
        out
    }

    /// The "Constructor" block: resolved constructors in resolution order, with
    /// subclass hops spelled out.
    pub fn transcript_report(&self, transcript: &ResolutionTranscript) -> String {
        let mut out = String::new();
        for entry in transcript.entries() {
            if let Some(subclass) = &entry.via_subclass {
                let _ = writeln!(out, "Sub class of {}: {subclass}", entry.type_name);
                let _ = writeln!(
                    out,
                    "Constructor of {subclass}: {}: {}",
                    entry.signature,
                    entry.params.to_literal()
                );
            } else {
                let _ = writeln!(
                    out,
                    "Constructor of {}: {}: {}",
                    entry.type_name,
                    entry.signature,
                    entry.params.to_literal()
                );
            }
        }
        out
    }

    /// Constructor/builder block for the class under test, used downstream to
    /// build the receiver object of a non-static method.
    pub fn class_report(&self, class_name: &str, node: &TypeNode) -> String {
        let mut out = format!("- class: {class_name}\n");
        let Some(members) = node.members() else {
            return out;
        };
        if !members.constructors.is_empty() {
            out.push_str("\t- Constructors:\n");
            for (signature, params) in members.constructors.iter() {
                let _ = writeln!(out, "\t\t- {signature}: {}", params.to_literal());
            }
        }
        if !members.builders.is_empty() {
            out.push_str("\t- Builders:\n");
            for (signature, params) in members.builders.iter() {
                let _ = writeln!(out, "\t\t- {signature}: {}", params.to_literal());
            }
        }
        out
    }
}
