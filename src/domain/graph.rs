//! TypeGraph and the provider's per-method dump.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::node::{ParamMap, TypeName, TypeNode};

/// All type descriptions known for one method-resolution run.
///
/// Loaded once from the provider dump and never mutated afterwards. A name that is
/// referenced somewhere but absent from the graph is treated by every consumer as
/// a builtin leaf, not as an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TypeGraph {
    nodes: HashMap<TypeName, TypeNode>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<TypeName>, node: TypeNode) {
        self.nodes.insert(name.into(), node);
    }

    pub fn node(&self, name: &str) -> Option<&TypeNode> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// True when `name` cannot be expanded: absent from the graph or builtin.
    pub fn is_leaf(&self, name: &str) -> bool {
        self.node(name).is_none_or(TypeNode::is_builtin)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<(TypeName, TypeNode)> for TypeGraph {
    fn from_iter<I: IntoIterator<Item = (TypeName, TypeNode)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// The provider dump for one method under test: the method's own description plus
/// the [`TypeGraph`] snapshot it depends on.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodGraph {
    #[serde(rename = "methodName")]
    pub method_name: String,
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "returnTypeName", default)]
    pub return_type: String,
    /// Source text of the method, quoted verbatim in oracle prompts.
    #[serde(default)]
    pub code: String,
    #[serde(rename = "static")]
    pub is_static: bool,
    /// Declared parameters, name → type, declaration order.
    pub parameters: ParamMap,
    pub nodes: TypeGraph,
}

impl MethodGraph {
    /// Parameter types in declaration order, the roots of every method-level walk.
    pub fn parameter_types(&self) -> Vec<TypeName> {
        self.parameters.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::ClassKind;

    const DUMP: &str = r#"{
        "methodName": "boolean contains(Position p)",
        "className": "com.example.Region",
        "returnTypeName": "boolean",
        "code": "boolean contains(Position p) { return true; }",
        "static": false,
        "parameters": {"p": "com.example.Position"},
        "nodes": {
            "com.example.Position": {
                "classType": "class",
                "constructors": {
                    "Position(int line, int column)": {"line": "int", "column": "int"}
                }
            },
            "com.example.Shape": {
                "classType": "interface",
                "subInterfaceName": ["com.example.Circle"]
            },
            "int": {}
        }
    }"#;

    #[test]
    fn parses_provider_dump() {
        let mg: MethodGraph = serde_json::from_str(DUMP).unwrap();
        assert_eq!(mg.class_name, "com.example.Region");
        assert!(!mg.is_static);
        assert_eq!(mg.parameter_types(), vec!["com.example.Position"]);
        assert_eq!(mg.nodes.len(), 3);
    }

    #[test]
    fn empty_node_object_is_builtin() {
        let mg: MethodGraph = serde_json::from_str(DUMP).unwrap();
        assert!(mg.nodes.node("int").unwrap().is_builtin());
        assert!(mg.nodes.is_leaf("int"));
        // Absent names degrade to leaves too.
        assert!(mg.nodes.is_leaf("com.example.Missing"));
    }

    #[test]
    fn constructor_params_keep_declaration_order() {
        let mg: MethodGraph = serde_json::from_str(DUMP).unwrap();
        let node = mg.nodes.node("com.example.Position").unwrap();
        let members = node.members().unwrap();
        let params = members.constructors.get("Position(int line, int column)").unwrap();
        let names: Vec<&str> = params.keys().collect();
        assert_eq!(names, vec!["line", "column"]);
        assert_eq!(params.to_literal(), "{'line': 'int', 'column': 'int'}");
    }

    #[test]
    fn sub_interface_name_aliases_implementors() {
        let mg: MethodGraph = serde_json::from_str(DUMP).unwrap();
        let node = mg.nodes.node("com.example.Shape").unwrap();
        assert_eq!(node.class_kind(), Some(ClassKind::Interface));
        assert_eq!(node.members().unwrap().implementors, vec!["com.example.Circle"]);
    }

    #[test]
    fn unknown_class_type_is_rejected() {
        let err = serde_json::from_str::<TypeNode>(r#"{"classType": "record"}"#);
        assert!(err.is_err());
    }
}
