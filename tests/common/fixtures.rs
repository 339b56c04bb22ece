//! Test fixture generators for integration tests.
#![allow(dead_code)]

use type_closure::domain::graph::{MethodGraph, TypeGraph};
use type_closure::domain::node::{ClassNode, CtorMap, ParamMap, TypeNode};

pub const REGION_METHOD_JSON: &str = "tests/fixtures/region_method.json";
pub const REGION_REPLIES: &str = "tests/fixtures/region_replies.txt";

pub fn params(pairs: &[(&str, &str)]) -> ParamMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn ctors(entries: &[(&str, &[(&str, &str)])]) -> CtorMap {
    entries
        .iter()
        .map(|(sig, ps)| (sig.to_string(), params(ps)))
        .collect()
}

pub fn class(constructors: &[(&str, &[(&str, &str)])]) -> TypeNode {
    TypeNode::Class(ClassNode {
        constructors: ctors(constructors),
        ..ClassNode::default()
    })
}

pub fn abstract_class(subclasses: &[&str]) -> TypeNode {
    TypeNode::AbstractClass(ClassNode {
        subclasses: subclasses.iter().map(|s| s.to_string()).collect(),
        ..ClassNode::default()
    })
}

pub fn interface(implementors: &[&str]) -> TypeNode {
    TypeNode::Interface(ClassNode {
        implementors: implementors.iter().map(|s| s.to_string()).collect(),
        ..ClassNode::default()
    })
}

/// The AST-flavored graph the JSON fixture also describes, built in memory.
pub fn region_graph() -> TypeGraph {
    let mut graph = TypeGraph::new();
    graph.insert(
        "com.example.ast.Region",
        class(&[(
            "Region(Position begin, Position end)",
            &[
                ("begin", "com.example.ast.Position"),
                ("end", "com.example.ast.Position"),
            ],
        )]),
    );
    graph.insert(
        "com.example.ast.Position",
        class(&[(
            "Position(int line, int column)",
            &[("line", "int"), ("column", "int")],
        )]),
    );
    graph.insert(
        "com.example.ast.Comment",
        abstract_class(&["com.example.ast.BlockComment", "com.example.ast.LineComment"]),
    );
    graph.insert(
        "com.example.ast.BlockComment",
        class(&[("BlockComment(String content)", &[("content", "java.lang.String")])]),
    );
    graph.insert(
        "com.example.ast.LineComment",
        class(&[("LineComment(String content)", &[("content", "java.lang.String")])]),
    );
    graph.insert("int", TypeNode::Builtin);
    graph.insert("java.lang.String", TypeNode::Builtin);
    graph
}

/// The `Region.isInRange` method over [`region_graph`].
pub fn region_method() -> MethodGraph {
    MethodGraph {
        method_name: "boolean isInRange(Position position, Comment comment)".to_string(),
        class_name: "com.example.ast.Region".to_string(),
        return_type: "boolean".to_string(),
        code: "boolean isInRange(Position position, Comment comment) { return true; }".to_string(),
        is_static: false,
        parameters: params(&[
            ("position", "com.example.ast.Position"),
            ("comment", "com.example.ast.Comment"),
        ]),
        nodes: region_graph(),
    }
}
