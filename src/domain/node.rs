//! Type graph vocabulary: nodes as reported by the reflection provider.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Fully-qualified Java type name, the unique key in a [`TypeGraph`](crate::domain::graph::TypeGraph).
pub type TypeName = String;

/// Constructor parameter list: name → fully-qualified type, declaration order.
pub type ParamMap = OrderedMap<TypeName>;

/// Constructor (or builder) table: signature → parameter list.
pub type CtorMap = OrderedMap<ParamMap>;

/// Key/value pairs in dump declaration order.
///
/// The provider emits constructor tables and parameter lists as JSON objects whose
/// key order is the Java declaration order. That order is semantic — it is
/// reproduced verbatim in every report — so a hashing map is not usable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts at the end, or replaces in place if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl OrderedMap<String> {
    /// Single-quoted `{'name': 'type'}` literal in declaration order — the shape
    /// the provider reports and oracle prompts use.
    pub fn to_literal(&self) -> String {
        let body = self
            .0
            .iter()
            .map(|(k, v)| format!("'{k}': '{v}'"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{body}}}")
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Kind label for class-like nodes, as the provider spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    AbstractClass,
    Interface,
}

impl ClassKind {
    pub fn label(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::AbstractClass => "abstract class",
            ClassKind::Interface => "interface",
        }
    }
}

/// Members of a class-like type node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassNode {
    pub constructors: CtorMap,
    /// Static factory methods usable in lieu of constructors.
    pub builders: CtorMap,
    pub fields: OrderedMap<TypeName>,
    pub subclasses: Vec<TypeName>,
    pub implementors: Vec<TypeName>,
}

impl ClassNode {
    /// Subtype candidates in declared order: subclasses first, then implementors.
    pub fn candidates(&self) -> impl Iterator<Item = &TypeName> {
        self.subclasses.iter().chain(self.implementors.iter())
    }
}

/// One Java type as known to the analysis provider.
///
/// The provider encodes JDK-builtin (or unparseable) types as empty node objects;
/// they deserialize to [`TypeNode::Builtin`], a leaf that terminates traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Builtin,
    Class(ClassNode),
    AbstractClass(ClassNode),
    Interface(ClassNode),
}

impl TypeNode {
    pub fn is_builtin(&self) -> bool {
        matches!(self, TypeNode::Builtin)
    }

    /// Abstract class or interface: must be instantiated via a subtype.
    pub fn is_abstract(&self) -> bool {
        matches!(self, TypeNode::AbstractClass(_) | TypeNode::Interface(_))
    }

    pub fn class_kind(&self) -> Option<ClassKind> {
        match self {
            TypeNode::Builtin => None,
            TypeNode::Class(_) => Some(ClassKind::Class),
            TypeNode::AbstractClass(_) => Some(ClassKind::AbstractClass),
            TypeNode::Interface(_) => Some(ClassKind::Interface),
        }
    }

    pub fn members(&self) -> Option<&ClassNode> {
        match self {
            TypeNode::Builtin => None,
            TypeNode::Class(m) | TypeNode::AbstractClass(m) | TypeNode::Interface(m) => Some(m),
        }
    }
}

/// Provider wire shape for one node. `subInterfaceName` is the older spelling of
/// the implementor list and is accepted as an alias.
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "classType", default)]
    class_type: Option<String>,
    #[serde(default)]
    constructors: CtorMap,
    #[serde(default)]
    builders: CtorMap,
    #[serde(default)]
    fields: OrderedMap<TypeName>,
    #[serde(rename = "subClassName", default)]
    subclasses: Vec<TypeName>,
    #[serde(rename = "implementedClassName", alias = "subInterfaceName", default)]
    implementors: Vec<TypeName>,
}

impl<'de> Deserialize<'de> for TypeNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawNode::deserialize(deserializer)?;
        let members = ClassNode {
            constructors: raw.constructors,
            builders: raw.builders,
            fields: raw.fields,
            subclasses: raw.subclasses,
            implementors: raw.implementors,
        };
        // A node without classType is builtin/unparseable; the snapshot gets no
        // further validation.
        match raw.class_type.as_deref() {
            None => Ok(TypeNode::Builtin),
            Some("class") => Ok(TypeNode::Class(members)),
            Some("abstract class") => Ok(TypeNode::AbstractClass(members)),
            Some("interface") => Ok(TypeNode::Interface(members)),
            Some(other) => Err(serde::de::Error::custom(format!(
                "unknown classType `{other}`"
            ))),
        }
    }
}
