//! Composite declaration element

use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::types::StructureKind;
use super::declaration::Declaration;
use crate::dds::formats::{DdsText, FormatOptions};

/// A brace-delimited composite: `Structure { ... } location;`.
///
/// Children are ordered as declared in the source and owned exclusively by
/// their parent; the tree has no sharing and no cycles. A composite of kind
/// [`StructureKind::Dataset`] is conventionally the tree root (see
/// [`Dataset`](super::dataset::Dataset)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeDeclaration {
    pub name: String,
    pub kind: StructureKind,
    pub children: Vec<Declaration>,
}

impl CompositeDeclaration {
    pub fn new(name: impl Into<String>, kind: StructureKind, children: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            kind,
            children,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up a direct child by name, in declaration order.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.children.iter().find(|d| d.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a CompositeDeclaration {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl fmt::Display for CompositeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_formatted(&FormatOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dds::ast::elements::variable::VariableDeclaration;
    use crate::dds::ast::types::BaseType;

    fn location() -> CompositeDeclaration {
        CompositeDeclaration::new(
            "location",
            StructureKind::Structure,
            vec![
                Declaration::Variable(VariableDeclaration::scalar("lat", BaseType::Float64)),
                Declaration::Variable(VariableDeclaration::scalar("lon", BaseType::Float64)),
            ],
        )
    }

    #[test]
    fn test_get_finds_children_by_name() {
        let s = location();
        assert_eq!(s.len(), 2);
        assert_eq!(s.get("lat").map(|d| d.name()), Some("lat"));
        assert!(s.get("latitude").is_none());
    }

    #[test]
    fn test_child_order_is_significant() {
        let a = location();
        let mut b = location();
        b.children.reverse();
        assert_ne!(a, b);
    }
}
