//! Dataset root element

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::super::error::InvalidStructureKindError;
use super::super::types::StructureKind;
use super::composite::CompositeDeclaration;
use super::declaration::Declaration;
use crate::dds::formats::{DdsText, FormatOptions};

/// The tree root: a composite of kind [`StructureKind::Dataset`].
///
/// Derefs to the inner [`CompositeDeclaration`], so child lookup and
/// iteration read the same as on any other composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset(CompositeDeclaration);

impl Dataset {
    pub fn new(name: impl Into<String>, children: Vec<Declaration>) -> Self {
        Self(CompositeDeclaration::new(
            name,
            StructureKind::Dataset,
            children,
        ))
    }

    /// Wrap an existing composite, which must be of `Dataset` kind.
    pub fn from_composite(
        composite: CompositeDeclaration,
    ) -> Result<Self, InvalidStructureKindError> {
        if composite.kind != StructureKind::Dataset {
            return Err(InvalidStructureKindError(composite.kind.as_str().to_string()));
        }
        Ok(Self(composite))
    }

    pub fn as_composite(&self) -> &CompositeDeclaration {
        &self.0
    }

    pub fn into_composite(self) -> CompositeDeclaration {
        self.0
    }
}

impl Deref for Dataset {
    type Target = CompositeDeclaration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_formatted(&FormatOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dds::ast::elements::variable::VariableDeclaration;
    use crate::dds::ast::types::BaseType;

    #[test]
    fn test_new_sets_dataset_kind() {
        let ds = Dataset::new("data", Vec::new());
        assert_eq!(ds.kind, StructureKind::Dataset);
        assert_eq!(ds.name, "data");
    }

    #[test]
    fn test_from_composite_rejects_other_kinds() {
        let seq = CompositeDeclaration::new("station", StructureKind::Sequence, Vec::new());
        assert!(Dataset::from_composite(seq).is_err());

        let ok = CompositeDeclaration::new("data", StructureKind::Dataset, Vec::new());
        assert!(Dataset::from_composite(ok).is_ok());
    }

    #[test]
    fn test_deref_gives_child_access() {
        let ds = Dataset::new(
            "data",
            vec![Declaration::Variable(VariableDeclaration::scalar(
                "catalog_number",
                BaseType::Int32,
            ))],
        );
        assert_eq!(ds.get("catalog_number").map(|d| d.name()), Some("catalog_number"));
        assert_eq!(ds.len(), 1);
    }
}
