//! Error types for AST construction

use std::fmt;

/// Raised when a type-name string falls outside the closed [`BaseType`]
/// enumeration.
///
/// [`BaseType`]: super::types::BaseType
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBaseTypeError(pub String);

impl fmt::Display for InvalidBaseTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid DDS base type", self.0)
    }
}

impl std::error::Error for InvalidBaseTypeError {}

/// Raised when a type-name string falls outside the closed
/// [`StructureKind`] enumeration.
///
/// [`StructureKind`]: super::types::StructureKind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStructureKindError(pub String);

impl fmt::Display for InvalidStructureKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid DDS structure kind", self.0)
    }
}

impl std::error::Error for InvalidStructureKindError {}
