//! The closed type enumerations of the DDS grammar
//!
//! A declaration head is either one of the scalar base types (`Byte`,
//! `Float64`, ...) or one of the composite structure kinds (`Dataset`,
//! `Structure`, `Sequence`, `Grid`). Both sets are closed: conversion from
//! a string validates once and fails with a dedicated error, never
//! producing a partially-typed value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{InvalidBaseTypeError, InvalidStructureKindError};

/// Scalar element type of a variable declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    #[default]
    Byte,
    Int16,
    Int32,
    UInt32,
    Float32,
    Float64,
    String,
    Url,
}

impl BaseType {
    /// Every base type, in declaration order.
    pub const ALL: [BaseType; 8] = [
        BaseType::Byte,
        BaseType::Int16,
        BaseType::Int32,
        BaseType::UInt32,
        BaseType::Float32,
        BaseType::Float64,
        BaseType::String,
        BaseType::Url,
    ];

    /// The canonical source token for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Byte => "Byte",
            BaseType::Int16 => "Int16",
            BaseType::Int32 => "Int32",
            BaseType::UInt32 => "UInt32",
            BaseType::Float32 => "Float32",
            BaseType::Float64 => "Float64",
            BaseType::String => "String",
            BaseType::Url => "Url",
        }
    }
}

impl FromStr for BaseType {
    type Err = InvalidBaseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidBaseTypeError(s.to_string()))
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a composite declaration.
///
/// `Dataset` appears, by convention, only at the tree root; nesting a
/// `Dataset`-kind composite is not rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Dataset,
    Structure,
    Sequence,
    Grid,
}

impl StructureKind {
    /// Every structure kind, in declaration order.
    pub const ALL: [StructureKind; 4] = [
        StructureKind::Dataset,
        StructureKind::Structure,
        StructureKind::Sequence,
        StructureKind::Grid,
    ];

    /// The canonical source token for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::Dataset => "Dataset",
            StructureKind::Structure => "Structure",
            StructureKind::Sequence => "Sequence",
            StructureKind::Grid => "Grid",
        }
    }
}

impl FromStr for StructureKind {
    type Err = InvalidStructureKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StructureKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| InvalidStructureKindError(s.to_string()))
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
