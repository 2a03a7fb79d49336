//! Variable declaration element

use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::types::BaseType;
use super::dimension::ArrayDimension;
use crate::dds::parsing::grammar;

/// A leaf variable declaration: `Float64 time_bnds[time = 8412][bnds = 2];`.
///
/// An empty `dims` means the variable is scalar.
///
/// The `Default` instance (empty name, `Byte`, no dims) doubles as the
/// "null instance" of the soft-parse contract: [`from_text`] returns it for
/// text that does not look like a variable line, so callers can probe a
/// parse attempt by comparing against `VariableDeclaration::default()`
/// instead of handling an error.
///
/// [`from_text`]: VariableDeclaration::from_text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    pub base_type: BaseType,
    pub dims: Vec<ArrayDimension>,
}

impl VariableDeclaration {
    pub fn new(name: impl Into<String>, base_type: BaseType, dims: Vec<ArrayDimension>) -> Self {
        Self {
            name: name.into(),
            base_type,
            dims,
        }
    }

    /// Create a variable with no array dimensions.
    pub fn scalar(name: impl Into<String>, base_type: BaseType) -> Self {
        Self::new(name, base_type, Vec::new())
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Parse one variable line: a base-type token, a name, zero or more
    /// bracket groups, and a terminating `;`.
    ///
    /// This is the one deliberately soft parse in the crate: text that does
    /// not match the shape (or names an unknown base type) yields the
    /// default instance rather than an error.
    pub fn from_text(text: &str) -> Self {
        let Some(caps) = grammar::VARLINE.captures(text) else {
            return Self::default();
        };
        let Ok(base_type) = caps[1].parse::<BaseType>() else {
            return Self::default();
        };
        let name = caps[2].to_string();
        let dims = grammar::parse_dimensions(&caps[3]);
        Self {
            name,
            base_type,
            dims,
        }
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.base_type, self.name)?;
        for dim in &self.dims {
            write!(f, "{}", dim)?;
        }
        f.write_str(";")
    }
}
