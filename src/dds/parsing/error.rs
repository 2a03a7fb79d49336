//! Errors that can occur during parsing

use std::fmt;

use super::braces::BraceMismatchError;
use crate::dds::ast::error::{InvalidBaseTypeError, InvalidStructureKindError};
use crate::dds::ast::types::StructureKind;

/// Hard failures of a parse call.
///
/// Every variant is terminal for the enclosing parse: there is no
/// partial-tree recovery. Callers should treat a failure as "schema
/// unavailable for this dataset" rather than as a fatal condition. The one
/// soft case, a malformed variable line, never surfaces here (see
/// [`VariableDeclaration::from_text`]).
///
/// [`VariableDeclaration::from_text`]: crate::dds::ast::elements::variable::VariableDeclaration::from_text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The brace-balance pre-check failed.
    BraceMismatch(BraceMismatchError),
    /// Brace-balanced text does not match the `Dataset { ... } name;`
    /// top-level template.
    NotADataset,
    /// A declaration sequence hit a head with no recognizable type token.
    UnrecognizedDeclaration { found: String },
    /// A delimited composite declaration did not match its template.
    MalformedComposite { kind: StructureKind },
    /// A grid body deviated from `ARRAY: <var> MAPS: <var>+`.
    MalformedGrid,
    /// A type-name string outside the closed base-type enumeration.
    InvalidBaseType(InvalidBaseTypeError),
    /// A type-name string outside the closed structure-kind enumeration.
    InvalidStructureKind(InvalidStructureKindError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BraceMismatch(e) => write!(f, "{}", e),
            ParseError::NotADataset => {
                write!(f, "given text is not a Dataset definition")
            }
            ParseError::UnrecognizedDeclaration { found } => {
                write!(f, "unrecognized declaration at '{}'", found)
            }
            ParseError::MalformedComposite { kind } => {
                write!(f, "malformed {} declaration", kind)
            }
            ParseError::MalformedGrid => {
                write!(f, "malformed Grid declaration: expected ARRAY: and MAPS: sections")
            }
            ParseError::InvalidBaseType(e) => write!(f, "{}", e),
            ParseError::InvalidStructureKind(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::BraceMismatch(e) => Some(e),
            ParseError::InvalidBaseType(e) => Some(e),
            ParseError::InvalidStructureKind(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BraceMismatchError> for ParseError {
    fn from(e: BraceMismatchError) -> Self {
        ParseError::BraceMismatch(e)
    }
}

impl From<InvalidBaseTypeError> for ParseError {
    fn from(e: InvalidBaseTypeError) -> Self {
        ParseError::InvalidBaseType(e)
    }
}

impl From<InvalidStructureKindError> for ParseError {
    fn from(e: InvalidStructureKindError) -> Self {
        ParseError::InvalidStructureKind(e)
    }
}
