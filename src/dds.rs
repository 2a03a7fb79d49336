//! Main module for DDS library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;

pub use ast::{
    ArrayDimension, BaseType, CompositeDeclaration, Dataset, Declaration, GridDeclaration,
    StructureKind, VariableDeclaration,
};
pub use formats::{DdsText, FormatOptions};
pub use parsing::{check_braces_matching, parse_dataset, BraceMismatchError, ParseError};
