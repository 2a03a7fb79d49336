//! The closed sum type over declaration shapes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::composite::CompositeDeclaration;
use super::grid::GridDeclaration;
use super::variable::VariableDeclaration;
use crate::dds::formats::{DdsText, FormatOptions};

/// One declaration inside a composite body.
///
/// Closed by design: the recursive-descent parser and the serializer
/// pattern-match this exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    Variable(VariableDeclaration),
    Composite(CompositeDeclaration),
    Grid(GridDeclaration),
}

impl Declaration {
    /// The declared name, whatever the shape.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Variable(v) => &v.name,
            Declaration::Composite(c) => &c.name,
            Declaration::Grid(g) => &g.name,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableDeclaration> {
        match self {
            Declaration::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeDeclaration> {
        match self {
            Declaration::Composite(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_grid(&self) -> Option<&GridDeclaration> {
        match self {
            Declaration::Grid(g) => Some(g),
            _ => None,
        }
    }
}

impl From<VariableDeclaration> for Declaration {
    fn from(v: VariableDeclaration) -> Self {
        Declaration::Variable(v)
    }
}

impl From<CompositeDeclaration> for Declaration {
    fn from(c: CompositeDeclaration) -> Self {
        Declaration::Composite(c)
    }
}

impl From<GridDeclaration> for Declaration {
    fn from(g: GridDeclaration) -> Self {
        Declaration::Grid(g)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_formatted(&FormatOptions::default()))
    }
}
