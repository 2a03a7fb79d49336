//! Grid declaration element

use std::fmt;

use serde::{Deserialize, Serialize};

use super::variable::VariableDeclaration;
use crate::dds::formats::{DdsText, FormatOptions};

/// The grid specialization: `Grid { ARRAY: ... MAPS: ... } tas;`.
///
/// A grid groups one data array with the map vectors that label its
/// dimensions. The parser only produces grids with exactly one `array` and
/// at least one `maps` entry; direct construction implies no such check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDeclaration {
    pub name: String,
    pub array: VariableDeclaration,
    pub maps: Vec<VariableDeclaration>,
}

impl GridDeclaration {
    pub fn new(
        name: impl Into<String>,
        array: VariableDeclaration,
        maps: Vec<VariableDeclaration>,
    ) -> Self {
        Self {
            name: name.into(),
            array,
            maps,
        }
    }

    /// Look up the array or a map vector by variable name.
    pub fn get(&self, name: &str) -> Option<&VariableDeclaration> {
        if self.array.name == name {
            return Some(&self.array);
        }
        self.maps.iter().find(|m| m.name == name)
    }
}

impl fmt::Display for GridDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_formatted(&FormatOptions::default()))
    }
}
