//! Declaration node types
//!
//! One file per node type, mirroring the grammar:
//!
//! - `dimension` - one bracketed `[name = size]` clause
//! - `variable` - a scalar or array variable line
//! - `composite` - a `Dataset`/`Structure`/`Sequence` block with children
//! - `grid` - the `Grid { ARRAY: ... MAPS: ... }` specialization
//! - `declaration` - the closed sum type over the three node shapes
//! - `dataset` - the tree root

pub mod composite;
pub mod dataset;
pub mod declaration;
pub mod dimension;
pub mod grid;
pub mod variable;

pub use composite::CompositeDeclaration;
pub use dataset::Dataset;
pub use declaration::Declaration;
pub use dimension::ArrayDimension;
pub use grid::GridDeclaration;
pub use variable::VariableDeclaration;
