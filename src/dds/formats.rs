//! Canonical text forms for DDS trees

pub mod text;

pub use text::{DdsText, FormatOptions};
