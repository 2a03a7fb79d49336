//! Canonical serializer
//!
//! Every node reconstructs a text form, in a compact single-line rendering
//! or a pretty multi-line one with a configurable indent. Reconstruction
//! is canonical, not byte-preserving: re-parsing a rendered tree yields a
//! structurally equal tree, but whitespace need not match the source.

use crate::dds::ast::elements::composite::CompositeDeclaration;
use crate::dds::ast::elements::dataset::Dataset;
use crate::dds::ast::elements::declaration::Declaration;
use crate::dds::ast::elements::dimension::ArrayDimension;
use crate::dds::ast::elements::grid::GridDeclaration;
use crate::dds::ast::elements::variable::VariableDeclaration;

/// Rendering options for [`DdsText::text_formatted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indent width per nesting level in the multi-line form.
    pub indent: usize,
    /// One child per line when set; single-line otherwise.
    pub multiline: bool,
}

impl FormatOptions {
    /// Multi-line form, four-space indent.
    pub fn pretty() -> Self {
        Self {
            indent: 4,
            multiline: true,
        }
    }

    /// Single-line form.
    pub fn compact() -> Self {
        Self {
            indent: 0,
            multiline: false,
        }
    }

    /// Multi-line form with a custom indent width.
    pub fn with_indent(indent: usize) -> Self {
        Self {
            indent,
            multiline: true,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::pretty()
    }
}

/// Reconstructable text form of a DDS node.
pub trait DdsText {
    /// Render with explicit options.
    fn text_formatted(&self, options: &FormatOptions) -> String;

    /// Compact single-line rendering.
    fn text(&self) -> String {
        self.text_formatted(&FormatOptions::compact())
    }
}

/// Prefix every non-empty line of `text` with `width` spaces.
fn indent_lines(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl DdsText for ArrayDimension {
    fn text_formatted(&self, _options: &FormatOptions) -> String {
        self.to_string()
    }
}

impl DdsText for VariableDeclaration {
    fn text_formatted(&self, _options: &FormatOptions) -> String {
        self.to_string()
    }
}

impl DdsText for CompositeDeclaration {
    fn text_formatted(&self, options: &FormatOptions) -> String {
        let children: Vec<String> = self
            .children
            .iter()
            .map(|c| c.text_formatted(options))
            .collect();
        if !options.multiline {
            return format!(
                "{} {{ {} }} {};",
                self.kind,
                children.join("  "),
                self.name
            );
        }
        if children.is_empty() {
            return format!("{} {{ }} {};", self.kind, self.name);
        }
        let body = indent_lines(&children.join("\n"), options.indent);
        format!("{} {{\n{}\n}} {};", self.kind, body, self.name)
    }
}

impl DdsText for GridDeclaration {
    fn text_formatted(&self, options: &FormatOptions) -> String {
        let maps: Vec<String> = self
            .maps
            .iter()
            .map(|m| m.text_formatted(options))
            .collect();
        if !options.multiline {
            return format!(
                "Grid {{ ARRAY:{} MAPS:{} }} {};",
                self.array.text(),
                maps.join(" "),
                self.name
            );
        }
        let label_pad = " ".repeat(options.indent);
        let array = indent_lines(&self.array.to_string(), options.indent * 2);
        let maps = indent_lines(&maps.join("\n"), options.indent * 2);
        format!(
            "Grid {{\n{label_pad}ARRAY:\n{array}\n{label_pad}MAPS:\n{maps}\n}} {};",
            self.name
        )
    }
}

impl DdsText for Declaration {
    fn text_formatted(&self, options: &FormatOptions) -> String {
        match self {
            Declaration::Variable(v) => v.text_formatted(options),
            Declaration::Composite(c) => c.text_formatted(options),
            Declaration::Grid(g) => g.text_formatted(options),
        }
    }
}

impl DdsText for Dataset {
    fn text_formatted(&self, options: &FormatOptions) -> String {
        self.as_composite().text_formatted(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dds::ast::types::{BaseType, StructureKind};

    fn location() -> CompositeDeclaration {
        CompositeDeclaration::new(
            "location",
            StructureKind::Structure,
            vec![
                Declaration::Variable(VariableDeclaration::scalar("latitude", BaseType::Float64)),
                Declaration::Variable(VariableDeclaration::scalar("longitude", BaseType::Float64)),
            ],
        )
    }

    #[test]
    fn test_variable_text() {
        let vl = VariableDeclaration::new(
            "time_bnds",
            BaseType::Float64,
            vec![
                ArrayDimension::new("time", 8412),
                ArrayDimension::new("bnds", 2),
            ],
        );
        assert_eq!(vl.text(), "Float64 time_bnds[time = 8412][bnds = 2];");
        // variables render the same in both modes
        assert_eq!(vl.text_formatted(&FormatOptions::pretty()), vl.text());
    }

    #[test]
    fn test_composite_pretty_default_indent() {
        let expected = "Structure {\n    Float64 latitude;\n    Float64 longitude;\n} location;";
        assert_eq!(location().text_formatted(&FormatOptions::pretty()), expected);
    }

    #[test]
    fn test_composite_pretty_custom_indent() {
        let expected = "Structure {\n  Float64 latitude;\n  Float64 longitude;\n} location;";
        assert_eq!(
            location().text_formatted(&FormatOptions::with_indent(2)),
            expected
        );
    }

    #[test]
    fn test_composite_compact() {
        assert_eq!(
            location().text(),
            "Structure { Float64 latitude;  Float64 longitude; } location;"
        );
    }

    #[test]
    fn test_empty_composite_forms() {
        let empty = CompositeDeclaration::new("x", StructureKind::Sequence, Vec::new());
        assert_eq!(empty.text(), "Sequence {  } x;");
        assert_eq!(empty.text_formatted(&FormatOptions::pretty()), "Sequence { } x;");
    }

    #[test]
    fn test_nested_composite_pretty_indents_each_level() {
        let station = CompositeDeclaration::new(
            "station",
            StructureKind::Sequence,
            vec![
                Declaration::Variable(VariableDeclaration::scalar("experimenter", BaseType::String)),
                Declaration::Composite(location()),
            ],
        );
        let expected = "Sequence {\n    String experimenter;\n    Structure {\n        Float64 latitude;\n        Float64 longitude;\n    } location;\n} station;";
        assert_eq!(station.text_formatted(&FormatOptions::pretty()), expected);
    }

    #[test]
    fn test_grid_forms() {
        let grid = GridDeclaration::new(
            "tas",
            VariableDeclaration::new(
                "tas",
                BaseType::Float32,
                vec![ArrayDimension::new("lat", 160)],
            ),
            vec![VariableDeclaration::new(
                "lat",
                BaseType::Float64,
                vec![ArrayDimension::new("lat", 160)],
            )],
        );
        assert_eq!(
            grid.text(),
            "Grid { ARRAY:Float32 tas[lat = 160]; MAPS:Float64 lat[lat = 160]; } tas;"
        );
        let expected = "Grid {\n    ARRAY:\n        Float32 tas[lat = 160];\n    MAPS:\n        Float64 lat[lat = 160];\n} tas;";
        assert_eq!(grid.text_formatted(&FormatOptions::pretty()), expected);
    }
}
