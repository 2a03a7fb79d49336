//! Grammar patterns, compiled once
//!
//! The brace-delimited templates are matched with regular expressions on
//! text slices that the pop functions have already delimited, so the
//! greedy body captures are safe: the final `}` of a slice is always the
//! matching close brace.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dds::ast::elements::dimension::ArrayDimension;

/// Whole-text template for the top level: `Dataset { body } name;`.
///
/// The body capture is greedy so it can span the `}` of arbitrarily nested
/// child composites.
pub(crate) static DATASET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*Dataset\s+\{(.+)\}\s*(\S+);\s*$").unwrap());

/// One already-delimited composite declaration: `Kind { body } name;`.
pub(crate) static COMPOSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*(Dataset|Structure|Sequence|Grid)\s*\{(.*)\}\s*(\S+);\s*$").unwrap()
});

/// One already-delimited grid declaration. Section labels match
/// case-insensitively, as served DDS responses vary in their casing.
pub(crate) static GRID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*Grid\s*\{\s*ARRAY:(.+)MAPS:\s*(.+)\s*\}\s*(\w+);\s*$").unwrap()
});

/// One variable line: base type, name, optional bracket groups, `;`.
pub(crate) static VARLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)\s+(\w+)\s*((?:\[[^\]]*\])*)\s*;\s*$").unwrap());

/// One bracket group, named `[lat = 160]` or anonymous `[500]`.
pub(crate) static DIMENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*(?:(\w+)\s*=\s*)?([0-9]+)\s*\]").unwrap());

/// Extract every dimension clause of a bracket run, left to right.
///
/// Clauses that do not match the dimension shape are skipped, which is
/// what makes the variable-line parse soft rather than failing.
pub(crate) fn parse_dimensions(text: &str) -> Vec<ArrayDimension> {
    DIMENSION
        .captures_iter(text)
        .filter_map(|caps| {
            let size: u64 = caps.get(2)?.as_str().parse().ok()?;
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            Some(ArrayDimension::new(name, size))
        })
        .collect()
}
