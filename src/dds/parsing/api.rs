//! Public API for the parser

use tracing::trace;

use super::braces::check_braces_matching;
use super::declarations::parse_declarations;
use super::error::ParseError;
use super::grammar;
use crate::dds::ast::elements::dataset::Dataset;

/// Parse a whole DDS document into a [`Dataset`] tree.
///
/// Brace balance is validated over the full text before any structural
/// attempt, so a mismatch is reported as such rather than as a template
/// failure. The top-level body capture is greedy on purpose: Dataset is
/// the outermost production and its body may contain arbitrarily nested
/// `}` characters.
pub fn parse_dataset(text: &str) -> Result<Dataset, ParseError> {
    check_braces_matching(text)?;

    let caps = grammar::DATASET
        .captures(text)
        .ok_or(ParseError::NotADataset)?;
    let name = caps[2].to_string();
    trace!(%name, "parse_dataset");

    let children = parse_declarations(&caps[1])?;
    Ok(Dataset::new(name, children))
}
