//! Declaration-head classifier
//!
//! Given the start of one declaration, decide which sub-parser handles it.
//! The decision looks at the first token only, never at anything further
//! into the text: a declaration whose *name* merely contains a reserved
//! token cannot misclassify.

use logos::Logos;

use super::tokens::Token;

/// Which grammar production a declaration head opens.
///
/// `Grid` is split out from the other composites because grid bodies use a
/// different sub-grammar (`ARRAY:`/`MAPS:` sections instead of a plain
/// declaration sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Grid,
    Composite,
    Variable,
}

/// Classify the declaration starting at `fragment`.
///
/// Returns `None` when the head token is not a recognized type keyword;
/// callers in the declaration-sequence parser turn that into an
/// unrecognized-declaration error.
pub fn classify_declaration(fragment: &str) -> Option<DeclarationKind> {
    let first = Token::lexer(fragment).next()?.ok()?;
    if first == Token::Grid {
        return Some(DeclarationKind::Grid);
    }
    if first.is_structure_keyword() {
        return Some(DeclarationKind::Composite);
    }
    if first.is_base_type() {
        return Some(DeclarationKind::Variable);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_head() {
        assert_eq!(
            classify_declaration("Grid { ARRAY: Float32 tas; MAPS: Float64 time; } tas;"),
            Some(DeclarationKind::Grid)
        );
    }

    #[test]
    fn test_composite_heads() {
        assert_eq!(
            classify_declaration("Structure { Float64 lat; } location;"),
            Some(DeclarationKind::Composite)
        );
        assert_eq!(
            classify_declaration("  Sequence { Float64 depth; } cast;"),
            Some(DeclarationKind::Composite)
        );
        assert_eq!(
            classify_declaration("Dataset { Float64 lat; } d;"),
            Some(DeclarationKind::Composite)
        );
    }

    #[test]
    fn test_variable_heads() {
        assert_eq!(
            classify_declaration("Float64 height;"),
            Some(DeclarationKind::Variable)
        );
        assert_eq!(
            classify_declaration("\n  Int32 catalog_number; String s;"),
            Some(DeclarationKind::Variable)
        );
    }

    #[test]
    fn test_unrecognized_head() {
        assert_eq!(classify_declaration("Complex64 z;"), None);
        assert_eq!(classify_declaration(""), None);
        assert_eq!(classify_declaration("% nonsense"), None);
    }

    #[test]
    fn test_match_is_anchored_to_the_head_token() {
        // the head is an unknown name even though it contains (and is
        // followed by) reserved tokens; an unanchored search would have
        // latched onto them
        assert_eq!(classify_declaration("MyFloat64 Structure;"), None);
        assert_eq!(classify_declaration("Float64ish lat;"), None);
    }
}
