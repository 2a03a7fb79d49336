//! Declaration-sequence, composite, and grid parsers
//!
//! `parse_declarations` drives the classify/dispatch/append loop over a
//! run of sibling declarations; `pop_struct` and `pop_varline` each
//! consume one declaration from the front of the text and return the
//! unconsumed remainder. The same loop is the recursion point for nested
//! composite bodies.

use logos::Logos;
use tracing::trace;

use super::error::ParseError;
use super::grammar;
use crate::dds::ast::elements::composite::CompositeDeclaration;
use crate::dds::ast::elements::declaration::Declaration;
use crate::dds::ast::elements::grid::GridDeclaration;
use crate::dds::ast::elements::variable::VariableDeclaration;
use crate::dds::ast::types::StructureKind;
use crate::dds::lexing::classify::{classify_declaration, DeclarationKind};
use crate::dds::lexing::tokens::Token;

/// Cap for error snippets quoted from the offending input.
const SNIPPET_LEN: usize = 32;

fn snippet(text: &str) -> String {
    text.trim_start().chars().take(SNIPPET_LEN).collect()
}

/// Parse a run of zero or more sibling declarations.
///
/// Whitespace-only input yields an empty sequence. A head that classifies
/// as neither composite, grid, nor variable is a hard failure.
pub fn parse_declarations(text: &str) -> Result<Vec<Declaration>, ParseError> {
    let mut rest = text.trim();
    let mut declarations = Vec::new();
    while !rest.is_empty() {
        trace!(head = %snippet(rest), "parse_declarations");
        match classify_declaration(rest) {
            Some(DeclarationKind::Composite) | Some(DeclarationKind::Grid) => {
                let (declaration, remainder) = pop_struct(rest)?;
                declarations.push(declaration);
                rest = remainder;
            }
            Some(DeclarationKind::Variable) => {
                let (variable, remainder) = pop_varline(rest);
                declarations.push(Declaration::Variable(variable));
                rest = remainder;
            }
            None => {
                return Err(ParseError::UnrecognizedDeclaration {
                    found: snippet(rest),
                });
            }
        }
    }
    Ok(declarations)
}

/// Pop one composite (or grid) declaration from the front of `text`.
///
/// The declaration is delimited by scanning from its first `{` while
/// tracking nesting depth, so the braces of child composites are skipped,
/// then on to the `;` that follows the matching `}`. The remainder is
/// returned left-trimmed.
pub fn pop_struct(text: &str) -> Result<(Declaration, &str), ParseError> {
    let kind = Token::lexer(text)
        .next()
        .and_then(|t| t.ok())
        .and_then(|t| t.as_structure_kind())
        .ok_or_else(|| ParseError::UnrecognizedDeclaration {
            found: snippet(text),
        })?;

    let open = text
        .find('{')
        .ok_or(ParseError::MalformedComposite { kind })?;
    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + i);
                    break;
                }
            }
            _ => {}
        }
    }
    let close = close.ok_or(ParseError::MalformedComposite { kind })?;
    let semi = text[close..]
        .find(';')
        .map(|i| close + i)
        .ok_or(ParseError::MalformedComposite { kind })?;

    let (declaration_text, rest) = text.split_at(semi + 1);
    trace!(%kind, slice = %snippet(declaration_text), "pop_struct");

    let declaration = if kind == StructureKind::Grid {
        Declaration::Grid(parse_grid(declaration_text)?)
    } else {
        Declaration::Composite(parse_composite(declaration_text, kind)?)
    };
    Ok((declaration, rest.trim_start()))
}

/// Pop one variable line from the front of `text`.
///
/// A variable line contains no nested `;`, so the line is everything up to
/// and including the first one. The line itself parses softly (see
/// [`VariableDeclaration::from_text`]); text with no `;` at all consumes
/// the whole input.
pub fn pop_varline(text: &str) -> (VariableDeclaration, &str) {
    let (line, rest) = match text.find(';') {
        Some(i) => text.split_at(i + 1),
        None => (text, ""),
    };
    trace!(line = %snippet(line), "pop_varline");
    (VariableDeclaration::from_text(line), rest.trim_start())
}

/// Match one delimited composite against `Kind { body } name;` and recurse
/// into its body.
fn parse_composite(text: &str, kind: StructureKind) -> Result<CompositeDeclaration, ParseError> {
    let caps = grammar::COMPOSITE
        .captures(text)
        .ok_or(ParseError::MalformedComposite { kind })?;
    let kind: StructureKind = caps[1].parse()?;
    let children = parse_declarations(caps.get(2).map(|m| m.as_str()).unwrap_or_default())?;
    let name = caps[3].to_string();
    trace!(%kind, %name, children = children.len(), "parsed composite");
    Ok(CompositeDeclaration::new(name, kind, children))
}

/// Match one delimited grid against `Grid { ARRAY: ... MAPS: ... } name;`.
///
/// The array slot must parse to a real variable and there must be at least
/// one map vector; anything else is a hard failure, unlike the soft
/// variable-line contract.
fn parse_grid(text: &str) -> Result<GridDeclaration, ParseError> {
    let caps = grammar::GRID
        .captures(text)
        .ok_or(ParseError::MalformedGrid)?;

    let array = VariableDeclaration::from_text(&caps[1]);
    if array == VariableDeclaration::default() {
        return Err(ParseError::MalformedGrid);
    }

    let mut maps = Vec::new();
    for declaration in parse_declarations(&caps[2])? {
        match declaration {
            Declaration::Variable(v) => maps.push(v),
            _ => return Err(ParseError::MalformedGrid),
        }
    }
    if maps.is_empty() {
        return Err(ParseError::MalformedGrid);
    }

    let name = caps[3].to_string();
    trace!(%name, maps = maps.len(), "parsed grid");
    Ok(GridDeclaration::new(name, array, maps))
}
