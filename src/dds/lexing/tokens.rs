//! Token definitions for the DDS format
//!
//! This module defines the tokens a DDS document is made of, using the
//! logos derive macro. Keyword variants cover the closed base-type and
//! structure-kind vocabularies; everything else a declaration can contain
//! (names, dimension sizes, punctuation) has its own variant. Logos
//! longest-match rules keep keywords and identifiers apart: `Float64`
//! lexes as a keyword, `Float64x` as an identifier.

use logos::Logos;

use crate::dds::ast::types::{BaseType, StructureKind};

/// All possible tokens in the DDS format
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Structure-kind keywords
    #[token("Dataset")]
    Dataset,
    #[token("Structure")]
    Structure,
    #[token("Sequence")]
    Sequence,
    #[token("Grid")]
    Grid,

    // Base-type keywords
    #[token("Byte")]
    Byte,
    #[token("Int16")]
    Int16,
    #[token("Int32")]
    Int32,
    #[token("UInt32")]
    UInt32,
    #[token("Float32")]
    Float32,
    #[token("Float64")]
    Float64,
    #[token("String")]
    String,
    #[token("Url")]
    Url,

    // Punctuation
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("=")]
    Equals,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    // Dimension sizes
    #[regex(r"[0-9]+")]
    Integer,

    // Names; dataset names may be dotted or hyphenated
    #[regex(r"[A-Za-z_][A-Za-z0-9_.-]*")]
    Identifier,
}

impl Token {
    /// Check if this token is a structure-kind keyword
    pub fn is_structure_keyword(&self) -> bool {
        self.as_structure_kind().is_some()
    }

    /// Check if this token is a base-type keyword
    pub fn is_base_type(&self) -> bool {
        self.as_base_type().is_some()
    }

    /// The structure kind this keyword names, if any
    pub fn as_structure_kind(&self) -> Option<StructureKind> {
        match self {
            Token::Dataset => Some(StructureKind::Dataset),
            Token::Structure => Some(StructureKind::Structure),
            Token::Sequence => Some(StructureKind::Sequence),
            Token::Grid => Some(StructureKind::Grid),
            _ => None,
        }
    }

    /// The base type this keyword names, if any
    pub fn as_base_type(&self) -> Option<BaseType> {
        match self {
            Token::Byte => Some(BaseType::Byte),
            Token::Int16 => Some(BaseType::Int16),
            Token::Int32 => Some(BaseType::Int32),
            Token::UInt32 => Some(BaseType::UInt32),
            Token::Float32 => Some(BaseType::Float32),
            Token::Float64 => Some(BaseType::Float64),
            Token::String => Some(BaseType::String),
            Token::Url => Some(BaseType::Url),
            _ => None,
        }
    }
}
