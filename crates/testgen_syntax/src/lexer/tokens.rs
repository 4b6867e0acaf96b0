//! Token types for the C# lexer.
//!
//! The lexer uses **registry-backed IDs** for vocabulary:
//! - `Keyword(KeywordId)` for registered keywords
//! - `Punctuation(PunctuationId)` for punctuation the parser distinguishes
//!
//! ## Notes
//! - Everything the declaration parser never inspects (operators, literal payloads) is kept opaque.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use testgen_core::lang::keywords::{self, KeywordId};
use testgen_core::lang::punctuation::PunctuationId;

/// Literal category; payloads are not retained because bodies and initializers are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String,
    Char,
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Punctuation(PunctuationId),
    Ident(String),
    Literal(LiteralKind),
    /// Any operator spelling not registered as punctuation (`+`, `&&`, `??`, ...).
    Operator(String),
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if registered.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
