//! Small helper APIs for working with `Token` / `TokenKind`.

use crate::lexer::{Token, TokenKind};
use testgen_core::lang::keywords::{self, KeywordId};
use testgen_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Spelling usable as an identifier: plain identifiers and contextual keywords.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            TokenKind::Keyword(id) if keywords::is_contextual(*id) => Some(keywords::as_str(*id)),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.as_identifier()`.
    pub fn as_identifier(&self) -> Option<&str> {
        self.kind.as_identifier()
    }
}
