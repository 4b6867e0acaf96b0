//! Lexer for C# source
//!
//! Handles tokenization including:
//! - Registered keywords and identifiers (including `@verbatim` identifiers)
//! - String literals: regular, verbatim (`@"..."`), interpolated (`$"..."`, `$@"..."`) and raw (`"""..."""`)
//! - Character and numeric literals
//! - Punctuation the declaration parser distinguishes; every other operator is an opaque token
//!
//! Comments and preprocessor lines (`#region`, `#if`, ...) are skipped. Both arms of a conditional directive
//! are tokenized, which is harmless for declaration extraction as long as each arm is balanced.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, LiteralKind)

pub mod tokens;

pub use tokens::{LiteralKind, Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use testgen_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for C# source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Only whitespace seen since the last newline; `#` starts a directive here.
    at_line_start: bool,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            at_line_start: true,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or every error found on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(self.current_pos, self.current_pos)));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        if c == '\n' {
            self.at_line_start = true;
            return;
        }
        if c.is_whitespace() || c == '\u{feff}' {
            return;
        }
        if c == '#' && self.at_line_start {
            self.skip_line();
            return;
        }
        self.at_line_start = false;

        match c {
            '/' => {
                if self.match_char('/') {
                    self.skip_line();
                } else if self.match_char('*') {
                    self.skip_block_comment(start);
                } else {
                    self.scan_operator(start, c);
                }
            }

            // Strings and chars
            '"' => {
                if self.peek() == Some('"') && self.peek_next() == Some('"') {
                    self.scan_raw_string(start, 1);
                } else {
                    self.scan_regular_string(start);
                    self.add_literal(LiteralKind::String, start);
                }
            }
            '\'' => self.scan_char(start),
            '@' => self.scan_at(start),
            '$' => self.scan_dollar(start),

            // Numbers
            '0'..='9' => self.scan_number(start),
            '.' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(start),

            // Punctuation
            '.' => self.add_punct(PunctuationId::Dot, start),
            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            '~' => self.add_punct(PunctuationId::Tilde, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),
            // Always single characters so `List<List<int>>` closes correctly.
            '<' => self.add_punct(PunctuationId::Lt, start),
            '>' => self.add_punct(PunctuationId::Gt, start),
            ':' => {
                if self.match_char(':') {
                    self.add_punct(PunctuationId::ColonColon, start);
                } else {
                    self.add_punct(PunctuationId::Colon, start);
                }
            }
            '=' => {
                if self.match_char('>') {
                    self.add_punct(PunctuationId::FatArrow, start);
                } else if self.match_char('=') {
                    self.add_op(start);
                } else {
                    self.add_punct(PunctuationId::Eq, start);
                }
            }
            '?' => {
                if self.match_char('?') {
                    self.match_char('=');
                    self.add_op(start);
                } else {
                    self.add_punct(PunctuationId::Question, start);
                }
            }
            '*' => {
                if self.match_char('=') {
                    self.add_op(start);
                } else {
                    self.add_punct(PunctuationId::Star, start);
                }
            }
            '+' | '-' | '%' | '&' | '|' | '^' | '!' => self.scan_operator(start, c),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                self.errors.push(CompileError::lexical(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    fn add_literal(&mut self, kind: LiteralKind, start: usize) {
        self.add_token(TokenKind::Literal(kind), start);
    }

    fn add_op(&mut self, start: usize) {
        let spelling = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Operator(spelling), start);
    }

    /// Operators are opaque; doubled (`&&`, `++`), compound (`+=`) and arrow (`->`) forms are joined.
    fn scan_operator(&mut self, start: usize, first: char) {
        let doubles = matches!(first, '+' | '-' | '&' | '|');
        if self.match_char('=') || (doubles && self.match_char(first)) || (first == '-' && self.match_char('>')) {
            self.match_char('=');
        }
        self.add_op(start);
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated block comment",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    /// Scan the rest of a `"..."` literal after its opening quote.
    fn scan_regular_string(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some('"') => return,
                Some('\n') | None => {
                    self.errors.push(
                        CompileError::lexical("Unterminated string literal", Span::new(start, self.current_pos))
                            .with_hint("regular strings cannot span lines; use a verbatim @\"...\" string"),
                    );
                    return;
                }
                Some(_) => {}
            }
        }
    }

    /// Scan the rest of a `@"..."` literal after its opening quote. `""` is an escaped quote.
    fn scan_verbatim_string(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('"') => {
                    if !self.match_char('"') {
                        return;
                    }
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated verbatim string literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
    }

    /// Scan a raw string literal. `opening` quotes have already been consumed; the rest of the opening run is
    /// consumed here, and the literal ends at the first run of at least as many quotes.
    fn scan_raw_string(&mut self, start: usize, opening: usize) {
        let mut delimiter = opening;
        while self.match_char('"') {
            delimiter += 1;
        }
        loop {
            match self.advance() {
                Some('"') => {
                    let mut run = 1;
                    while self.match_char('"') {
                        run += 1;
                    }
                    if run >= delimiter {
                        self.add_literal(LiteralKind::String, start);
                        return;
                    }
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated raw string literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
    }

    /// Scan the rest of an interpolated string after its opening quote, descending into `{...}` holes.
    fn scan_interpolated(&mut self, start: usize, verbatim: bool) {
        loop {
            match self.advance() {
                Some('"') => {
                    if !(verbatim && self.match_char('"')) {
                        return;
                    }
                }
                Some('\\') if !verbatim => {
                    self.advance();
                }
                Some('{') => {
                    if !self.match_char('{') {
                        self.scan_hole(start);
                    }
                }
                Some('\n') if !verbatim => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated interpolated string literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated interpolated string literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
    }

    /// Skip an interpolation hole up to its matching `}`; nested literals may contain braces.
    fn scan_hole(&mut self, start: usize) {
        let mut depth = 1usize;
        while let Some(c) = self.advance() {
            let nested_start = self.current_pos - c.len_utf8();
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                '"' => self.scan_regular_string(nested_start),
                '\'' => self.skip_char_body(nested_start),
                '@' if self.match_char('"') => self.scan_verbatim_string(nested_start),
                '$' if self.match_char('"') => self.scan_interpolated(nested_start, false),
                _ => {}
            }
        }
        self.errors.push(CompileError::lexical(
            "Unterminated interpolation hole",
            Span::new(start, self.current_pos),
        ));
    }

    fn scan_char(&mut self, start: usize) {
        self.skip_char_body(start);
        self.add_literal(LiteralKind::Char, start);
    }

    /// Consume a character literal body and its closing quote.
    fn skip_char_body(&mut self, start: usize) {
        if self.advance() == Some('\\') {
            self.advance();
        }
        loop {
            match self.advance() {
                Some('\'') => return,
                Some('\n') | None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated character literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some(_) => {}
            }
        }
    }

    /// `@"..."`, `@$"..."` or a verbatim identifier `@class`.
    fn scan_at(&mut self, start: usize) {
        if self.match_char('"') {
            self.scan_verbatim_string(start);
            self.add_literal(LiteralKind::String, start);
        } else if self.peek() == Some('$') && self.peek_next() == Some('"') {
            self.advance();
            self.advance();
            self.scan_interpolated(start, true);
            self.add_literal(LiteralKind::String, start);
        } else if self.peek().is_some_and(is_ident_start) {
            self.advance();
            self.consume_ident_tail();
            // Verbatim identifiers are never keywords.
            let spelling = self.source[start..self.current_pos].to_string();
            self.add_token(TokenKind::Ident(spelling), start);
        } else {
            self.errors.push(CompileError::lexical(
                "Unexpected character '@'",
                Span::new(start, self.current_pos),
            ));
        }
    }

    /// `$"..."`, `$@"..."`, or raw interpolated `$$"""..."""`.
    fn scan_dollar(&mut self, start: usize) {
        while self.match_char('$') {}
        let verbatim = self.match_char('@');
        if !self.match_char('"') {
            self.errors.push(CompileError::lexical(
                "Expected '\"' after '$'",
                Span::new(start, self.current_pos),
            ));
            return;
        }
        if !verbatim && self.peek() == Some('"') && self.peek_next() == Some('"') {
            self.scan_raw_string(start, 1);
        } else {
            self.scan_interpolated(start, verbatim);
            self.add_literal(LiteralKind::String, start);
        }
    }

    fn scan_number(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                let exponent = c == 'e' || c == 'E';
                self.advance();
                if exponent && matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
            } else if c == '.' && self.peek_next().is_some_and(|n| n.is_ascii_digit()) {
                self.advance();
            } else {
                break;
            }
        }
        self.add_literal(LiteralKind::Number, start);
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn consume_ident_tail(&mut self) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self, start: usize) {
        self.consume_ident_tail();
        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// C# identifiers may start with any Unicode letter or `_`.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("public class Foo"),
            vec![
                TokenKind::Keyword(KeywordId::Public),
                TokenKind::Keyword(KeywordId::Class),
                TokenKind::Ident("Foo".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_verbatim_identifier_is_not_a_keyword() {
        assert_eq!(kinds("@class")[0], TokenKind::Ident("@class".to_string()));
    }

    #[test]
    fn test_comments_and_directives_are_skipped() {
        let source = "#region Things\n// line { comment\n/* block } */ class #x\n#endregion\n";
        let tokens = lex(source);
        // `#x` mid-line is not a directive.
        assert!(tokens.is_err());

        let tokens = kinds("#region A\n// { \n/* } */ class\n#endregion\n");
        assert_eq!(tokens, vec![TokenKind::Keyword(KeywordId::Class), TokenKind::Eof]);
    }

    #[test]
    fn test_braces_inside_strings_are_not_punctuation() {
        let tokens = kinds(r#"{ "}" @"a""}" $"{x} }}{{ {"}"}" '}' """ } """ }"#);
        let braces = tokens
            .iter()
            .filter(|k| k.is_punctuation(PunctuationId::LBrace) || k.is_punctuation(PunctuationId::RBrace))
            .count();
        assert_eq!(braces, 2);
    }

    #[test]
    fn test_nested_generic_closers_are_separate() {
        let tokens = kinds("List<List<int>>");
        let closers = tokens.iter().filter(|k| k.is_punctuation(PunctuationId::Gt)).count();
        assert_eq!(closers, 2);
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let errs = lex("var s = \"abc\nclass").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("Unterminated string"));
    }

    #[test]
    fn test_unterminated_block_comment_is_an_error() {
        let errs = lex("class A { /* never closed").unwrap_err();
        assert!(errs[0].message.contains("block comment"));
    }

    #[test]
    fn test_numbers_with_exponent_and_suffix() {
        let tokens = kinds("1.5e-3f 0xFF_FFu .5m");
        let numbers = tokens
            .iter()
            .filter(|k| matches!(k, TokenKind::Literal(LiteralKind::Number)))
            .count();
        assert_eq!(numbers, 3);
    }
}
