/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Identifier parsing (plain identifiers and contextual keywords)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &'a Token {
        self.peek_at(1)
    }

    fn peek_at(&self, offset: usize) -> &'a Token {
        self.tokens.get(self.pos + offset).unwrap_or(&EOF_TOKEN)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
            .unwrap_or_default()
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&'a Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(CompileError::syntax(
                format!("{}, found {}", msg, describe(&self.peek().kind)),
                self.current_span(),
            ))
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    /// Parse an identifier; contextual keywords (`record`, `where`, `global`, ...) are accepted.
    fn identifier(&mut self) -> Result<Ident, CompileError> {
        match self.peek().as_identifier() {
            Some(name) => {
                self.advance();
                Ok(name.to_string())
            }
            None => Err(CompileError::syntax(
                format!("Expected identifier, found {}", describe(&self.peek().kind)),
                self.current_span(),
            )),
        }
    }

    fn check_identifier(&self) -> bool {
        self.peek().as_identifier().is_some()
    }

    /// Dotted name for `namespace` and attribute names: `A.B.C`.
    fn qualified_name(&mut self) -> Result<QualifiedName, CompileError> {
        let mut segments = vec![self.identifier()?];
        while self.match_punct(PunctuationId::Dot) {
            segments.push(self.identifier()?);
        }
        Ok(QualifiedName::new(segments))
    }
}

/// Human-readable token description for error messages.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(*id)),
        TokenKind::Punctuation(id) => format!("'{}'", testgen_core::lang::punctuation::as_str(*id)),
        TokenKind::Ident(name) => format!("identifier '{name}'"),
        TokenKind::Literal(_) => "literal".to_string(),
        TokenKind::Operator(op) => format!("operator '{op}'"),
        TokenKind::Eof => "end of file".to_string(),
    }
}
