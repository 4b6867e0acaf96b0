/// Balanced-delimiter skipping and error recovery.
///
/// Everything the declaration model does not retain (bodies, initializers, default values,
/// attribute arguments, base lists, constraint clauses) is consumed here. Only `()`, `[]` and `{}`
/// are tracked; `<`/`>` are also comparison operators and cannot be balanced reliably.
impl<'a> Parser<'a> {
    // ========================================================================
    // Skipping
    // ========================================================================

    /// Consume a delimited group starting at the current opener, including its matching closer.
    fn skip_group(&mut self) -> Result<(), CompileError> {
        let open_span = self.current_span();
        let mut stack: Vec<PunctuationId> = Vec::new();
        loop {
            let token = self.peek();
            match &token.kind {
                TokenKind::Eof => {
                    return Err(CompileError::syntax("Unexpected end of file inside delimited group", open_span)
                        .with_hint("check for a missing closing brace, bracket or parenthesis"));
                }
                TokenKind::Punctuation(p) => {
                    if let Some(closer) = closer_for(*p) {
                        stack.push(closer);
                    } else if is_closer(*p) {
                        if stack.last() != Some(p) {
                            return Err(CompileError::syntax(
                                format!("Mismatched '{}'", testgen_core::lang::punctuation::as_str(*p)),
                                token.span,
                            ));
                        }
                        stack.pop();
                    }
                }
                _ => {}
            }
            self.advance();
            if stack.is_empty() {
                return Ok(());
            }
        }
    }

    /// Skip tokens until one of `stops` appears outside any group (not consumed).
    ///
    /// Also stops before an unmatched closer, which belongs to an enclosing construct.
    fn skip_until(&mut self, stops: &[PunctuationId]) -> Result<(), CompileError> {
        loop {
            match &self.peek().kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::Punctuation(p) if stops.contains(p) => return Ok(()),
                TokenKind::Punctuation(p) if closer_for(*p).is_some() => self.skip_group()?,
                TokenKind::Punctuation(p) if is_closer(*p) => return Ok(()),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Skip a statement-like construct: up to and including `;`, or through the first top-level
    /// `{ ... }` group.
    fn skip_statement(&mut self) -> Result<(), CompileError> {
        loop {
            match &self.peek().kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::Punctuation(PunctuationId::Semicolon) => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Punctuation(PunctuationId::LBrace) => return self.skip_group(),
                TokenKind::Punctuation(p) if closer_for(*p).is_some() => self.skip_group()?,
                TokenKind::Punctuation(p) if is_closer(*p) => return Ok(()),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Consume a member body: `{ ... }`, `=> ...;` or `;`.
    fn body(&mut self) -> Result<BodyKind, CompileError> {
        if self.check_punct(PunctuationId::LBrace) {
            self.skip_group()?;
            Ok(BodyKind::Block)
        } else if self.match_punct(PunctuationId::FatArrow) {
            self.skip_until(&[PunctuationId::Semicolon])?;
            self.expect_punct(PunctuationId::Semicolon, "Expected ';' after expression body")?;
            Ok(BodyKind::Expression)
        } else if self.match_punct(PunctuationId::Semicolon) {
            Ok(BodyKind::None)
        } else {
            Err(CompileError::syntax(
                format!("Expected '{{', '=>' or ';' to start a body, found {}", describe(&self.peek().kind)),
                self.current_span(),
            ))
        }
    }

    /// Skip `where T : ...` constraint clauses; one scan covers every clause up to the body.
    fn skip_constraints(&mut self) -> Result<(), CompileError> {
        if self.match_keyword(KeywordId::Where) {
            self.skip_until(&[
                PunctuationId::LBrace,
                PunctuationId::Semicolon,
                PunctuationId::FatArrow,
            ])?;
        }
        Ok(())
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Skip to a likely member/declaration boundary after an error.
    fn synchronize(&mut self) {
        let start = self.pos;
        loop {
            match &self.peek().kind {
                TokenKind::Eof => return,
                TokenKind::Punctuation(PunctuationId::Semicolon) => {
                    self.advance();
                    return;
                }
                TokenKind::Punctuation(PunctuationId::RBrace) => {
                    if self.pos == start {
                        self.advance();
                    }
                    return;
                }
                TokenKind::Punctuation(PunctuationId::LBrace) => {
                    let _ = self.skip_group();
                    return;
                }
                TokenKind::Punctuation(p) if closer_for(*p).is_some() => {
                    if self.skip_group().is_err() {
                        return;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}

fn closer_for(open: PunctuationId) -> Option<PunctuationId> {
    match open {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        _ => None,
    }
}

fn is_closer(id: PunctuationId) -> bool {
    matches!(id, PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace)
}
