/// Type reference parsing.
///
/// Handles predefined keyword types, qualified and generic names (`global::System.Collections.Generic.List<T>`),
/// tuples, and the `?`, `*` and `[,]` suffixes.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn parse_type(&mut self) -> Result<TypeRef, CompileError> {
        self.enter()?;
        let result = self.parse_type_inner();
        self.leave();
        result
    }

    fn parse_type_inner(&mut self) -> Result<TypeRef, CompileError> {
        let mut ty = self.non_array_type()?;

        loop {
            if self.match_punct(PunctuationId::Question) {
                ty = TypeRef::Nullable(Box::new(ty));
            } else if self.match_punct(PunctuationId::Star) {
                ty = TypeRef::Pointer(Box::new(ty));
            } else if self.check_punct(PunctuationId::LBracket)
                && (self.peek_next().kind.is_punctuation(PunctuationId::RBracket)
                    || self.peek_next().kind.is_punctuation(PunctuationId::Comma))
            {
                self.advance();
                let mut rank = 1;
                while self.match_punct(PunctuationId::Comma) {
                    rank += 1;
                }
                self.expect_punct(PunctuationId::RBracket, "Expected ']' in array type")?;
                ty = TypeRef::Array {
                    element: Box::new(ty),
                    rank,
                };
            } else {
                break;
            }
        }

        Ok(ty)
    }

    fn non_array_type(&mut self) -> Result<TypeRef, CompileError> {
        if self.check_punct(PunctuationId::LParen) {
            return self.tuple_type();
        }

        if let Some(id) = self.peek().keyword_id()
            && keywords::is_predefined_type(id)
        {
            self.advance();
            return Ok(TypeRef::Predefined(id));
        }

        if !self.check_identifier() {
            return Err(CompileError::syntax(
                format!("Expected type, found {}", describe(&self.peek().kind)),
                self.current_span(),
            ));
        }

        self.type_name().map(TypeRef::Named)
    }

    /// `(int, string name)`
    fn tuple_type(&mut self) -> Result<TypeRef, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let mut elements = Vec::new();
        loop {
            let ty = self.parse_type()?;
            let name = if self.check_identifier() {
                Some(self.identifier()?)
            } else {
                None
            };
            elements.push(TupleElement { ty, name });
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' to close tuple type")?;
        Ok(TypeRef::Tuple(elements))
    }

    /// `[global::]A.B<C>.D`; `::` separates an alias qualifier and is treated like `.`.
    fn type_name(&mut self) -> Result<TypeName, CompileError> {
        let global = self.check_keyword(KeywordId::Global)
            && self.peek_next().kind.is_punctuation(PunctuationId::ColonColon);
        if global {
            self.advance();
            self.advance();
        }

        let mut segments = Vec::new();
        loop {
            let ident = self.identifier()?;
            let args = if self.check_punct(PunctuationId::Lt) {
                self.type_argument_list()?
            } else {
                Vec::new()
            };
            segments.push(NameSegment { ident, args });

            let continues = (self.check_punct(PunctuationId::Dot) || self.check_punct(PunctuationId::ColonColon))
                && self.peek_next().as_identifier().is_some();
            if !continues {
                break;
            }
            self.advance();
        }

        Ok(TypeName { global, segments })
    }

    /// `<T, List<U>>`
    fn type_argument_list(&mut self) -> Result<Vec<TypeRef>, CompileError> {
        self.expect_punct(PunctuationId::Lt, "Expected '<'")?;
        let mut args = Vec::new();

        // Unbound generic: `<>` or `<,>`.
        if self.check_punct(PunctuationId::Gt) || self.check_punct(PunctuationId::Comma) {
            while self.match_punct(PunctuationId::Comma) {}
            self.expect_punct(PunctuationId::Gt, "Expected '>' to close type argument list")?;
            return Ok(args);
        }

        loop {
            args.push(self.parse_type()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::Gt, "Expected '>' to close type argument list")?;
        Ok(args)
    }
}
