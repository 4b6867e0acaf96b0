/// Type-body member parsing.
///
/// Methods and constructors keep their signatures; nested types recurse into `type_decl`;
/// fields and properties keep their type and names; events, indexers, operators, conversions
/// and destructors are recognised and skipped.
impl<'a> Parser<'a> {
    // ========================================================================
    // Members
    // ========================================================================

    /// Parse members until the closing `}` of the enclosing type (not consumed).
    fn type_body(&mut self, type_name: &str) -> Vec<Spanned<Member>> {
        let mut members = Vec::new();

        while !self.is_at_end() && !self.check_punct(PunctuationId::RBrace) {
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            let start = self.current_span();
            match self.member(type_name) {
                Ok(member) => members.push(Spanned::new(member, start.merge(self.previous_span()))),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        members
    }

    fn member(&mut self, type_name: &str) -> Result<Member, CompileError> {
        let attributes = self.attributes()?;
        let modifiers = self.modifiers();

        if self.at_type_decl() {
            return Ok(Member::Type(self.type_decl(attributes, modifiers)?));
        }

        if self.match_punct(PunctuationId::Tilde) {
            self.identifier()?;
            self.param_list()?;
            self.body()?;
            return Ok(Member::Skipped(SkippedMember::Destructor));
        }

        if self.match_keyword(KeywordId::Event) {
            self.skip_statement()?;
            return Ok(Member::Skipped(SkippedMember::Event));
        }

        if self.check_keyword(KeywordId::Implicit) || self.check_keyword(KeywordId::Explicit) {
            self.skip_statement()?;
            return Ok(Member::Skipped(SkippedMember::Conversion));
        }

        let is_constructor = self.peek().as_identifier() == Some(type_name)
            && self.peek_next().kind.is_punctuation(PunctuationId::LParen);
        if is_constructor {
            return self.constructor(attributes, modifiers).map(Member::Constructor);
        }

        // `ref` / `ref readonly` returns.
        if self.match_keyword(KeywordId::Ref) {
            self.match_keyword(KeywordId::Readonly);
        }

        let ty = self.parse_type()?;

        if self.match_keyword(KeywordId::Operator) {
            self.skip_statement()?;
            return Ok(Member::Skipped(SkippedMember::Operator));
        }
        if self.check_keyword(KeywordId::This) {
            self.skip_statement()?;
            return Ok(Member::Skipped(SkippedMember::Indexer));
        }

        let name = match self.member_name()? {
            Some(name) => name,
            // Explicit interface indexer: `T IList<T>.this[int i]`.
            None => {
                self.skip_statement()?;
                return Ok(Member::Skipped(SkippedMember::Indexer));
            }
        };

        if self.check_punct(PunctuationId::LParen) || self.check_punct(PunctuationId::Lt) {
            return self.method(attributes, modifiers, ty, name).map(Member::Method);
        }

        if self.check_punct(PunctuationId::LBrace) {
            self.skip_group()?;
            if self.match_punct(PunctuationId::Eq) {
                self.skip_until(&[PunctuationId::Semicolon])?;
                self.expect_punct(PunctuationId::Semicolon, "Expected ';' after property initializer")?;
            }
            return Ok(Member::Property(PropertyDecl { modifiers, ty, name }));
        }

        if self.match_punct(PunctuationId::FatArrow) {
            self.skip_until(&[PunctuationId::Semicolon])?;
            self.expect_punct(PunctuationId::Semicolon, "Expected ';' after expression-bodied property")?;
            return Ok(Member::Property(PropertyDecl { modifiers, ty, name }));
        }

        self.field(modifiers, ty, name).map(Member::Field)
    }

    /// Member name, including explicit interface qualifiers (`IDisposable.Dispose`); the last
    /// segment is returned. `None` when the qualified name ends in `this` (an indexer).
    fn member_name(&mut self) -> Result<Option<Ident>, CompileError> {
        let mut name = self.identifier()?;
        loop {
            if self.check_punct(PunctuationId::Lt) {
                // Either a qualifier's type arguments (`IEnumerable<T>.GetEnumerator`) or the
                // method's own type parameters (`Map<T>(...)`).
                let save = self.pos;
                let qualifier = self.type_argument_list().is_ok() && self.check_punct(PunctuationId::Dot);
                if !qualifier {
                    self.pos = save;
                    return Ok(Some(name));
                }
            }
            if !self.match_punct(PunctuationId::Dot) {
                return Ok(Some(name));
            }
            if self.check_keyword(KeywordId::This) {
                return Ok(None);
            }
            name = self.identifier()?;
        }
    }

    fn method(
        &mut self,
        attributes: Vec<Ident>,
        modifiers: Vec<KeywordId>,
        return_type: TypeRef,
        name: Ident,
    ) -> Result<MethodDecl, CompileError> {
        let type_params = if self.check_punct(PunctuationId::Lt) {
            self.type_parameter_list()?
        } else {
            Vec::new()
        };
        let params = self.param_list()?;
        self.skip_constraints()?;
        let body = self.body()?;

        Ok(MethodDecl {
            attributes,
            modifiers,
            return_type,
            name,
            type_params,
            params,
            body,
        })
    }

    fn constructor(&mut self, attributes: Vec<Ident>, modifiers: Vec<KeywordId>) -> Result<ConstructorDecl, CompileError> {
        let name = self.identifier()?;
        let params = self.param_list()?;

        let initializer = if self.match_punct(PunctuationId::Colon) {
            let initializer = if self.match_keyword(KeywordId::Base) {
                ConstructorInitializer::Base
            } else if self.match_keyword(KeywordId::This) {
                ConstructorInitializer::This
            } else {
                return Err(CompileError::syntax(
                    format!(
                        "Expected 'base' or 'this' in constructor initializer, found {}",
                        describe(&self.peek().kind)
                    ),
                    self.current_span(),
                ));
            };
            if !self.check_punct(PunctuationId::LParen) {
                return Err(CompileError::syntax(
                    "Expected '(' after constructor initializer",
                    self.current_span(),
                ));
            }
            self.skip_group()?;
            Some(initializer)
        } else {
            None
        };

        let body = self.body()?;

        Ok(ConstructorDecl {
            attributes,
            modifiers,
            name,
            params,
            initializer,
            body,
        })
    }

    /// `Type a, b;` or `Type a = init;`. Declarators after an initializer are not recorded.
    fn field(&mut self, modifiers: Vec<KeywordId>, ty: TypeRef, first: Ident) -> Result<FieldDecl, CompileError> {
        let mut names = vec![first];

        loop {
            if self.match_punct(PunctuationId::Eq) {
                self.skip_until(&[PunctuationId::Semicolon])?;
                break;
            }
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
            names.push(self.identifier()?);
        }

        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after field declaration")?;
        Ok(FieldDecl { modifiers, ty, names })
    }
}
