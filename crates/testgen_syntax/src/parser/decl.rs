/// Declaration parsing.
///
/// This chunk parses namespace-level items:
/// - `using` directives (including `global`, `static` and alias forms)
/// - block and file-scoped namespaces
/// - type declarations (`class`, `struct`, `interface`, `record`, `enum`, `delegate`)
/// - attribute sections, modifiers, type parameter and parameter lists shared with members
impl<'a> Parser<'a> {
    // ========================================================================
    // Namespaces and usings
    // ========================================================================

    /// Parse items until `}` (when `braced`) or end of file.
    ///
    /// Outside a braced namespace, anything that is not a declaration is a top-level statement
    /// and is skipped.
    fn namespace_body(&mut self, braced: bool) -> (Vec<UsingDirective>, Vec<Spanned<NamespaceMember>>) {
        let mut usings = Vec::new();
        let mut members = Vec::new();

        loop {
            if self.is_at_end() || (braced && self.check_punct(PunctuationId::RBrace)) {
                break;
            }
            if let Err(e) = self.namespace_item(braced, &mut usings, &mut members) {
                self.errors.push(e);
                self.synchronize();
            }
        }

        (usings, members)
    }

    fn namespace_item(
        &mut self,
        braced: bool,
        usings: &mut Vec<UsingDirective>,
        members: &mut Vec<Spanned<NamespaceMember>>,
    ) -> Result<(), CompileError> {
        let start = self.current_span();

        if self.match_punct(PunctuationId::Semicolon) {
            return Ok(());
        }
        if self.check_punct(PunctuationId::RBrace) {
            self.advance();
            return Err(CompileError::syntax("Unexpected '}'", start));
        }

        // extern alias X;
        if self.check_keyword(KeywordId::Extern) && self.peek_next().as_identifier() == Some("alias") {
            return self.skip_statement();
        }

        if self.check_keyword(KeywordId::Using)
            || (self.check_keyword(KeywordId::Global) && self.peek_next().kind.is_keyword(KeywordId::Using))
        {
            let save = self.pos;
            return match self.using_directive() {
                Ok(using) => {
                    usings.push(using);
                    Ok(())
                }
                // `using var x = ...;` and `using (...) { }` are statements.
                Err(_) if !braced => {
                    self.pos = save;
                    self.skip_statement()
                }
                Err(e) => Err(e),
            };
        }

        if self.check_keyword(KeywordId::Namespace) {
            let ns = self.namespace_decl()?;
            let span = start.merge(self.previous_span());
            members.push(Spanned::new(NamespaceMember::Namespace(ns), span));
            return Ok(());
        }

        let attributes = self.attributes()?;
        let modifiers = self.modifiers();

        if self.at_type_decl() {
            let decl = self.type_decl(attributes, modifiers)?;
            let span = start.merge(self.previous_span());
            members.push(Spanned::new(NamespaceMember::Type(decl), span));
            return Ok(());
        }

        if !braced {
            // Assembly-level attribute sections stand alone.
            if !attributes.is_empty() && modifiers.is_empty() {
                return Ok(());
            }
            return self.skip_statement();
        }

        Err(CompileError::syntax(
            format!("Expected type declaration, found {}", describe(&self.peek().kind)),
            self.current_span(),
        ))
    }

    /// `[global] using [static] [Alias =] Target;`
    fn using_directive(&mut self) -> Result<UsingDirective, CompileError> {
        let is_global = self.match_keyword(KeywordId::Global);
        self.expect_keyword(KeywordId::Using, "Expected 'using'")?;
        let is_static = self.match_keyword(KeywordId::Static);

        let alias = if self.check_identifier() && self.peek_next().kind.is_punctuation(PunctuationId::Eq) {
            let alias = self.identifier()?;
            self.advance();
            Some(alias)
        } else {
            None
        };

        let target = self.parse_type()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after using directive")?;

        Ok(UsingDirective {
            is_global,
            is_static,
            alias,
            target,
        })
    }

    fn namespace_decl(&mut self) -> Result<NamespaceDecl, CompileError> {
        self.enter()?;
        let result = self.namespace_decl_inner();
        self.leave();
        result
    }

    fn namespace_decl_inner(&mut self) -> Result<NamespaceDecl, CompileError> {
        self.expect_keyword(KeywordId::Namespace, "Expected 'namespace'")?;
        let name = self.qualified_name()?;

        if self.match_punct(PunctuationId::Semicolon) {
            // File-scoped: everything to the end of the file belongs to this namespace.
            let (usings, members) = self.namespace_body(false);
            return Ok(NamespaceDecl {
                name,
                file_scoped: true,
                usings,
                members,
            });
        }

        self.expect_punct(PunctuationId::LBrace, "Expected '{' or ';' after namespace name")?;
        let (usings, members) = self.namespace_body(true);
        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close namespace")?;
        self.match_punct(PunctuationId::Semicolon);

        Ok(NamespaceDecl {
            name,
            file_scoped: false,
            usings,
            members,
        })
    }

    // ========================================================================
    // Attributes and modifiers
    // ========================================================================

    /// Parse any number of `[...]` sections, keeping attribute names and dropping arguments.
    fn attributes(&mut self) -> Result<Vec<Ident>, CompileError> {
        let mut names = Vec::new();

        while self.check_punct(PunctuationId::LBracket) {
            self.advance();

            // Target specifier: `assembly:`, `return:`, `field:`, ...
            let has_target = matches!(self.peek().kind, TokenKind::Ident(_) | TokenKind::Keyword(_))
                && self.peek_next().kind.is_punctuation(PunctuationId::Colon);
            if has_target {
                self.advance();
                self.advance();
            }

            loop {
                if self.check_keyword(KeywordId::Global) && self.peek_next().kind.is_punctuation(PunctuationId::ColonColon)
                {
                    self.advance();
                    self.advance();
                }
                if self.check_identifier() {
                    names.push(self.qualified_name()?.to_string());
                }
                self.skip_until(&[PunctuationId::Comma, PunctuationId::RBracket])?;
                if !self.match_punct(PunctuationId::Comma) || self.check_punct(PunctuationId::RBracket) {
                    break;
                }
            }

            self.expect_punct(PunctuationId::RBracket, "Expected ']' to close attribute section")?;
        }

        Ok(names)
    }

    /// Consume modifier keywords in any order.
    fn modifiers(&mut self) -> Vec<KeywordId> {
        let mut modifiers = Vec::new();
        while let Some(id) = self.peek().keyword_id() {
            if keywords::category(id) != KeywordCategory::Modifier {
                break;
            }
            // A contextual modifier followed by `(`, `;`, `=` or `{` is really a member name.
            let next = &self.peek_next().kind;
            if keywords::is_contextual(id)
                && (next.is_punctuation(PunctuationId::LParen)
                    || next.is_punctuation(PunctuationId::Semicolon)
                    || next.is_punctuation(PunctuationId::Eq)
                    || next.is_punctuation(PunctuationId::LBrace))
            {
                break;
            }
            modifiers.push(id);
            self.advance();
        }
        modifiers
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<(), CompileError> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(CompileError::syntax(
                format!("{}, found {}", msg, describe(&self.peek().kind)),
                self.current_span(),
            ))
        }
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    /// Return `true` if the current token starts a type declaration (after attributes and modifiers).
    fn at_type_decl(&self) -> bool {
        match self.peek().keyword_id() {
            Some(KeywordId::Class | KeywordId::Struct | KeywordId::Interface | KeywordId::Enum | KeywordId::Delegate) => {
                true
            }
            Some(KeywordId::Record) => {
                let next = &self.peek_next().kind;
                matches!(next, TokenKind::Ident(_))
                    || next.is_keyword(KeywordId::Class)
                    || next.is_keyword(KeywordId::Struct)
            }
            _ => false,
        }
    }

    fn type_decl(&mut self, attributes: Vec<Ident>, modifiers: Vec<KeywordId>) -> Result<TypeDecl, CompileError> {
        self.enter()?;
        let result = self.type_decl_inner(attributes, modifiers);
        self.leave();
        result
    }

    fn type_decl_inner(&mut self, attributes: Vec<Ident>, modifiers: Vec<KeywordId>) -> Result<TypeDecl, CompileError> {
        let kind = match self.advance().keyword_id() {
            Some(KeywordId::Class) => TypeKind::Class,
            Some(KeywordId::Struct) => TypeKind::Struct,
            Some(KeywordId::Interface) => TypeKind::Interface,
            Some(KeywordId::Enum) => TypeKind::Enum,
            Some(KeywordId::Delegate) => TypeKind::Delegate,
            Some(KeywordId::Record) => {
                if self.match_keyword(KeywordId::Struct) {
                    TypeKind::RecordStruct
                } else {
                    self.match_keyword(KeywordId::Class);
                    TypeKind::Record
                }
            }
            _ => {
                return Err(CompileError::syntax("Expected type declaration keyword", self.previous_span()));
            }
        };

        match kind {
            TypeKind::Enum => return self.enum_decl(attributes, modifiers),
            TypeKind::Delegate => return self.delegate_decl(attributes, modifiers),
            _ => {}
        }

        let name = self.identifier().map_err(|e| e.with_hint(format!("a {kind} declaration needs a name")))?;
        let type_params = if self.check_punct(PunctuationId::Lt) {
            self.type_parameter_list()?
        } else {
            Vec::new()
        };
        let primary_params = if self.check_punct(PunctuationId::LParen) {
            Some(self.param_list()?)
        } else {
            None
        };

        // Base list and constraint clauses.
        self.skip_until(&[PunctuationId::LBrace, PunctuationId::Semicolon])?;

        let members = if self.match_punct(PunctuationId::LBrace) {
            let members = self.type_body(&name);
            self.expect_punct(PunctuationId::RBrace, &format!("Expected '}}' to close {kind} '{name}'"))?;
            self.match_punct(PunctuationId::Semicolon);
            members
        } else {
            self.expect_punct(PunctuationId::Semicolon, &format!("Expected '{{' or ';' after {kind} header"))?;
            Vec::new()
        };

        Ok(TypeDecl {
            kind,
            attributes,
            modifiers,
            name,
            type_params,
            primary_params,
            members,
        })
    }

    /// `enum E : byte { A = 1, B }`; members are not modelled.
    fn enum_decl(&mut self, attributes: Vec<Ident>, modifiers: Vec<KeywordId>) -> Result<TypeDecl, CompileError> {
        let name = self.identifier()?;
        self.skip_until(&[PunctuationId::LBrace])?;
        if !self.check_punct(PunctuationId::LBrace) {
            return Err(CompileError::syntax(
                format!("Expected '{{' after enum '{name}'"),
                self.current_span(),
            ));
        }
        self.skip_group()?;
        self.match_punct(PunctuationId::Semicolon);

        Ok(TypeDecl {
            kind: TypeKind::Enum,
            attributes,
            modifiers,
            name,
            type_params: Vec::new(),
            primary_params: None,
            members: Vec::new(),
        })
    }

    /// `delegate TResult Name<T>(T arg) where ...;`
    fn delegate_decl(&mut self, attributes: Vec<Ident>, modifiers: Vec<KeywordId>) -> Result<TypeDecl, CompileError> {
        self.parse_type()?;
        let name = self.identifier()?;
        let type_params = if self.check_punct(PunctuationId::Lt) {
            self.type_parameter_list()?
        } else {
            Vec::new()
        };
        let params = self.param_list()?;
        self.skip_until(&[PunctuationId::Semicolon])?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after delegate declaration")?;

        Ok(TypeDecl {
            kind: TypeKind::Delegate,
            attributes,
            modifiers,
            name,
            type_params,
            primary_params: Some(params),
            members: Vec::new(),
        })
    }

    // ========================================================================
    // Type parameters and parameters
    // ========================================================================

    /// `<[attr] [in|out] T, ...>`
    fn type_parameter_list(&mut self) -> Result<Vec<Ident>, CompileError> {
        self.expect_punct(PunctuationId::Lt, "Expected '<'")?;
        let mut params = Vec::new();
        loop {
            self.attributes()?;
            if !self.match_keyword(KeywordId::In) {
                self.match_keyword(KeywordId::Out);
            }
            params.push(self.identifier()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::Gt, "Expected '>' to close type parameter list")?;
        Ok(params)
    }

    /// `( [attr] [modifiers] Type name [= default], ... )`
    fn param_list(&mut self) -> Result<Vec<Param>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let mut params = Vec::new();

        if self.match_punct(PunctuationId::RParen) {
            return Ok(params);
        }

        loop {
            params.push(self.param()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }

        self.expect_punct(PunctuationId::RParen, "Expected ')' to close parameter list")?;
        Ok(params)
    }

    fn param(&mut self) -> Result<Param, CompileError> {
        self.attributes()?;

        let mut modifier: Option<ParamModifier> = None;
        loop {
            let next = match self.peek().keyword_id() {
                Some(KeywordId::Ref) => Some(ParamModifier::Ref),
                Some(KeywordId::Out) => Some(ParamModifier::Out),
                Some(KeywordId::In) => Some(ParamModifier::In),
                Some(KeywordId::Params) => Some(ParamModifier::Params),
                Some(KeywordId::This) => Some(ParamModifier::This),
                // `scoped ref`, `ref readonly`: only the passing mode matters.
                Some(KeywordId::Scoped | KeywordId::Readonly) => None,
                _ => break,
            };
            self.advance();
            // Passing modes win over `this`/`params` so call sites can repeat them.
            let passing = matches!(
                modifier,
                Some(ParamModifier::Ref | ParamModifier::Out | ParamModifier::In)
            );
            if next.is_some() && !passing {
                modifier = next;
            }
        }

        let ty = self.parse_type()?;
        let name = self.identifier()?;
        let has_default = if self.match_punct(PunctuationId::Eq) {
            self.skip_until(&[PunctuationId::Comma, PunctuationId::RParen])?;
            true
        } else {
            false
        };

        Ok(Param {
            modifier,
            ty,
            name,
            has_default,
        })
    }
}
