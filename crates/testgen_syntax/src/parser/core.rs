// Parser core types and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse()` entrypoint. It is
// `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// Deepest namespace/type/type-argument nesting accepted before the parser gives up.
const MAX_NESTING: usize = 256;

/// Returned by `peek` past the end of a token stream that lacks a trailing `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span { start: 0, end: 0 },
};

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at member
///   boundaries (`;`, a balanced `{ ... }` group, or the closing brace of the enclosing body).
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `testgen_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`CompilationUnit`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails. The parser attempts
    /// to recover and continue after an error to report multiple issues in one pass.
    pub fn parse(mut self) -> Result<CompilationUnit, Vec<CompileError>> {
        let (usings, members) = self.namespace_body(false);

        if self.errors.is_empty() {
            Ok(CompilationUnit { usings, members })
        } else {
            Err(self.errors)
        }
    }

    /// Track recursion so pathological nesting is an error rather than a stack overflow.
    fn enter(&mut self) -> Result<(), CompileError> {
        if self.depth >= MAX_NESTING {
            return Err(CompileError::syntax(
                format!("Declarations nested deeper than {MAX_NESTING} levels"),
                self.current_span(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
