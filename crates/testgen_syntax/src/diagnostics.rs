//! Diagnostics for the C# declaration frontend.
//!
//! [`CompileError`] is the plain error value produced by the lexer and parser. [`SourceDiagnostic`] wraps one
//! together with its source text so it can be rendered by `miette` with a labelled span.

use miette::{NamedSource, SourceSpan};

use crate::ast::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// An error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Lexical,
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Syntax,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

/// A [`CompileError`] bound to its source file, renderable with `miette`'s graphical handler.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic(code(testgen::syntax))]
pub struct SourceDiagnostic {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

impl SourceDiagnostic {
    pub fn new(file_name: &str, source: &str, error: &CompileError) -> Self {
        let start = error.span.start.min(source.len());
        let len = error.span.end.saturating_sub(start).min(source.len() - start);
        Self {
            message: error.to_string(),
            src: NamedSource::new(file_name, source.to_string()),
            span: SourceSpan::new(start.into(), len),
            help: (!error.hints.is_empty()).then(|| error.hints.join("\n")),
        }
    }
}

/// Render errors as a single string, one graphical report per error.
pub fn render_errors(file_name: &str, source: &str, errors: &[CompileError]) -> String {
    let handler = miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for error in errors {
        let diagnostic = SourceDiagnostic::new(file_name, source, error);
        if handler.render_report(&mut out, &diagnostic).is_err() {
            out.push_str(&format!("{file_name}: {error}\n"));
        }
    }
    out
}

/// 1-based line and column of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, source[line_start..offset].chars().count() + 1)
}

/// One-line summary `file:line:col: kind: message`, used in logs.
pub fn summarize(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line, col) = line_col(source, error.span.start);
    format!("{file_name}:{line}:{col}: {error}")
}
