//! Errors raised while generating test classes for one source file.

use crate::frontend::diagnostics::CompileError;

/// Error during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The source could not be lexed or parsed; nothing was generated for the file.
    #[error("source could not be parsed ({} error(s)): {}", .0.len(), first_message(.0))]
    Parse(Vec<CompileError>),
    /// A test name was requested for a method that was not registered with the disambiguator.
    #[error("no method named '{0}' was registered for test naming")]
    UnknownMethodName(String),
}

fn first_message(errors: &[CompileError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}
