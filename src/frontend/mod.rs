//! testgen frontend
//!
//! This module contains the components that turn C# source into class models:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into a declaration-level AST
//! - `ast`: abstract syntax tree definitions
//! - `diagnostics`: error reporting
//! - `extract`: class models (public methods, selected constructor, namespace, usings)

// Syntax components are provided by the shared testgen_syntax crate.
pub use testgen_syntax::{ast, diagnostics, lexer, parser};

// Generator-specific pieces remain local.
pub mod extract;
