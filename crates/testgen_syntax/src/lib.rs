//! Declaration-level C# syntax frontend: lexer, parser, AST, diagnostics.
//!
//! This crate is the parser collaborator of the skeleton generator. It recovers the declaration tree of a C#
//! compilation unit (usings, namespaces, types, methods, constructors, parameters) and deliberately does not
//! look inside member bodies: bodies, initializers and attribute arguments are skipped by balanced-delimiter
//! scanning.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no name resolution and no type checking.
//! - Vocabulary identity (keywords/punctuation) comes from `testgen_core::lang` registries.
//!
//! ## Examples
//! ```rust,no_run
//! use testgen_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("class Greeter { public string Hello() => \"hi\"; }").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.members.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
