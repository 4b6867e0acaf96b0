//! Parser for C# declarations
//!
//! Converts a token stream into a declaration-level AST ([`CompilationUnit`]). Member bodies, initializers,
//! default values and attribute arguments are consumed by balanced-delimiter scanning and never modelled.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use testgen_syntax::{lexer, parser};
//!
//! let source = "namespace Shop { public class Cart { public int Count() => 0; } }";
//! let tokens = lexer::lex(source).unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.members.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use testgen_core::lang::keywords::{self, KeywordCategory, KeywordId};
use testgen_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/members.rs");
include!("parser/types.rs");
include!("parser/skip.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
