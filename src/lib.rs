#![forbid(unsafe_code)]
//! Test skeleton generator for C# classes
//!
//! Scans C# sources and writes one stub test class per class found: a fixture per constructor and method
//! parameter, one test per public method, and a failing placeholder assertion in every test. NUnit, xUnit and
//! MSTest conventions are supported.
//!
//! - `frontend`: lexer, parser and class extraction
//! - `backend`: test-class synthesis and rendering
//! - `pipeline`: concurrent read → synthesize → write over a directory tree
//! - `cli`: command-line interface
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli`, `backend` and
//!   `pipeline` modules enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The generator emits C# text only; nothing in it is executed here.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod pipeline;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::extract;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::{GenerateError, GenerationResult, RenderConfig, StyleDescriptor, TestStyle, generate, generate_with};
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport};
