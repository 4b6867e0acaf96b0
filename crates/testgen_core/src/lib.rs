//! Provide the canonical C# vocabulary and the naming conventions of generated test code.
//!
//! This crate is intentionally small and dependency-free. Both the syntax frontend (`testgen_syntax`) and the
//! generator (`testgen`) consult it, so the lexer, the parser, and the emitted test classes agree on spellings.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no parser/generator types.
//! - Current scope: keyword and punctuation registries, plus the identifiers the generator emits
//!   (`Tests`/`Test` suffixes, fixture names, the `autogenerated` failure message).

pub mod lang;
