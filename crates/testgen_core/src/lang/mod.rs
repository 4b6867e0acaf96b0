//! Registry-backed C# vocabulary.
//!
//! ## Modules
//!
//! - [`keywords`]: reserved and contextual keywords (modifiers, declaration keywords, predefined types)
//! - [`punctuation`]: delimiters, separators and the few operators the declaration parser cares about
//! - [`conventions`]: well-known identifiers used by generated test code

pub mod conventions;
pub mod keywords;
pub mod punctuation;
