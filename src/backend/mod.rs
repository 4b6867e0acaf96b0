//! testgen backend
//!
//! This module turns class models into rendered test classes.
//!
//! The pipeline for one source file is:
//! 1. Lex and parse (`frontend`) → `CompilationUnit`
//! 2. Extract class models (`frontend::extract`)
//! 3. For each class: fixtures, test names, setup and test methods → `ir::TestClassDef`
//! 4. Render with the indentation-tracking writer → `GenerationResult`
//!
//! ## Module Organization
//!
//! - `style` - Test-framework descriptors (NUnit, xUnit, MSTest)
//! - `fixtures` - Parameter fixtures (mock doubles or `default` placeholders)
//! - `names` - Test-method naming with overload numbering
//! - `methods` - Setup and test-method generation
//! - `assemble` - Whole-class assembly (usings, namespace, members)
//! - `ir` - Output model of generated C#
//! - `writer` - Indentation-tracking renderer
//! - `errors` - `GenerateError`

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod assemble;
pub mod errors;
pub mod fixtures;
pub mod ir;
pub mod methods;
pub mod names;
pub mod style;
pub mod writer;

pub use assemble::{GenerationResult, assemble, assemble_with};
pub use errors::GenerateError;
pub use style::{StyleDescriptor, TestStyle, UnknownStyle};
pub use writer::RenderConfig;

use crate::frontend::{extract, lexer, parser};

/// Generate one test class per class declared in `source`.
///
/// ## Errors
/// [`GenerateError::Parse`] if the source cannot be lexed or parsed; no partial results are returned.
#[tracing::instrument(skip_all, fields(style = %style.style, source_len = source.len()))]
pub fn generate(source: &str, style: &StyleDescriptor) -> Result<Vec<GenerationResult>, GenerateError> {
    generate_with(source, style, &RenderConfig::default())
}

/// [`generate`] with explicit rendering options.
#[tracing::instrument(skip_all, fields(style = %style.style, indent = config.indent_width))]
pub fn generate_with(
    source: &str,
    style: &StyleDescriptor,
    config: &RenderConfig,
) -> Result<Vec<GenerationResult>, GenerateError> {
    let tokens = lexer::lex(source).map_err(GenerateError::Parse)?;
    let unit = parser::parse(&tokens).map_err(GenerateError::Parse)?;
    let classes = extract::classes(&unit);
    tracing::debug!(classes = classes.len(), "extracted classes");

    classes.iter().map(|class| assemble_with(class, style, config)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_one_result_per_class() {
        let source = "namespace N { class A { } class B { class C { } } }";
        let results = generate(source, TestStyle::NUnit.descriptor()).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.class_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_failure_yields_no_results() {
        let err = generate("class { ", TestStyle::NUnit.descriptor()).unwrap_err();
        assert!(matches!(err, GenerateError::Parse(errors) if !errors.is_empty()));
    }

    #[test]
    fn test_lexical_failure_is_a_parse_error() {
        let err = generate("class A { string s = \"open }", TestStyle::XUnit.descriptor()).unwrap_err();
        assert!(matches!(err, GenerateError::Parse(_)));
    }

    #[test]
    fn test_indent_width_reaches_the_output() {
        let source = "class A { public void Go() { } }";
        let style = TestStyle::NUnit.descriptor();
        let two = generate_with(source, style, &RenderConfig::default().with_indent_width(2)).unwrap();
        let four = generate(source, style).unwrap();

        assert!(two[0].content.lines().any(|l| l.starts_with("  public class ATests")));
        assert!(four[0].content.lines().any(|l| l.starts_with("    public class ATests")));
        assert!(!two[0].content.lines().any(|l| l.starts_with("    public class ATests")));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let source = "class A { public A(int x) { } public int Get() => 1; public int Get(int y) => y; }";
        let style = TestStyle::MsTest.descriptor();
        assert_eq!(generate(source, style).unwrap(), generate(source, style).unwrap());
    }
}
