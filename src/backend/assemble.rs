//! Class assembly: one generated test file per source class.

use std::collections::HashSet;

use testgen_core::lang::conventions::{self, TEST_NAMESPACE_SEGMENT};

use super::errors::GenerateError;
use super::ir::TestClassDef;
use super::methods::{self, Subject};
use super::names::NameDisambiguator;
use super::style::StyleDescriptor;
use super::writer::{self, RenderConfig};
use crate::frontend::extract::ClassModel;

/// Generated test file for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Source class name without a verbatim `@` marker; the output file is `<class_name>Tests.<ext>`.
    pub class_name: String,
    pub content: String,
}

/// Assemble and render the test class for `class`.
pub fn assemble(class: &ClassModel, style: &StyleDescriptor) -> Result<GenerationResult, GenerateError> {
    assemble_with(class, style, &RenderConfig::default())
}

pub fn assemble_with(
    class: &ClassModel,
    style: &StyleDescriptor,
    config: &RenderConfig,
) -> Result<GenerationResult, GenerateError> {
    let def = test_class(class, style)?;
    Ok(GenerationResult {
        class_name: conventions::bare_identifier(&class.name).to_string(),
        content: writer::render(&def, config),
    })
}

/// Build the output model without rendering it.
pub fn test_class(class: &ClassModel, style: &StyleDescriptor) -> Result<TestClassDef, GenerateError> {
    let mut members = Vec::new();

    if class.needs_instance()
        && let Some(ctor) = &class.constructor
    {
        members.extend(methods::generate_setup(class, ctor, style));
    }

    let subject = Subject::for_class(class);
    let mut names = NameDisambiguator::new(class.public_methods.iter().map(|m| m.name.as_str()));
    for method in &class.public_methods {
        let name = names.next_name(&method.name)?;
        members.push(methods::generate_method(name, &subject, method, style));
    }

    Ok(TestClassDef {
        usings: usings(class, style),
        namespace: test_namespace(class),
        attribute: style.class_attribute,
        name: conventions::test_class_name(&class.name),
        members,
    })
}

/// Style imports, then the source's usings, then the class's own namespace; first occurrence wins.
fn usings(class: &ClassModel, style: &StyleDescriptor) -> Vec<String> {
    let style_usings = style.usings.iter().map(|ns| format!("using {ns};"));
    let source_usings = class.usings.iter().map(ToString::to_string);
    let own = class.namespace.iter().map(|ns| format!("using {ns};"));

    let mut seen = HashSet::new();
    style_usings
        .chain(source_usings)
        .chain(own)
        .filter(|line| seen.insert(line.clone()))
        .collect()
}

fn test_namespace(class: &ClassModel) -> String {
    match &class.namespace {
        Some(ns) => format!("{ns}.{TEST_NAMESPACE_SEGMENT}"),
        None => TEST_NAMESPACE_SEGMENT.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::style::TestStyle;
    use crate::frontend::{extract, lexer, parser};

    fn models(source: &str) -> Vec<ClassModel> {
        let tokens = lexer::lex(source).unwrap();
        let unit = parser::parse(&tokens).unwrap();
        extract::classes(&unit)
    }

    #[test]
    fn test_one_test_per_public_method_with_overload_names() {
        let class = &models(
            "class P { public P() { } public void Parse(string s) { } public void Parse(int i) { } public void Go() { } }",
        )[0];
        let style = TestStyle::NUnit.descriptor();
        let def = test_class(class, style).unwrap();
        assert_eq!(def.test_method_count(style.test_attribute), 3);

        let names: Vec<_> = def
            .members
            .iter()
            .filter_map(|m| match m {
                crate::backend::ir::MemberDef::Method { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["SetUp", "Parse1Test", "Parse2Test", "GoTest"]);
    }

    #[test]
    fn test_usings_are_deduplicated_in_first_seen_order() {
        let class = &models("using Moq;\nusing System;\nusing System;\nnamespace App { class A { } }")[0];
        let def = test_class(class, TestStyle::XUnit.descriptor()).unwrap();
        assert_eq!(def.usings, vec!["using Xunit;", "using Moq;", "using System;", "using App;"]);
        assert_eq!(def.namespace, "App.Tests");
    }

    #[test]
    fn test_global_namespace_and_no_methods() {
        let class = &models("class Empty { }")[0];
        let def = test_class(class, TestStyle::MsTest.descriptor()).unwrap();
        assert_eq!(def.namespace, "Tests");
        assert!(def.members.is_empty());
        assert_eq!(def.name, "EmptyTests");
    }

    #[test]
    fn test_static_class_skips_setup() {
        let class = &models("public static class Util { static Util() { } public static int Twice(int x) => x * 2; }")[0];
        let result = assemble(class, TestStyle::NUnit.descriptor()).unwrap();
        assert!(!result.content.contains("SetUp"));
        assert!(result.content.contains("int actual = Util.Twice(xFake);"));
        assert_eq!(result.class_name, "Util");
    }
}
