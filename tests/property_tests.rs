//! Property-based tests for test-class synthesis
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use std::collections::HashSet;

use proptest::prelude::*;
use testgen::backend::names::NameDisambiguator;
use testgen::backend::{self, TestStyle};

// =============================================================================
// Strategies
// =============================================================================

/// Method names drawn from a small pool so overloads and `Name1`-style collisions are frequent.
fn method_name_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Run", "Run1", "Run2", "Get", "Parse", "Parse1", "Go"])
}

fn param_type_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["int", "string", "ILogger", "List<int>", "double[]", "Item?"])
}

/// One public method declaration with up to three parameters.
fn method_strategy() -> impl Strategy<Value = (String, String)> {
    (
        method_name_strategy(),
        prop::collection::vec(param_type_strategy(), 0..=3),
        any::<bool>(),
    )
        .prop_map(|(name, params, returns)| {
            let params: Vec<String> = params
                .iter()
                .enumerate()
                .map(|(i, ty)| format!("{ty} p{i}"))
                .collect();
            let ret = if returns { "int" } else { "void" };
            let decl = format!("public {ret} {name}({}) {{ }}", params.join(", "));
            (name.to_string(), decl)
        })
}

fn style_strategy() -> impl Strategy<Value = TestStyle> {
    prop::sample::select(TestStyle::ALL.to_vec())
}

// =============================================================================
// Naming Properties
// =============================================================================

proptest! {
    /// Property: every issued test name is unique and there is one per method
    #[test]
    fn test_names_are_unique(names in prop::collection::vec(method_name_strategy(), 0..20)) {
        let mut disambiguator = NameDisambiguator::new(names.iter().copied());
        let issued: Vec<String> = names
            .iter()
            .map(|name| disambiguator.next_name(name).unwrap())
            .collect();

        let distinct: HashSet<&String> = issued.iter().collect();
        prop_assert_eq!(distinct.len(), names.len());
        for (name, test) in names.iter().zip(&issued) {
            prop_assert!(test.starts_with(name));
        }
    }

    /// Property: a name that is not overloaded gets exactly `<Name>Test`
    #[test]
    fn test_unique_names_get_plain_test_suffix(names in prop::collection::hash_set("[A-Z][a-z]{2,8}", 1..10)) {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut disambiguator = NameDisambiguator::new(names.iter().copied());
        for name in names {
            prop_assert_eq!(disambiguator.next_name(name).unwrap(), format!("{name}Test"));
        }
    }
}

// =============================================================================
// Generation Properties
// =============================================================================

proptest! {
    /// Property: k public methods produce exactly k attributed test methods
    #[test]
    fn test_one_test_per_public_method(
        methods in prop::collection::vec(method_strategy(), 0..12),
        style in style_strategy(),
    ) {
        let body: Vec<&str> = methods.iter().map(|(_, decl)| decl.as_str()).collect();
        let source = format!("namespace N {{ public class Subject {{ public Subject(int x) {{ }} {} }} }}", body.join(" "));

        let descriptor = style.descriptor();
        let results = backend::generate(&source, descriptor).unwrap();
        prop_assert_eq!(results.len(), 1);

        let marker = format!("[{}]", descriptor.test_attribute);
        let tests = results[0].content.lines().filter(|line| line.trim() == marker).count();
        prop_assert_eq!(tests, methods.len());

        let failures = results[0].content.matches("Assert.Fail(\"autogenerated\");").count();
        prop_assert_eq!(failures, methods.len());
    }

    /// Property: arbitrary input never panics the generator
    #[test]
    fn test_generator_is_total(source in "\\PC{0,200}", style in style_strategy()) {
        let _ = backend::generate(&source, style.descriptor());
    }
}
