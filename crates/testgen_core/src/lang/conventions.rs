//! Well-known identifiers of generated test code.

/// Suffix of a generated test class: `MyClass` → `MyClassTests`.
pub const TEST_CLASS_SUFFIX: &str = "Tests";

/// Suffix of a generated test method: `GetName` → `GetNameTest`.
pub const TEST_METHOD_SUFFIX: &str = "Test";

/// Suffix of a fixture local: parameter `name` → `nameFake`.
pub const FIXTURE_SUFFIX: &str = "Fake";

/// Prefix of the field holding the class under test: `MyClass` → `_testMyClass`.
pub const SUBJECT_FIELD_PREFIX: &str = "_test";

/// Name of the generated setup method for styles that use one.
pub const SETUP_METHOD_NAME: &str = "SetUp";

/// Namespace segment appended to the source namespace for the generated test class.
pub const TEST_NAMESPACE_SEGMENT: &str = "Tests";

/// Message of the unconditional failing assertion closing every generated test.
pub const AUTOGENERATED_MESSAGE: &str = "autogenerated";

/// Local holding the value returned by the method under test.
pub const ACTUAL_LOCAL: &str = "actual";

/// Local holding the placeholder expected value.
pub const EXPECTED_LOCAL: &str = "expected";

/// Default-value literal used for every non-mock fixture and for `expected`.
pub const DEFAULT_LITERAL: &str = "default";

/// Type name used for `actual`/`expected` when the return type is not a plain (named or predefined) type.
pub const FALLBACK_TYPE_NAME: &str = "object";

/// Generic type used for interface doubles: `Mock<ILogger>`.
pub const MOCK_TYPE: &str = "Mock";

/// Accessor on a double that yields the mocked instance.
pub const MOCK_OBJECT_ACCESSOR: &str = "Object";

/// Namespace providing [`MOCK_TYPE`].
pub const MOCK_NAMESPACE: &str = "Moq";

/// Leading character of the interface naming convention (`ILogger`).
pub const INTERFACE_PREFIX: char = 'I';

/// Return `true` if `simple_name` follows the interface naming convention: `I` followed by an uppercase letter.
///
/// ## Notes
/// - This is a naming heuristic, not type resolution: `IO` matches, `Item` does not, and an interface named
///   `Repository` is missed.
///
/// ## Examples
/// ```rust
/// use testgen_core::lang::conventions::looks_like_interface;
///
/// assert!(looks_like_interface("ILogger"));
/// assert!(!looks_like_interface("Item"));
/// assert!(!looks_like_interface("I"));
/// ```
pub fn looks_like_interface(simple_name: &str) -> bool {
    let mut chars = simple_name.chars();
    chars.next() == Some(INTERFACE_PREFIX) && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Identifier without its verbatim `@` marker; derived names never need it.
pub fn bare_identifier(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

/// Generated test class name for a source class.
pub fn test_class_name(class_name: &str) -> String {
    format!("{}{TEST_CLASS_SUFFIX}", bare_identifier(class_name))
}

/// Name of the field that holds the instance under test.
pub fn subject_field_name(class_name: &str) -> String {
    format!("{SUBJECT_FIELD_PREFIX}{}", bare_identifier(class_name))
}

/// Name of the fixture local for a parameter.
pub fn fixture_name(param_name: &str) -> String {
    format!("{}{FIXTURE_SUFFIX}", bare_identifier(param_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_heuristic() {
        assert!(looks_like_interface("ILol"));
        assert!(looks_like_interface("IO"));
        assert!(!looks_like_interface("Int32"));
        assert!(!looks_like_interface("Repository"));
        assert!(!looks_like_interface(""));
    }

    #[test]
    fn test_derived_names() {
        assert_eq!(test_class_name("MyClass"), "MyClassTests");
        assert_eq!(subject_field_name("MyClass"), "_testMyClass");
        assert_eq!(fixture_name("age"), "ageFake");
        assert_eq!(fixture_name("@event"), "eventFake");
    }
}
