//! Test-framework styles.
//!
//! A [`TestStyle`] is the selector chosen once per run; its [`StyleDescriptor`] is the static description of
//! everything that differs between frameworks: imports, class attribute, setup mechanism, test attribute and the
//! shape of the equality assertion.

use std::fmt;

use testgen_core::lang::conventions::MOCK_NAMESPACE;

use super::ir::Expr;

/// Built-in test-framework conventions, keyed by their selector number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TestStyle {
    NUnit = 1,
    XUnit = 2,
    MsTest = 3,
}

/// Selector outside the built-in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown test style {0}; expected 1 (NUnit), 2 (xUnit) or 3 (MSTest)")]
pub struct UnknownStyle(pub i64);

impl TestStyle {
    pub const ALL: [TestStyle; 3] = [TestStyle::NUnit, TestStyle::XUnit, TestStyle::MsTest];

    /// Resolve a numeric selector.
    pub fn from_selector(selector: i64) -> Result<Self, UnknownStyle> {
        match selector {
            1 => Ok(TestStyle::NUnit),
            2 => Ok(TestStyle::XUnit),
            3 => Ok(TestStyle::MsTest),
            other => Err(UnknownStyle(other)),
        }
    }

    pub fn selector(self) -> u8 {
        self as u8
    }

    pub fn descriptor(self) -> &'static StyleDescriptor {
        match self {
            TestStyle::NUnit => &NUNIT,
            TestStyle::XUnit => &XUNIT,
            TestStyle::MsTest => &MSTEST,
        }
    }
}

impl fmt::Display for TestStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestStyle::NUnit => "nunit",
            TestStyle::XUnit => "xunit",
            TestStyle::MsTest => "mstest",
        };
        f.write_str(name)
    }
}

/// How per-test setup is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupKind {
    /// An attributed `public void SetUp()` method.
    Method { attribute: &'static str },
    /// The constructor of the test class.
    Constructor,
}

/// Argument order and wrapping of the equality assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionShape {
    /// `Assert.That(actual, Is.EqualTo(expected))`
    ThatIsEqualTo,
    /// `Assert.Equal(expected, actual)`
    Equal,
    /// `Assert.AreEqual(expected, actual)`
    AreEqual,
}

impl AssertionShape {
    pub fn render(self, actual: &str, expected: &str) -> Expr {
        match self {
            AssertionShape::ThatIsEqualTo => Expr::call(
                "Assert",
                "That",
                vec![actual.to_string(), Expr::call("Is", "EqualTo", vec![expected.to_string()]).to_string()],
            ),
            AssertionShape::Equal => Expr::call("Assert", "Equal", vec![expected.to_string(), actual.to_string()]),
            AssertionShape::AreEqual => Expr::call("Assert", "AreEqual", vec![expected.to_string(), actual.to_string()]),
        }
    }
}

/// Everything the generator needs to know about one test framework.
#[derive(Debug, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub style: TestStyle,
    /// Namespaces imported by every generated file, in order.
    pub usings: &'static [&'static str],
    pub class_attribute: Option<&'static str>,
    pub setup: SetupKind,
    pub test_attribute: &'static str,
    pub assertion: AssertionShape,
}

static NUNIT: StyleDescriptor = StyleDescriptor {
    style: TestStyle::NUnit,
    usings: &["NUnit.Framework", MOCK_NAMESPACE],
    class_attribute: Some("TestFixture"),
    setup: SetupKind::Method { attribute: "SetUp" },
    test_attribute: "Test",
    assertion: AssertionShape::ThatIsEqualTo,
};

static XUNIT: StyleDescriptor = StyleDescriptor {
    style: TestStyle::XUnit,
    usings: &["Xunit", MOCK_NAMESPACE],
    class_attribute: None,
    setup: SetupKind::Constructor,
    test_attribute: "Fact",
    assertion: AssertionShape::Equal,
};

static MSTEST: StyleDescriptor = StyleDescriptor {
    style: TestStyle::MsTest,
    usings: &["Microsoft.VisualStudio.TestTools.UnitTesting", MOCK_NAMESPACE],
    class_attribute: Some("TestClass"),
    setup: SetupKind::Method {
        attribute: "TestInitialize",
    },
    test_attribute: "TestMethod",
    assertion: AssertionShape::AreEqual,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_round_trip() {
        for style in TestStyle::ALL {
            assert_eq!(TestStyle::from_selector(style.selector() as i64), Ok(style));
            assert_eq!(style.descriptor().style, style);
        }
    }

    #[test]
    fn test_unknown_selector_is_rejected() {
        assert_eq!(TestStyle::from_selector(0), Err(UnknownStyle(0)));
        assert_eq!(TestStyle::from_selector(4), Err(UnknownStyle(4)));
        assert!(UnknownStyle(7).to_string().contains("unknown test style 7"));
    }

    #[test]
    fn test_assertion_shapes() {
        let render = |shape: AssertionShape| shape.render("actual", "expected").to_string();
        assert_eq!(render(AssertionShape::ThatIsEqualTo), "Assert.That(actual, Is.EqualTo(expected))");
        assert_eq!(render(AssertionShape::Equal), "Assert.Equal(expected, actual)");
        assert_eq!(render(AssertionShape::AreEqual), "Assert.AreEqual(expected, actual)");
    }

    #[test]
    fn test_every_style_imports_the_mocking_library() {
        for style in TestStyle::ALL {
            assert!(style.descriptor().usings.contains(&"Moq"));
        }
    }
}
