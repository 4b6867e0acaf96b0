//! Output model for generated C# test classes.
//!
//! The generator builds a [`TestClassDef`] and hands it to [`super::writer`] for rendering. Expressions are kept
//! small: the generated code only declares locals, constructs objects, calls methods and asserts.

use std::fmt;

/// An expression in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `default`
    Default,
    /// `new T(args)`
    New { ty: String, args: Vec<String> },
    /// `receiver.Method(args)`
    Call {
        receiver: String,
        method: String,
        args: Vec<String>,
    },
    /// String literal `"text"`.
    Str(String),
}

impl Expr {
    pub fn call(receiver: impl Into<String>, method: impl Into<String>, args: Vec<String>) -> Self {
        Expr::Call {
            receiver: receiver.into(),
            method: method.into(),
            args,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Default => f.write_str(testgen_core::lang::conventions::DEFAULT_LITERAL),
            Expr::New { ty, args } => write!(f, "new {ty}({})", args.join(", ")),
            Expr::Call { receiver, method, args } => write!(f, "{receiver}.{method}({})", args.join(", ")),
            Expr::Str(text) => write!(f, "\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\"")),
        }
    }
}

/// A statement in a generated method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `T name = init;`
    Local { ty: String, name: String, init: Expr },
    /// `target = value;`
    Assign { target: String, value: Expr },
    /// `expr;`
    Expr(Expr),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Local { ty, name, init } => write!(f, "{ty} {name} = {init};"),
            Stmt::Assign { target, value } => write!(f, "{target} = {value};"),
            Stmt::Expr(expr) => write!(f, "{expr};"),
        }
    }
}

/// A member of the generated test class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDef {
    /// `private T name;`
    Field { ty: String, name: String },
    /// `[attribute] public void name() { body }`
    Method {
        attribute: Option<&'static str>,
        name: String,
        body: Vec<Stmt>,
    },
    /// `public Name() { body }`
    Constructor { name: String, body: Vec<Stmt> },
}

/// One generated file: usings, namespace and a single test class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestClassDef {
    /// Complete directive lines: `using Moq;`.
    pub usings: Vec<String>,
    pub namespace: String,
    pub attribute: Option<&'static str>,
    pub name: String,
    pub members: Vec<MemberDef>,
}

impl TestClassDef {
    /// Number of members that are test methods (attributed methods other than setup).
    pub fn test_method_count(&self, test_attribute: &str) -> usize {
        self.members
            .iter()
            .filter(|m| matches!(m, MemberDef::Method { attribute: Some(a), .. } if *a == test_attribute))
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_render_as_csharp() {
        let local = Stmt::Local {
            ty: "Mock<ILol>".to_string(),
            name: "lolFake".to_string(),
            init: Expr::New {
                ty: "Mock<ILol>".to_string(),
                args: vec![],
            },
        };
        assert_eq!(local.to_string(), "Mock<ILol> lolFake = new Mock<ILol>();");

        let assign = Stmt::Assign {
            target: "_testA".to_string(),
            value: Expr::New {
                ty: "A".to_string(),
                args: vec!["xFake".to_string(), "ref yFake".to_string()],
            },
        };
        assert_eq!(assign.to_string(), "_testA = new A(xFake, ref yFake);");

        let fail = Stmt::Expr(Expr::call("Assert", "Fail", vec![Expr::Str("autogenerated".to_string()).to_string()]));
        assert_eq!(fail.to_string(), "Assert.Fail(\"autogenerated\");");
    }

    #[test]
    fn test_string_literals_are_escaped() {
        assert_eq!(Expr::Str("a\"b\\c".to_string()).to_string(), r#""a\"b\\c""#);
    }
}
