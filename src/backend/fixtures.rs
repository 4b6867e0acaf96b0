//! Fixture synthesis: one local declaration and one call-site argument per parameter.
//!
//! Parameters whose type *looks like* an interface (`I` followed by an uppercase letter) get a mock double and
//! pass its `.Object`; everything else gets a `default` placeholder. The heuristic is purely lexical, so
//! `IO.Stream` is mocked and an interface named `Repository` is not.

use testgen_core::lang::conventions::{self, MOCK_OBJECT_ACCESSOR, MOCK_TYPE, looks_like_interface};

use super::ir::{Expr, Stmt};
use crate::frontend::ast::{Param, ParamModifier};

/// A fixture local and the argument expression that passes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub declaration: Stmt,
    pub argument: String,
}

/// Build the fixture for one parameter. Total: every parameter yields a fixture.
pub fn synthesize(param: &Param) -> Fixture {
    let name = conventions::fixture_name(&param.name);
    let ty = param.ty.to_string();

    let (declaration, value) = if param.ty.simple_name().is_some_and(looks_like_interface) {
        let mock = format!("{MOCK_TYPE}<{ty}>");
        let declaration = Stmt::Local {
            ty: mock.clone(),
            name: name.clone(),
            init: Expr::New { ty: mock, args: vec![] },
        };
        (declaration, format!("{name}.{MOCK_OBJECT_ACCESSOR}"))
    } else {
        let declaration = Stmt::Local {
            ty,
            name: name.clone(),
            init: Expr::Default,
        };
        (declaration, name)
    };

    // Passing modes must be repeated at the call site.
    let argument = match param.modifier {
        Some(modifier @ (ParamModifier::Ref | ParamModifier::Out | ParamModifier::In)) => format!("{modifier} {value}"),
        _ => value,
    };

    Fixture { declaration, argument }
}

/// Fixtures for a parameter list, in order.
pub fn synthesize_all(params: &[Param]) -> Vec<Fixture> {
    params.iter().map(synthesize).collect()
}
