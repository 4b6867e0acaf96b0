//! Setup and test-method generation.

use testgen_core::lang::conventions::{
    self, ACTUAL_LOCAL, AUTOGENERATED_MESSAGE, EXPECTED_LOCAL, FALLBACK_TYPE_NAME, SETUP_METHOD_NAME,
};
use testgen_core::lang::keywords::{self, KeywordId};

use super::fixtures::{self, Fixture};
use super::ir::{Expr, MemberDef, Stmt};
use super::style::{SetupKind, StyleDescriptor};
use crate::frontend::ast::{ConstructorDecl, MethodDecl, TypeRef};
use crate::frontend::extract::ClassModel;

/// How generated tests reach the class under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Type name for static access: `Calculator`, `Outer.Inner`.
    pub type_path: String,
    /// Field holding the constructed instance; `None` for static or constructor-less classes.
    pub instance_field: Option<String>,
}

impl Subject {
    pub fn for_class(class: &ClassModel) -> Self {
        Self {
            type_path: class.type_path(),
            instance_field: class
                .needs_instance()
                .then(|| conventions::subject_field_name(&class.name)),
        }
    }

    /// Receiver expression for a call to `method`; static methods always go through the type.
    fn receiver(&self, method: &MethodDecl) -> &str {
        match &self.instance_field {
            Some(field) if !method.has_modifier(KeywordId::Static) => field,
            _ => &self.type_path,
        }
    }
}

/// Subject field plus setup member (`SetUp` method or test-class constructor, per style).
pub fn generate_setup(class: &ClassModel, ctor: &ConstructorDecl, style: &StyleDescriptor) -> Vec<MemberDef> {
    let field = conventions::subject_field_name(&class.name);
    let type_path = class.type_path();
    let fixtures = fixtures::synthesize_all(&ctor.params);

    let mut body = declarations(&fixtures);
    body.push(Stmt::Assign {
        target: field.clone(),
        value: Expr::New {
            ty: type_path.clone(),
            args: arguments(&fixtures),
        },
    });

    let setup = match style.setup {
        SetupKind::Method { attribute } => MemberDef::Method {
            attribute: Some(attribute),
            name: SETUP_METHOD_NAME.to_string(),
            body,
        },
        SetupKind::Constructor => MemberDef::Constructor {
            name: conventions::test_class_name(&class.name),
            body,
        },
    };

    vec![MemberDef::Field { ty: type_path, name: field }, setup]
}

/// One test method for `method`, named `generated_name`.
pub fn generate_method(
    generated_name: String,
    subject: &Subject,
    method: &MethodDecl,
    style: &StyleDescriptor,
) -> MemberDef {
    let fixtures = fixtures::synthesize_all(&method.params);
    let call = Expr::call(subject.receiver(method), method.name.clone(), arguments(&fixtures));

    let mut body = declarations(&fixtures);
    if method.return_type.is_void() {
        body.push(Stmt::Expr(call));
    } else {
        let ty = return_type_name(&method.return_type);
        body.push(Stmt::Local {
            ty: ty.clone(),
            name: ACTUAL_LOCAL.to_string(),
            init: call,
        });
        body.push(Stmt::Local {
            ty,
            name: EXPECTED_LOCAL.to_string(),
            init: Expr::Default,
        });
        body.push(Stmt::Expr(style.assertion.render(ACTUAL_LOCAL, EXPECTED_LOCAL)));
    }
    body.push(Stmt::Expr(Expr::call(
        "Assert",
        "Fail",
        vec![Expr::Str(AUTOGENERATED_MESSAGE.to_string()).to_string()],
    )));

    MemberDef::Method {
        attribute: Some(style.test_attribute),
        name: generated_name,
        body,
    }
}

/// Type used for `actual`/`expected`: keyword and plain named types keep their text, anything else is `object`.
pub fn return_type_name(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Predefined(id) => keywords::as_str(*id).to_string(),
        TypeRef::Named(name) if !name.is_generic() => name.to_string(),
        _ => FALLBACK_TYPE_NAME.to_string(),
    }
}

fn declarations(fixtures: &[Fixture]) -> Vec<Stmt> {
    fixtures.iter().map(|f| f.declaration.clone()).collect()
}

fn arguments(fixtures: &[Fixture]) -> Vec<String> {
    fixtures.iter().map(|f| f.argument.clone()).collect()
}
