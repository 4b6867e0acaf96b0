//! Class models extracted from a parsed compilation unit.
//!
//! Every `class` declaration is reported, at any depth (inside namespaces and nested in other types), in source
//! order with an enclosing declaration preceding its nested ones. Structs, records and interfaces are walked for
//! nested classes but are not reported themselves.
//!
//! ## Constructor selection
//!
//! The candidate set is the primary constructor (if any) followed by the declared instance constructors in source
//! order. Static constructors are never candidates. The candidate with the most parameters wins; ties go to the
//! first declared.

use crate::frontend::ast::{
    BodyKind, CompilationUnit, ConstructorDecl, Ident, Member, MethodDecl, NamespaceMember, QualifiedName, Spanned,
    TypeDecl, TypeKind, UsingDirective,
};
use testgen_core::lang::keywords::KeywordId;

/// Read-only view of one class, as needed by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    pub name: Ident,
    /// Enclosing type names for nested classes, outermost first.
    pub containing_types: Vec<Ident>,
    pub modifiers: Vec<KeywordId>,
    /// Dotted enclosing namespace; `None` for the global namespace.
    pub namespace: Option<QualifiedName>,
    /// Using directives in scope: the file's, then those of each enclosing namespace.
    pub usings: Vec<UsingDirective>,
    /// Methods carrying an explicit `public` modifier, in declaration order.
    pub public_methods: Vec<MethodDecl>,
    pub constructor: Option<ConstructorDecl>,
}

impl ClassModel {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&KeywordId::Static)
    }

    /// `true` when generated tests construct an instance; otherwise members are reached through the class name.
    pub fn needs_instance(&self) -> bool {
        !self.is_static() && self.constructor.is_some()
    }

    /// Name usable from the generated test namespace: `Outer.Inner` for nested classes.
    pub fn type_path(&self) -> String {
        let mut path = self.containing_types.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(&self.name);
        path
    }
}

/// Enclosing context while walking declarations.
#[derive(Debug, Clone, Default)]
struct Scope {
    namespace: Vec<Ident>,
    usings: Vec<UsingDirective>,
    containing_types: Vec<Ident>,
}

/// Extract every class of `unit` in source order.
pub fn classes(unit: &CompilationUnit) -> Vec<ClassModel> {
    let scope = Scope {
        usings: unit.usings.clone(),
        ..Scope::default()
    };
    let mut out = Vec::new();
    walk_namespace_members(&unit.members, &scope, &mut out);
    out
}

fn walk_namespace_members(members: &[Spanned<NamespaceMember>], scope: &Scope, out: &mut Vec<ClassModel>) {
    for member in members {
        match &member.node {
            NamespaceMember::Namespace(ns) => {
                let mut inner = scope.clone();
                inner.namespace.extend(ns.name.segments.iter().cloned());
                inner.usings.extend(ns.usings.iter().cloned());
                walk_namespace_members(&ns.members, &inner, out);
            }
            NamespaceMember::Type(decl) => walk_type(decl, scope, out),
        }
    }
}

fn walk_type(decl: &TypeDecl, scope: &Scope, out: &mut Vec<ClassModel>) {
    if decl.kind == TypeKind::Class {
        out.push(class_model(decl, scope));
    }

    let mut inner = scope.clone();
    inner.containing_types.push(decl.name.clone());
    for member in &decl.members {
        if let Member::Type(nested) = &member.node {
            walk_type(nested, &inner, out);
        }
    }
}

fn class_model(decl: &TypeDecl, scope: &Scope) -> ClassModel {
    let public_methods = decl
        .members
        .iter()
        .filter_map(|m| match &m.node {
            Member::Method(method) if method.has_modifier(KeywordId::Public) => Some(method.clone()),
            _ => None,
        })
        .collect();

    ClassModel {
        name: decl.name.clone(),
        containing_types: scope.containing_types.clone(),
        modifiers: decl.modifiers.clone(),
        namespace: (!scope.namespace.is_empty()).then(|| QualifiedName::new(scope.namespace.clone())),
        usings: scope.usings.clone(),
        public_methods,
        constructor: select_constructor(decl),
    }
}

fn select_constructor(decl: &TypeDecl) -> Option<ConstructorDecl> {
    let primary = decl.primary_params.as_ref().map(|params| ConstructorDecl {
        attributes: Vec::new(),
        modifiers: Vec::new(),
        name: decl.name.clone(),
        params: params.clone(),
        initializer: None,
        body: BodyKind::None,
    });
    let declared = decl.members.iter().filter_map(|m| match &m.node {
        Member::Constructor(ctor) if !ctor.has_modifier(KeywordId::Static) => Some(ctor.clone()),
        _ => None,
    });

    primary.into_iter().chain(declared).fold(None, |best, candidate| match best {
        Some(best) if best.params.len() >= candidate.params.len() => Some(best),
        _ => Some(candidate),
    })
}
