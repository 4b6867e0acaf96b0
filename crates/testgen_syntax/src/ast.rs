//! Abstract Syntax Tree definitions for C# declarations
//!
//! The tree stops at member signatures: methods and constructors record their parameter lists and return types,
//! and only the *shape* of a body ([`BodyKind`]) survives parsing.

use std::fmt;

use testgen_core::lang::keywords::{self, KeywordId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier as written, including a leading `@` for verbatim identifiers.
pub type Ident = String;

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    pub usings: Vec<UsingDirective>,
    pub members: Vec<Spanned<NamespaceMember>>,
}

/// Items allowed at compilation-unit and namespace level.
#[derive(Debug, Clone, PartialEq)]
pub enum NamespaceMember {
    Namespace(NamespaceDecl),
    Type(TypeDecl),
}

// ============================================================================
// Usings and namespaces
// ============================================================================

/// Dotted name without type arguments, as used by `using` and `namespace`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualifiedName {
    pub segments: Vec<Ident>,
}

impl QualifiedName {
    pub fn new(segments: Vec<Ident>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// `using X;`, `using static X;`, `using A = X;`, optionally prefixed with `global`.
#[derive(Debug, Clone, PartialEq)]
pub struct UsingDirective {
    pub is_global: bool,
    pub is_static: bool,
    pub alias: Option<Ident>,
    /// Target as written; aliases may target constructed types such as `List<int>`.
    pub target: TypeRef,
}

/// Renders the directive without its `global` prefix, ready to be placed in another file.
impl fmt::Display for UsingDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "using ")?;
        if self.is_static {
            write!(f, "static ")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, "{alias} = ")?;
        }
        write!(f, "{};", self.target)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub name: QualifiedName,
    /// `namespace A.B;` (C# 10) rather than a braced block.
    pub file_scoped: bool,
    pub usings: Vec<UsingDirective>,
    pub members: Vec<Spanned<NamespaceMember>>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Record,
    RecordStruct,
    Enum,
    Delegate,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Record => "record",
            TypeKind::RecordStruct => "record struct",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub kind: TypeKind,
    /// Attribute names (arguments are not retained).
    pub attributes: Vec<Ident>,
    pub modifiers: Vec<KeywordId>,
    pub name: Ident,
    pub type_params: Vec<Ident>,
    /// Parameters of a primary constructor: `class Point(int x, int y)`.
    pub primary_params: Option<Vec<Param>>,
    pub members: Vec<Spanned<Member>>,
}

impl TypeDecl {
    pub fn has_modifier(&self, id: KeywordId) -> bool {
        self.modifiers.contains(&id)
    }
}

/// Members of a type body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Type(TypeDecl),
    Field(FieldDecl),
    Property(PropertyDecl),
    /// Recognised but not modelled.
    Skipped(SkippedMember),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedMember {
    Event,
    Indexer,
    Operator,
    Conversion,
    Destructor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Vec<KeywordId>,
    pub ty: TypeRef,
    pub names: Vec<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    pub modifiers: Vec<KeywordId>,
    pub ty: TypeRef,
    pub name: Ident,
}

/// What followed a member signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// `{ ... }`
    Block,
    /// `=> expr;`
    Expression,
    /// `;` (abstract, extern, partial or interface members)
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub attributes: Vec<Ident>,
    pub modifiers: Vec<KeywordId>,
    pub return_type: TypeRef,
    pub name: Ident,
    pub type_params: Vec<Ident>,
    pub params: Vec<Param>,
    pub body: BodyKind,
}

impl MethodDecl {
    pub fn has_modifier(&self, id: KeywordId) -> bool {
        self.modifiers.contains(&id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorInitializer {
    Base,
    This,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub attributes: Vec<Ident>,
    pub modifiers: Vec<KeywordId>,
    pub name: Ident,
    pub params: Vec<Param>,
    pub initializer: Option<ConstructorInitializer>,
    pub body: BodyKind,
}

impl ConstructorDecl {
    pub fn has_modifier(&self, id: KeywordId) -> bool {
        self.modifiers.contains(&id)
    }
}

// ============================================================================
// Parameters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamModifier {
    Ref,
    Out,
    In,
    Params,
    This,
}

impl fmt::Display for ParamModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            ParamModifier::Ref => KeywordId::Ref,
            ParamModifier::Out => KeywordId::Out,
            ParamModifier::In => KeywordId::In,
            ParamModifier::Params => KeywordId::Params,
            ParamModifier::This => KeywordId::This,
        };
        f.write_str(keywords::as_str(id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub modifier: Option<ParamModifier>,
    pub ty: TypeRef,
    pub name: Ident,
    /// `= value` was present (the value itself is skipped).
    pub has_default: bool,
}

// ============================================================================
// Type references
// ============================================================================

/// One dotted segment of a type name, with its type arguments: `Dictionary<string, int>`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameSegment {
    pub ident: Ident,
    pub args: Vec<TypeRef>,
}

/// A possibly qualified, possibly generic type name.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    /// Written with a `global::` prefix.
    pub global: bool,
    pub segments: Vec<NameSegment>,
}

impl TypeName {
    /// Name of the final segment: `System.Collections.IList` → `IList`.
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(|s| s.ident.as_str()).unwrap_or_default()
    }

    /// `true` if any segment carries type arguments.
    pub fn is_generic(&self) -> bool {
        self.segments.iter().any(|s| !s.args.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleElement {
    pub ty: TypeRef,
    pub name: Option<Ident>,
}

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// Built-in keyword type (`int`, `string`, `void`, ...).
    Predefined(KeywordId),
    Named(TypeName),
    Array { element: Box<TypeRef>, rank: usize },
    Nullable(Box<TypeRef>),
    Pointer(Box<TypeRef>),
    Tuple(Vec<TupleElement>),
}

impl TypeRef {
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Predefined(KeywordId::Void))
    }

    /// Simple name of a named type; `None` for keyword, array, nullable, pointer and tuple types.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name.simple_name()),
            _ => None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("global::")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.ident)?;
            if !segment.args.is_empty() {
                f.write_str("<")?;
                write_joined(f, &segment.args)?;
                f.write_str(">")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Predefined(id) => f.write_str(keywords::as_str(*id)),
            TypeRef::Named(name) => write!(f, "{name}"),
            TypeRef::Array { element, rank } => {
                write!(f, "{element}[{}]", ",".repeat(rank.saturating_sub(1)))
            }
            TypeRef::Nullable(inner) => write!(f, "{inner}?"),
            TypeRef::Pointer(inner) => write!(f, "{inner}*"),
            TypeRef::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element.ty)?;
                    if let Some(name) = &element.name {
                        write!(f, " {name}")?;
                    }
                }
                f.write_str(")")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, types: &[TypeRef]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(ident: &str) -> TypeRef {
        TypeRef::Named(TypeName {
            global: false,
            segments: vec![NameSegment {
                ident: ident.to_string(),
                args: vec![],
            }],
        })
    }

    #[test]
    fn test_renders_generic_and_array_types() {
        let dict = TypeRef::Named(TypeName {
            global: false,
            segments: vec![NameSegment {
                ident: "Dictionary".to_string(),
                args: vec![TypeRef::Predefined(KeywordId::String), named("Item")],
            }],
        });
        assert_eq!(dict.to_string(), "Dictionary<string, Item>");

        let matrix = TypeRef::Array {
            element: Box::new(TypeRef::Predefined(KeywordId::Int)),
            rank: 2,
        };
        assert_eq!(matrix.to_string(), "int[,]");
        assert_eq!(TypeRef::Nullable(Box::new(named("Item"))).to_string(), "Item?");
    }

    #[test]
    fn test_using_directive_drops_global_prefix() {
        let using = UsingDirective {
            is_global: true,
            is_static: true,
            alias: None,
            target: named("Math"),
        };
        assert_eq!(using.to_string(), "using static Math;");
    }
}
