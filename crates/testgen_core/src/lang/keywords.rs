//! Define the C# keyword vocabulary understood by the declaration parser.
//!
//! This module is the single source of truth for keyword spellings: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records the canonical spelling, a category, whether the keyword is
//! contextual, and the language version that introduced it.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, like C# itself.
//! - Contextual keywords (`record`, `partial`, `async`, ...) are only reserved in specific positions. The parser
//!   accepts them wherever an identifier is expected; see [`is_contextual`].
//! - Only the keywords that matter at declaration level are registered. Everything else lexes as an identifier,
//!   which is harmless because method bodies are skipped.
//!
//! ## Examples
//! ```rust
//! use testgen_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::as_str(KeywordId::Static), "static");
//! assert_eq!(keywords::category(KeywordId::Int), KeywordCategory::PredefinedType);
//! assert!(keywords::is_contextual(KeywordId::Record));
//! ```

/// Stable identifier for every registered keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Access and member modifiers
    Public,
    Private,
    Protected,
    Internal,
    Static,
    Abstract,
    Virtual,
    Override,
    Sealed,
    Readonly,
    Async,
    Extern,
    Unsafe,
    New,
    Partial,
    Const,
    Volatile,
    Required,
    File,

    // Declarations
    Namespace,
    Using,
    Class,
    Struct,
    Interface,
    Enum,
    Record,
    Delegate,
    Event,
    Operator,
    Implicit,
    Explicit,
    Where,
    Global,

    // Parameter modifiers and receivers
    Ref,
    Out,
    In,
    Params,
    Scoped,
    This,
    Base,

    // Predefined types
    Bool,
    Byte,
    Sbyte,
    Char,
    Decimal,
    Double,
    Float,
    Int,
    Uint,
    Nint,
    Nuint,
    Long,
    Ulong,
    Short,
    Ushort,
    Object,
    String,
    Dynamic,
    Void,
}

/// High-level grouping for diagnostics and for the parser's modifier/type decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Access and member modifiers (`public`, `static`, ...).
    Modifier,
    /// Keywords that start or shape a declaration (`class`, `namespace`, `where`, ...).
    Declaration,
    /// Parameter passing modifiers and receivers (`ref`, `out`, `this`, ...).
    Parameter,
    /// Built-in type keywords (`int`, `string`, `void`, ...).
    PredefinedType,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Contextual keywords may also be used as identifiers.
    pub contextual: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Modifiers
    info(KeywordId::Public, "public", KeywordCategory::Modifier),
    info(KeywordId::Private, "private", KeywordCategory::Modifier),
    info(KeywordId::Protected, "protected", KeywordCategory::Modifier),
    info(KeywordId::Internal, "internal", KeywordCategory::Modifier),
    info(KeywordId::Static, "static", KeywordCategory::Modifier),
    info(KeywordId::Abstract, "abstract", KeywordCategory::Modifier),
    info(KeywordId::Virtual, "virtual", KeywordCategory::Modifier),
    info(KeywordId::Override, "override", KeywordCategory::Modifier),
    info(KeywordId::Sealed, "sealed", KeywordCategory::Modifier),
    info(KeywordId::Readonly, "readonly", KeywordCategory::Modifier),
    contextual(KeywordId::Async, "async", KeywordCategory::Modifier),
    info(KeywordId::Extern, "extern", KeywordCategory::Modifier),
    info(KeywordId::Unsafe, "unsafe", KeywordCategory::Modifier),
    info(KeywordId::New, "new", KeywordCategory::Modifier),
    contextual(KeywordId::Partial, "partial", KeywordCategory::Modifier),
    info(KeywordId::Const, "const", KeywordCategory::Modifier),
    info(KeywordId::Volatile, "volatile", KeywordCategory::Modifier),
    contextual(KeywordId::Required, "required", KeywordCategory::Modifier),
    contextual(KeywordId::File, "file", KeywordCategory::Modifier),
    // Declarations
    info(KeywordId::Namespace, "namespace", KeywordCategory::Declaration),
    info(KeywordId::Using, "using", KeywordCategory::Declaration),
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Struct, "struct", KeywordCategory::Declaration),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    contextual(KeywordId::Record, "record", KeywordCategory::Declaration),
    info(KeywordId::Delegate, "delegate", KeywordCategory::Declaration),
    info(KeywordId::Event, "event", KeywordCategory::Declaration),
    info(KeywordId::Operator, "operator", KeywordCategory::Declaration),
    info(KeywordId::Implicit, "implicit", KeywordCategory::Declaration),
    info(KeywordId::Explicit, "explicit", KeywordCategory::Declaration),
    contextual(KeywordId::Where, "where", KeywordCategory::Declaration),
    contextual(KeywordId::Global, "global", KeywordCategory::Declaration),
    // Parameters and receivers
    info(KeywordId::Ref, "ref", KeywordCategory::Parameter),
    info(KeywordId::Out, "out", KeywordCategory::Parameter),
    info(KeywordId::In, "in", KeywordCategory::Parameter),
    info(KeywordId::Params, "params", KeywordCategory::Parameter),
    contextual(KeywordId::Scoped, "scoped", KeywordCategory::Parameter),
    info(KeywordId::This, "this", KeywordCategory::Parameter),
    info(KeywordId::Base, "base", KeywordCategory::Parameter),
    // Predefined types
    info(KeywordId::Bool, "bool", KeywordCategory::PredefinedType),
    info(KeywordId::Byte, "byte", KeywordCategory::PredefinedType),
    info(KeywordId::Sbyte, "sbyte", KeywordCategory::PredefinedType),
    info(KeywordId::Char, "char", KeywordCategory::PredefinedType),
    info(KeywordId::Decimal, "decimal", KeywordCategory::PredefinedType),
    info(KeywordId::Double, "double", KeywordCategory::PredefinedType),
    info(KeywordId::Float, "float", KeywordCategory::PredefinedType),
    info(KeywordId::Int, "int", KeywordCategory::PredefinedType),
    info(KeywordId::Uint, "uint", KeywordCategory::PredefinedType),
    contextual(KeywordId::Nint, "nint", KeywordCategory::PredefinedType),
    contextual(KeywordId::Nuint, "nuint", KeywordCategory::PredefinedType),
    info(KeywordId::Long, "long", KeywordCategory::PredefinedType),
    info(KeywordId::Ulong, "ulong", KeywordCategory::PredefinedType),
    info(KeywordId::Short, "short", KeywordCategory::PredefinedType),
    info(KeywordId::Ushort, "ushort", KeywordCategory::PredefinedType),
    info(KeywordId::Object, "object", KeywordCategory::PredefinedType),
    info(KeywordId::String, "string", KeywordCategory::PredefinedType),
    contextual(KeywordId::Dynamic, "dynamic", KeywordCategory::PredefinedType),
    info(KeywordId::Void, "void", KeywordCategory::PredefinedType),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if the keyword is contextual and may also appear as an identifier.
pub fn is_contextual(id: KeywordId) -> bool {
    info_for(id).contextual
}

/// Return `true` if the keyword names a built-in type.
pub fn is_predefined_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::PredefinedType
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a spelling to a keyword id.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        contextual: false,
    }
}

const fn contextual(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        contextual: true,
    }
}
