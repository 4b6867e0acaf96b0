#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the declaration shapes the generator depends on and on the parser’s
/// error recovery behavior (skipping bodies without cascading errors).
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<CompilationUnit, Vec<CompileError>> {
        let tokens = lexer::lex(source).map_err(|_| vec![])?;
        parse(&tokens)
    }

    fn first_type(unit: &CompilationUnit) -> &TypeDecl {
        let mut members = &unit.members;
        loop {
            match &members[0].node {
                NamespaceMember::Namespace(ns) => members = &ns.members,
                NamespaceMember::Type(t) => return t,
            }
        }
    }

    fn methods(decl: &TypeDecl) -> Vec<&MethodDecl> {
        decl.members
            .iter()
            .filter_map(|m| match &m.node {
                Member::Method(method) => Some(method),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_class_with_methods_and_constructor() {
        let source = r#"
using System;
using System.Collections.Generic;

namespace MyCode
{
    public class MyClass
    {
        private readonly string _name;

        public MyClass(string name, int age) : base()
        {
            _name = name;
        }

        public string GetName() { return _name; }

        public void Rename(ref string name, out int length) { length = 0; }

        private int Hidden() => 42;
    }
}
"#;
        let unit = parse_str(source).unwrap();
        assert_eq!(unit.usings.len(), 2);
        assert_eq!(unit.usings[1].to_string(), "using System.Collections.Generic;");

        let NamespaceMember::Namespace(ns) = &unit.members[0].node else {
            panic!("Expected namespace");
        };
        assert_eq!(ns.name.to_string(), "MyCode");

        let class = first_type(&unit);
        assert_eq!(class.kind, TypeKind::Class);
        assert_eq!(class.name, "MyClass");
        assert!(class.has_modifier(KeywordId::Public));

        let ctor = class
            .members
            .iter()
            .find_map(|m| match &m.node {
                Member::Constructor(c) => Some(c),
                _ => None,
            })
            .unwrap();
        assert_eq!(ctor.params.len(), 2);
        assert_eq!(ctor.initializer, Some(ConstructorInitializer::Base));

        let methods = methods(class);
        assert_eq!(methods.len(), 3);
        assert_eq!(methods[0].name, "GetName");
        assert_eq!(methods[0].return_type.to_string(), "string");
        assert_eq!(methods[1].params[0].modifier, Some(ParamModifier::Ref));
        assert_eq!(methods[1].params[1].modifier, Some(ParamModifier::Out));
        assert_eq!(methods[2].body, BodyKind::Expression);
    }

    #[test]
    fn test_bodies_with_braces_in_strings_are_skipped() {
        let source = r#"
class A
{
    public string Json() { return "{ \"a\": 1 }" + $"{Count()}}}" + @"}"; }
    public int Count() { if (true) { return 1; } else { return 2; } }
}
"#;
        let unit = parse_str(source).unwrap();
        let names: Vec<_> = methods(first_type(&unit)).iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["Json", "Count"]);
    }

    #[test]
    fn test_file_scoped_namespace_and_generics() {
        let source = r#"
namespace Shop.Orders;

public sealed class Repo<T> where T : class, new()
{
    public Dictionary<string, List<T>> All() => new();
    public T? Find<TKey>(TKey key) where TKey : notnull { return default; }
    public (int Count, string Name) Summary() => (0, "");
    public int[,] Grid() => null;
}
"#;
        let unit = parse_str(source).unwrap();
        let NamespaceMember::Namespace(ns) = &unit.members[0].node else {
            panic!("Expected namespace");
        };
        assert!(ns.file_scoped);
        assert_eq!(ns.name.to_string(), "Shop.Orders");

        let class = first_type(&unit);
        assert_eq!(class.type_params, vec!["T"]);
        let methods = methods(class);
        assert_eq!(methods[0].return_type.to_string(), "Dictionary<string, List<T>>");
        assert_eq!(methods[1].return_type.to_string(), "T?");
        assert_eq!(methods[1].type_params, vec!["TKey"]);
        assert_eq!(methods[2].return_type.to_string(), "(int Count, string Name)");
        assert_eq!(methods[3].return_type.to_string(), "int[,]");
    }

    #[test]
    fn test_skipped_members_are_recognised() {
        let source = r#"
public class Everything : IEnumerable<int>, IDisposable
{
    public event EventHandler Changed;
    public int this[int i] { get => i; }
    public static Everything operator +(Everything a, Everything b) => a;
    public static implicit operator int(Everything e) => 0;
    ~Everything() { }
    public string Name { get; set; } = "x";
    public int Size => 3;
    public const int A = 1, B = 2;
    void IDisposable.Dispose() { }
    IEnumerator<int> IEnumerable<int>.GetEnumerator() => null;
    [Obsolete("old")] public void Old() { }
}
"#;
        let unit = parse_str(source).unwrap();
        let class = first_type(&unit);
        let skipped = class
            .members
            .iter()
            .filter(|m| matches!(m.node, Member::Skipped(_)))
            .count();
        assert_eq!(skipped, 5);

        let methods = methods(class);
        let names: Vec<_> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Dispose", "GetEnumerator", "Old"]);
        assert_eq!(methods[2].attributes, vec!["Obsolete"]);
    }

    #[test]
    fn test_nested_records_and_primary_constructors() {
        let source = r#"
public class Outer
{
    public record Point(int X, int Y);
    public record struct Pair(string A, string B) { public string Both() => A + B; }
    public class Inner(ILogger logger) { public void Log() { } }
    public enum Color { Red = 1, Green }
    public delegate void Handler(object sender);
}
"#;
        let unit = parse_str(source).unwrap();
        let outer = first_type(&unit);
        let nested: Vec<_> = outer
            .members
            .iter()
            .filter_map(|m| match &m.node {
                Member::Type(t) => Some((t.kind, t.name.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(
            nested,
            vec![
                (TypeKind::Record, "Point"),
                (TypeKind::RecordStruct, "Pair"),
                (TypeKind::Class, "Inner"),
                (TypeKind::Enum, "Color"),
                (TypeKind::Delegate, "Handler"),
            ]
        );
        let Member::Type(inner) = &outer.members[2].node else {
            panic!("Expected nested class");
        };
        let params = inner.primary_params.as_ref().unwrap();
        assert_eq!(params[0].ty.to_string(), "ILogger");
    }

    #[test]
    fn test_top_level_statements_are_skipped() {
        let source = r#"
using System;
using var stream = Open();
Console.WriteLine("hello");
if (args.Length > 0) { Run(); }
public class Program2 { }
"#;
        let unit = parse_str(source).unwrap();
        assert_eq!(unit.usings.len(), 1);
        assert_eq!(unit.members.len(), 1);
    }

    #[test]
    fn test_default_values_and_params() {
        let source = "class C { public void M(this string s, int n = (1 + 2), params object[] rest, in Span<int> span) { } }";
        let unit = parse_str(source).unwrap();
        let params = &methods(first_type(&unit))[0].params;
        assert_eq!(params.len(), 4);
        assert_eq!(params[0].modifier, Some(ParamModifier::This));
        assert!(params[1].has_default);
        assert_eq!(params[2].ty.to_string(), "object[]");
        assert_eq!(params[3].modifier, Some(ParamModifier::In));
    }

    #[test]
    fn test_unbalanced_body_is_an_error() {
        let source = "class A { public void M() { if (x) { } }";
        let errs = parse_str(source).unwrap_err();
        assert!(!errs.is_empty());
    }

    #[test]
    fn test_missing_class_name_reports_single_error() {
        let source = "namespace N { public class { } public class Ok { } }";
        let errs = parse_str(source).unwrap_err();
        assert_eq!(errs.len(), 1, "errors: {errs:?}");
        assert!(errs[0].message.contains("Expected identifier"));
    }

    #[test]
    fn test_empty_token_stream_is_empty_unit() {
        let unit = parse(&[]).unwrap();
        assert!(unit.members.is_empty());
    }
}
