//! End-to-end pipeline tests over temporary directory trees.

use std::fs;
use std::path::Path;

use testgen::backend::TestStyle;
use testgen::pipeline::{self, ConfigError, PipelineConfig};

const THREE_CLASSES: &str = r#"
using System;

namespace Orders
{
    public class Order
    {
        public Order(int id) { }
        public decimal Total() => 0m;
    }

    public class Customer
    {
        public Customer(string name, IAddressBook book) { }
        public void Rename(string name) { }
    }

    public static class OrderMath
    {
        public static int Sum(int a, int b) => a + b;
    }
}
"#;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_one_file_with_three_classes_yields_three_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("generated");
    write(&input.join("Orders.cs"), THREE_CLASSES);

    let config = PipelineConfig::new(&output).with_bounds(2, 2, 2);
    let report = pipeline::run(&input, &config).await.unwrap();

    assert_eq!(report.files_read, 1);
    assert_eq!(report.classes_generated, 3);
    assert_eq!(report.files_written, 3);
    assert_eq!(report.failures(), 0);
    assert_eq!(
        sorted_names(&output),
        vec!["CustomerTests.cs", "OrderMathTests.cs", "OrderTests.cs"]
    );

    let customer = fs::read_to_string(output.join("CustomerTests.cs")).unwrap();
    assert!(customer.contains("Mock<IAddressBook> bookFake = new Mock<IAddressBook>();"));
    assert!(customer.contains("_testCustomer = new Customer(nameFake, bookFake.Object);"));
}

#[tokio::test]
async fn test_two_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write(&input.join("a/Orders.cs"), THREE_CLASSES);
    write(&input.join("b/Widget.cs"), "class Widget { public Widget(int size) { } public int Size() => 0; }");

    let config = PipelineConfig::new(&output).with_bounds(3, 1, 2).with_style(TestStyle::XUnit);
    pipeline::run(&input, &config).await.unwrap();
    let first: Vec<_> = sorted_names(&output)
        .into_iter()
        .map(|name| (fs::read(output.join(&name)).unwrap(), name))
        .collect();

    pipeline::run(&input, &config).await.unwrap();
    let second: Vec<_> = sorted_names(&output)
        .into_iter()
        .map(|name| (fs::read(output.join(&name)).unwrap(), name))
        .collect();

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_broken_file_does_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write(&input.join("Good.cs"), "public class Good { public void Run() { } }");
    write(&input.join("Broken.cs"), "public class Broken { public void Run( { }");
    write(&input.join("Readme.md"), "# not a source file");

    let report = pipeline::run(&input, &PipelineConfig::new(&output)).await.unwrap();

    assert_eq!(report.files_posted, 2);
    assert_eq!(report.parse_failures, 1);
    assert_eq!(report.files_written, 1);
    assert_eq!(sorted_names(&output), vec!["GoodTests.cs"]);
}

#[tokio::test]
async fn test_stale_output_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write(&input.join("A.cs"), "class A { }");
    write(&output.join("OldTests.cs"), "stale");

    pipeline::run(&input, &PipelineConfig::new(&output)).await.unwrap();
    assert_eq!(sorted_names(&output), vec!["ATests.cs"]);
}

#[tokio::test]
async fn test_custom_extension_is_used_for_discovery_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write(&input.join("A.csx"), "class A { }");
    write(&input.join("B.cs"), "class B { }");

    let config = PipelineConfig::new(&output).with_extension("csx");
    let report = pipeline::run(&input, &config).await.unwrap();
    assert_eq!(report.files_written, 1);
    assert_eq!(sorted_names(&output), vec!["ATests.csx"]);
}

#[tokio::test]
async fn test_output_inside_input_is_refused_before_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    write(&input.join("A.cs"), "class A { }");

    let err = pipeline::run(&input, &PipelineConfig::new(dir.path())).await.unwrap_err();
    assert!(matches!(err, ConfigError::OutputContainsInput { .. }));
    assert!(input.join("A.cs").is_file());
}
