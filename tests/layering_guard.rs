//! Layering guardrails to keep the syntax crate free of runtime dependencies.
//!
//! `testgen_syntax` is a pure source → AST library used by the CLI, the pipeline and the fuzz targets. It must
//! not pull in the async runtime or the CLI stack. This test scans its `Cargo.toml` `[dependencies]` table.

const FORBIDDEN: &[&str] = &["tokio", "clap", "tracing-subscriber", "serde_json"];

fn dependency_names(manifest: &str) -> Vec<&str> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim());
        }
    }
    names
}

#[test]
fn test_syntax_crate_does_not_depend_on_runtime_crates() {
    let manifest = include_str!("../crates/testgen_syntax/Cargo.toml");
    for name in dependency_names(manifest) {
        assert!(
            !FORBIDDEN.contains(&name),
            "`{name}` must not appear in testgen_syntax [dependencies]"
        );
    }
}

#[test]
fn test_core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/testgen_core/Cargo.toml");
    assert!(
        dependency_names(manifest).is_empty(),
        "testgen_core must stay dependency-free"
    );
}
