//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{self, GenerateError, RenderConfig, TestStyle};
use crate::frontend::ast::{CompilationUnit, Param};
use crate::frontend::extract::{self, ClassModel};
use crate::frontend::{diagnostics, lexer, parser};
use crate::pipeline::{self, PipelineConfig, PipelineReport};

use super::{CliError, CliResult, ExitCode};

/// Raw arguments of the `generate` command, validated into a [`PipelineConfig`].
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub max_read: i64,
    pub max_write: i64,
    pub max_parse: i64,
    pub style: i64,
    pub extension: String,
    /// Spaces per indentation level in generated files.
    pub indent: usize,
    pub json: bool,
}

/// Run the pipeline over a directory tree.
pub fn generate(args: &GenerateArgs) -> CliResult<ExitCode> {
    let config = PipelineConfig::from_raw(
        &args.output_dir,
        args.max_read,
        args.max_write,
        args.max_parse,
        args.style,
        &args.extension,
    )
    .map_err(|e| CliError::usage(format!("Error: {e}")))?
    .with_render(RenderConfig::default().with_indent_width(args.indent));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::failure(format!("Error starting runtime: {e}")))?;

    let report = runtime
        .block_on(pipeline::run(&args.input_dir, &config))
        .map_err(|e| CliError::usage(format!("Error: {e}")))?;

    if args.json {
        println!("{}", report.to_json());
    } else {
        print_summary(&report, &config);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_summary(report: &PipelineReport, config: &PipelineConfig) {
    println!(
        "{} file(s) read, {} class(es) generated, {} file(s) written to {} ({} style)",
        report.files_read,
        report.classes_generated,
        report.files_written,
        config.output_dir.display(),
        config.style,
    );
    if report.failures() > 0 {
        println!(
            "{} failure(s): {} discovery, {} read, {} parse, {} write, {} worker",
            report.failures(),
            report.discovery_failures,
            report.read_failures,
            report.parse_failures,
            report.write_failures,
            report.worker_failures,
        );
    }
}

/// Print every generated test class for one file.
pub fn emit(file: &Path, style: i64, indent: usize) -> CliResult<ExitCode> {
    let style = TestStyle::from_selector(style).map_err(|e| CliError::usage(format!("Error: {e}")))?;
    let source = read_source(file)?;
    let render = RenderConfig::default().with_indent_width(indent);

    let results = backend::generate_with(&source, style.descriptor(), &render).map_err(|e| match e {
        GenerateError::Parse(errors) => {
            let rendered = diagnostics::render_errors(&file.to_string_lossy(), &source, &errors);
            CliError::failure(rendered.trim_end())
        }
        other => CliError::failure(format!("Error: {other}")),
    })?;

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("// {}", pipeline::io::output_path(Path::new(""), &result.class_name, "cs").display());
        print!("{}", result.content);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the extracted class models, one block per class.
pub fn classes(file: &Path) -> CliResult<ExitCode> {
    let source = read_source(file)?;
    let unit = parse_unit(file, &source)?;

    for class in extract::classes(&unit) {
        print!("{}", describe_class(&class));
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_unit(file: &Path, source: &str) -> CliResult<CompilationUnit> {
    let file_name = file.to_string_lossy();
    let summarize = |errors: Vec<diagnostics::CompileError>| {
        let lines: Vec<_> = errors
            .iter()
            .map(|err| diagnostics::summarize(&file_name, source, err))
            .collect();
        CliError::failure(lines.join("\n"))
    };
    let tokens = lexer::lex(source).map_err(summarize)?;
    parser::parse(&tokens).map_err(summarize)
}

fn describe_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| match p.modifier {
            Some(modifier) => format!("{modifier} {} {}", p.ty, p.name),
            None => format!("{} {}", p.ty, p.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_class(class: &ClassModel) -> String {
    let mut out = String::new();
    let namespace = class.namespace.as_ref().map(ToString::to_string).unwrap_or_default();
    out.push_str(&format!("class {} (namespace '{namespace}')\n", class.type_path()));
    match &class.constructor {
        Some(ctor) if !class.is_static() => out.push_str(&format!("  ctor({})\n", describe_params(&ctor.params))),
        _ => out.push_str("  no setup\n"),
    }
    for method in &class.public_methods {
        out.push_str(&format!(
            "  {} {}({})\n",
            method.return_type,
            method.name,
            describe_params(&method.params)
        ));
    }
    out
}

// ============================================================================
// Helper functions
// ============================================================================

fn read_source(file: &Path) -> CliResult<String> {
    fs::read_to_string(file).map_err(|e| CliError::failure(format!("Error reading file '{}': {e}", file.display())))
}
