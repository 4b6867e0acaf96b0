//! Filesystem side of the pipeline stages.

use std::path::{Path, PathBuf};

use testgen_core::lang::conventions;

use super::errors::PipelineError;
use crate::backend::GenerationResult;

/// One input file read into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// A rendered test class waiting to be written, tagged with the file it came from.
#[derive(Debug, Clone)]
pub struct PendingWrite {
    pub source: PathBuf,
    pub result: GenerationResult,
}

pub async fn read_source(path: &Path) -> Result<SourceFile, PipelineError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
    })
}

/// `<output_dir>/<ClassName>Tests.<extension>`
pub fn output_path(output_dir: &Path, class_name: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{extension}", conventions::test_class_name(class_name)))
}

/// Write (or overwrite) the file for `result`; returns the path written.
pub async fn write_result(
    output_dir: &Path,
    extension: &str,
    result: &GenerationResult,
) -> Result<PathBuf, PipelineError> {
    let path = output_path(output_dir, &result.class_name, extension);
    tokio::fs::write(&path, &result.content)
        .await
        .map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
