//! Validated run configuration.

use std::path::{Component, Path, PathBuf};

use crate::backend::{RenderConfig, TestStyle, UnknownStyle};

/// Extension used for discovery and for generated files when none is given.
pub const DEFAULT_EXTENSION: &str = "cs";

/// Errors that stop a run before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value}")]
    NonPositive { name: &'static str, value: i64 },

    #[error(transparent)]
    UnknownStyle(#[from] UnknownStyle),

    #[error("extension must be non-empty and must not contain '.' or path separators, got '{0}'")]
    InvalidExtension(String),

    #[error("refusing path with '..' components: {}", .0.display())]
    ParentTraversal(PathBuf),

    #[error("input directory {} does not exist or is not a directory", .0.display())]
    MissingInput(PathBuf),

    #[error("output directory {} must not equal or contain input directory {}", .output.display(), .input.display())]
    OutputContainsInput { input: PathBuf, output: PathBuf },

    #[error("cannot resolve {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot prepare output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Concurrency bounds, style and output location for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub output_dir: PathBuf,
    pub max_read: usize,
    pub max_synthesize: usize,
    pub max_write: usize,
    pub style: TestStyle,
    /// Extension without the leading dot.
    pub extension: String,
    pub render: RenderConfig,
}

impl PipelineConfig {
    /// Single worker per stage, NUnit, `.cs`, four-space indentation.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            max_read: 1,
            max_synthesize: 1,
            max_write: 1,
            style: TestStyle::NUnit,
            extension: DEFAULT_EXTENSION.to_string(),
            render: RenderConfig::default(),
        }
    }

    pub fn with_bounds(mut self, read: usize, synthesize: usize, write: usize) -> Self {
        self.max_read = read;
        self.max_synthesize = synthesize;
        self.max_write = write;
        self
    }

    pub fn with_style(mut self, style: TestStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Build from raw command-line values.
    pub fn from_raw(
        output_dir: impl Into<PathBuf>,
        max_read: i64,
        max_write: i64,
        max_parse: i64,
        style: i64,
        extension: &str,
    ) -> Result<Self, ConfigError> {
        let config = Self::new(output_dir)
            .with_bounds(
                positive("MAX_READ", max_read)?,
                positive("MAX_PARSE", max_parse)?,
                positive("MAX_WRITE", max_write)?,
            )
            .with_style(TestStyle::from_selector(style)?)
            .with_extension(extension.trim_start_matches('.'));
        config.validate()?;
        Ok(config)
    }

    /// Check the fields that do not need the filesystem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("MAX_READ", self.max_read),
            ("MAX_PARSE", self.max_synthesize),
            ("MAX_WRITE", self.max_write),
        ] {
            if value == 0 {
                return Err(ConfigError::NonPositive { name, value: 0 });
            }
        }
        if self.extension.is_empty() || self.extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::InvalidExtension(self.extension.clone()));
        }
        reject_parent_traversal(&self.output_dir)
    }

    /// Channel capacity in front of a stage with `bound` workers.
    pub fn channel_capacity(bound: usize) -> usize {
        bound.saturating_mul(2).max(1)
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize, ConfigError> {
    match usize::try_from(value) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::NonPositive { name, value }),
    }
}

fn reject_parent_traversal(path: &Path) -> Result<(), ConfigError> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ConfigError::ParentTraversal(path.to_path_buf()));
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject unsafe input/output combinations. The output directory may not exist yet.
pub fn check_paths(input: &Path, output: &Path) -> Result<(), ConfigError> {
    reject_parent_traversal(input)?;
    reject_parent_traversal(output)?;

    if !input.is_dir() {
        return Err(ConfigError::MissingInput(input.to_path_buf()));
    }
    let input_abs = input.canonicalize().map_err(|source| ConfigError::Resolve {
        path: input.to_path_buf(),
        source,
    })?;
    let output_abs = match output.canonicalize() {
        Ok(path) => path,
        Err(_) => absolute(output)?,
    };

    if input_abs.starts_with(&output_abs) {
        return Err(ConfigError::OutputContainsInput {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Remove `output` if present and create it empty.
pub async fn prepare_output_dir(output: &Path) -> Result<(), ConfigError> {
    let wrap = |source| ConfigError::OutputDir {
        path: output.to_path_buf(),
        source,
    };
    if tokio::fs::try_exists(output).await.map_err(wrap)? {
        tokio::fs::remove_dir_all(output).await.map_err(wrap)?;
    }
    tokio::fs::create_dir_all(output).await.map_err(wrap)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_are_validated() {
        let config = PipelineConfig::from_raw("out", 2, 3, 4, 2, ".cs").unwrap();
        assert_eq!((config.max_read, config.max_write, config.max_synthesize), (2, 3, 4));
        assert_eq!(config.style, TestStyle::XUnit);
        assert_eq!(config.extension, "cs");

        assert!(matches!(
            PipelineConfig::from_raw("out", 0, 1, 1, 1, "cs"),
            Err(ConfigError::NonPositive { name: "MAX_READ", value: 0 })
        ));
        assert!(matches!(
            PipelineConfig::from_raw("out", 1, 1, -5, 1, "cs"),
            Err(ConfigError::NonPositive { name: "MAX_PARSE", value: -5 })
        ));
        assert!(matches!(
            PipelineConfig::from_raw("out", 1, 1, 1, 9, "cs"),
            Err(ConfigError::UnknownStyle(UnknownStyle(9)))
        ));
        assert!(matches!(
            PipelineConfig::from_raw("out", 1, 1, 1, 1, ""),
            Err(ConfigError::InvalidExtension(_))
        ));
    }

    #[test]
    fn test_parent_components_are_refused() {
        let config = PipelineConfig::new("out/../elsewhere");
        assert!(matches!(config.validate(), Err(ConfigError::ParentTraversal(_))));
    }

    #[test]
    fn test_output_may_not_contain_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("src");
        std::fs::create_dir(&input).unwrap();

        assert!(matches!(
            check_paths(&input, dir.path()),
            Err(ConfigError::OutputContainsInput { .. })
        ));
        assert!(matches!(check_paths(&input, &input), Err(ConfigError::OutputContainsInput { .. })));
        assert!(check_paths(&input, &dir.path().join("generated")).is_ok());
        assert!(matches!(
            check_paths(&dir.path().join("missing"), &dir.path().join("generated")),
            Err(ConfigError::MissingInput(_))
        ));
    }

    #[tokio::test]
    async fn test_output_dir_is_recreated_empty() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();
        std::fs::write(out.join("stale.cs"), "old").unwrap();

        prepare_output_dir(&out).await.unwrap();
        assert!(out.is_dir());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_capacity_is_twice_the_bound() {
        assert_eq!(PipelineConfig::channel_capacity(3), 6);
    }
}
