//! Per-unit pipeline failures.
//!
//! None of these stop a run: each is logged where it happens and counted in the
//! [`super::PipelineReport`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::backend::GenerateError;

/// Pipeline stage, for log fields and panic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Synthesize,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Read => "read",
            Stage::Synthesize => "synthesize",
            Stage::Write => "write",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("cannot list directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot generate tests for {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: GenerateError,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{stage} worker terminated abnormally: {message}")]
    Worker { stage: Stage, message: String },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = PipelineError::Read {
            path: PathBuf::from("src/A.cs"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "cannot read src/A.cs: gone");

        let err = PipelineError::Worker {
            stage: Stage::Synthesize,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "synthesize worker terminated abnormally: boom");
    }
}
