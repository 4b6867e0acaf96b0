//! Concurrent file pipeline: read → synthesize → write.
//!
//! Each stage is a fixed pool of tokio tasks fed by a bounded channel, so the number of files being read,
//! parsed and written at once is limited independently. Files are posted with [`Pipeline::post`]; the run
//! completes when [`Pipeline::finish`] has closed the input and every stage has drained.
//!
//! Per-file failures never stop the run. They are logged at the stage where they happen and counted in the
//! [`PipelineReport`]. Two classes with the same name in different files map to the same output file; the
//! last write wins.
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), testgen::pipeline::ConfigError> {
//! use testgen::pipeline::{self, PipelineConfig};
//!
//! let config = PipelineConfig::new("generated").with_bounds(4, 2, 4);
//! let report = pipeline::run("src".as_ref(), &config).await?;
//! println!("{} files written", report.files_written);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod discovery;
pub mod errors;
pub mod io;
mod stages;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinSet;

pub use config::{ConfigError, PipelineConfig};
pub use errors::{PipelineError, Stage};

use stages::{drain, spawn_readers, spawn_synthesizers, spawn_writers};

/// Counters shared by all workers of a run.
#[derive(Debug, Default)]
pub struct PipelineStats {
    pub files_posted: AtomicUsize,
    pub files_read: AtomicUsize,
    pub read_failures: AtomicUsize,
    pub parse_failures: AtomicUsize,
    pub classes_generated: AtomicUsize,
    pub files_written: AtomicUsize,
    pub write_failures: AtomicUsize,
    pub discovery_failures: AtomicUsize,
    pub worker_failures: AtomicUsize,
}

impl PipelineStats {
    fn snapshot(&self) -> PipelineReport {
        let load = |counter: &AtomicUsize| counter.load(Ordering::Relaxed);
        PipelineReport {
            files_posted: load(&self.files_posted),
            files_read: load(&self.files_read),
            read_failures: load(&self.read_failures),
            parse_failures: load(&self.parse_failures),
            classes_generated: load(&self.classes_generated),
            files_written: load(&self.files_written),
            write_failures: load(&self.write_failures),
            discovery_failures: load(&self.discovery_failures),
            worker_failures: load(&self.worker_failures),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub files_posted: usize,
    pub files_read: usize,
    pub read_failures: usize,
    pub parse_failures: usize,
    pub classes_generated: usize,
    pub files_written: usize,
    pub write_failures: usize,
    pub discovery_failures: usize,
    pub worker_failures: usize,
}

impl PipelineReport {
    pub fn failures(&self) -> usize {
        self.read_failures + self.parse_failures + self.write_failures + self.discovery_failures + self.worker_failures
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "files_posted": self.files_posted,
            "files_read": self.files_read,
            "classes_generated": self.classes_generated,
            "files_written": self.files_written,
            "failures": {
                "discovery": self.discovery_failures,
                "read": self.read_failures,
                "parse": self.parse_failures,
                "write": self.write_failures,
                "worker": self.worker_failures,
            },
        })
    }
}

/// A running pipeline. Must be created inside a tokio runtime.
pub struct Pipeline {
    input: mpsc::Sender<PathBuf>,
    readers: JoinSet<()>,
    synthesizers: JoinSet<()>,
    writers: JoinSet<()>,
    stats: Arc<PipelineStats>,
}

impl Pipeline {
    /// Spawn all worker pools. The output directory must already exist.
    pub fn start(config: &PipelineConfig) -> Self {
        let stats = Arc::new(PipelineStats::default());
        let (input, read_rx) = mpsc::channel(PipelineConfig::channel_capacity(config.max_read));
        let (source_tx, source_rx) = mpsc::channel(PipelineConfig::channel_capacity(config.max_synthesize));
        let (result_tx, result_rx) = mpsc::channel(PipelineConfig::channel_capacity(config.max_write));

        let mut readers = JoinSet::new();
        spawn_readers(&mut readers, config.max_read, read_rx, source_tx, &stats);

        let mut synthesizers = JoinSet::new();
        spawn_synthesizers(
            &mut synthesizers,
            config.max_synthesize,
            source_rx,
            result_tx,
            config.style.descriptor(),
            Arc::new(config.render.clone()),
            &stats,
        );

        let mut writers = JoinSet::new();
        spawn_writers(
            &mut writers,
            config.max_write,
            result_rx,
            Arc::new(config.output_dir.clone()),
            Arc::from(config.extension.as_str()),
            &stats,
        );

        tracing::debug!(
            read = config.max_read,
            synthesize = config.max_synthesize,
            write = config.max_write,
            style = %config.style,
            indent = config.render.indent_width,
            "pipeline started"
        );

        Self {
            input,
            readers,
            synthesizers,
            writers,
            stats,
        }
    }

    /// Queue one file; waits while the read channel is full. Returns `false` if no reader is left.
    pub async fn post(&self, path: PathBuf) -> bool {
        let accepted = self.input.send(path).await.is_ok();
        if accepted {
            self.stats.files_posted.fetch_add(1, Ordering::Relaxed);
        }
        accepted
    }

    /// Record directories discovery could not list.
    pub fn record_discovery_failures(&self, count: usize) {
        self.stats.discovery_failures.fetch_add(count, Ordering::Relaxed);
    }

    /// Close the input and wait for every stage to drain.
    pub async fn finish(self) -> PipelineReport {
        let Self {
            input,
            readers,
            synthesizers,
            writers,
            stats,
        } = self;
        drop(input);

        drain(readers, Stage::Read, &stats).await;
        drain(synthesizers, Stage::Synthesize, &stats).await;
        drain(writers, Stage::Write, &stats).await;

        stats.snapshot()
    }
}

/// Validate paths, recreate the output directory, then discover and process every matching file under `input_dir`.
pub async fn run(input_dir: &Path, config: &PipelineConfig) -> Result<PipelineReport, ConfigError> {
    config.validate()?;
    config::check_paths(input_dir, &config.output_dir)?;
    config::prepare_output_dir(&config.output_dir).await?;

    let pipeline = Pipeline::start(config);
    let found = discovery::discover(input_dir, &config.extension).await;
    pipeline.record_discovery_failures(found.failures.len());

    for path in found.files {
        if !pipeline.post(path).await {
            tracing::error!("read stage closed early; remaining files not posted");
            break;
        }
    }

    let report = pipeline.finish().await;
    tracing::info!(
        posted = report.files_posted,
        classes = report.classes_generated,
        written = report.files_written,
        failures = report.failures(),
        "generation finished"
    );
    Ok(report)
}
