//! Worker pools for the three pipeline stages.
//!
//! Every stage owns a bounded receiver shared by its workers through a mutex. A worker takes one unit,
//! processes it, forwards the output and loops until its receiver is closed and drained. Each worker holds a
//! clone of the next stage's sender, so the next channel closes once the last worker of this stage exits.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;

use super::PipelineStats;
use super::errors::{PipelineError, Stage};
use super::io::{self, PendingWrite, SourceFile};
use crate::backend::{self, RenderConfig, StyleDescriptor};

type Shared<T> = Arc<Mutex<mpsc::Receiver<T>>>;

fn shared<T>(rx: mpsc::Receiver<T>) -> Shared<T> {
    Arc::new(Mutex::new(rx))
}

async fn next<T>(rx: &Shared<T>) -> Option<T> {
    rx.lock().await.recv().await
}

pub(super) fn spawn_readers(
    workers: &mut JoinSet<()>,
    count: usize,
    rx: mpsc::Receiver<PathBuf>,
    tx: mpsc::Sender<SourceFile>,
    stats: &Arc<PipelineStats>,
) {
    let rx = shared(rx);
    for worker in 0..count {
        let (rx, tx, stats) = (rx.clone(), tx.clone(), stats.clone());
        workers.spawn(async move {
            while let Some(path) = next(&rx).await {
                match io::read_source(&path).await {
                    Ok(source) => {
                        stats.files_read.fetch_add(1, Ordering::Relaxed);
                        tracing::debug!(worker, path = %path.display(), bytes = source.text.len(), "read");
                        if tx.send(source).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        stats.read_failures.fetch_add(1, Ordering::Relaxed);
                        tracing::error!(error = %err, "read failed");
                    }
                }
            }
        });
    }
}

pub(super) fn spawn_synthesizers(
    workers: &mut JoinSet<()>,
    count: usize,
    rx: mpsc::Receiver<SourceFile>,
    tx: mpsc::Sender<PendingWrite>,
    style: &'static StyleDescriptor,
    render: Arc<RenderConfig>,
    stats: &Arc<PipelineStats>,
) {
    let rx = shared(rx);
    for worker in 0..count {
        let (rx, tx, render, stats) = (rx.clone(), tx.clone(), render.clone(), stats.clone());
        workers.spawn(async move {
            while let Some(SourceFile { path, text }) = next(&rx).await {
                let render = render.clone();
                let outcome =
                    tokio::task::spawn_blocking(move || backend::generate_with(&text, style, &render)).await;
                let results = match outcome {
                    Ok(Ok(results)) => results,
                    Ok(Err(source)) => {
                        stats.parse_failures.fetch_add(1, Ordering::Relaxed);
                        let err = PipelineError::Parse { path, source };
                        tracing::error!(error = %err, "synthesis failed");
                        continue;
                    }
                    Err(join) => {
                        stats.worker_failures.fetch_add(1, Ordering::Relaxed);
                        let err = PipelineError::Worker {
                            stage: Stage::Synthesize,
                            message: join.to_string(),
                        };
                        tracing::error!(error = %err, path = %path.display(), "synthesis aborted");
                        continue;
                    }
                };

                tracing::debug!(worker, path = %path.display(), classes = results.len(), "synthesized");
                stats.classes_generated.fetch_add(results.len(), Ordering::Relaxed);
                for result in results {
                    let pending = PendingWrite {
                        source: path.clone(),
                        result,
                    };
                    if tx.send(pending).await.is_err() {
                        return;
                    }
                }
            }
        });
    }
}

pub(super) fn spawn_writers(
    workers: &mut JoinSet<()>,
    count: usize,
    rx: mpsc::Receiver<PendingWrite>,
    output_dir: Arc<PathBuf>,
    extension: Arc<str>,
    stats: &Arc<PipelineStats>,
) {
    let rx = shared(rx);
    for worker in 0..count {
        let (rx, output_dir, extension, stats) = (rx.clone(), output_dir.clone(), extension.clone(), stats.clone());
        workers.spawn(async move {
            while let Some(pending) = next(&rx).await {
                match io::write_result(&output_dir, &extension, &pending.result).await {
                    Ok(path) => {
                        stats.files_written.fetch_add(1, Ordering::Relaxed);
                        tracing::debug!(worker, source = %pending.source.display(), output = %path.display(), "written");
                    }
                    Err(err) => {
                        stats.write_failures.fetch_add(1, Ordering::Relaxed);
                        tracing::error!(error = %err, source = %pending.source.display(), "write failed");
                    }
                }
            }
        });
    }
}

/// Await every worker of one stage; panics are logged and counted, never propagated.
pub(super) async fn drain(mut workers: JoinSet<()>, stage: Stage, stats: &PipelineStats) {
    while let Some(joined) = workers.join_next().await {
        if let Err(join) = joined {
            stats.worker_failures.fetch_add(1, Ordering::Relaxed);
            let err = PipelineError::Worker {
                stage,
                message: join.to_string(),
            };
            tracing::error!(error = %err, "worker lost");
        }
    }
}
