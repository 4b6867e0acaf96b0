//! Input discovery: a sorted, iterative walk of the input root.

use std::fs::FileType;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use super::errors::PipelineError;

/// Build output directories of .NET projects.
const SKIPPED_DIRS: &[&str] = &["bin", "obj"];

/// Files to post, in walk order, plus the directories that were skipped or could not be listed.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Hidden and build output directories left out of the walk.
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<PipelineError>,
}

fn skip_dir(name: &str) -> bool {
    name.starts_with('.') || SKIPPED_DIRS.contains(&name)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

async fn list(dir: &Path) -> io::Result<Vec<(PathBuf, FileType)>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        entries.push((entry.path(), entry.file_type().await?));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// Collect every regular file under `root` whose extension is `extension`.
///
/// Each directory's files come before its subdirectories; both in sorted order. Symlinks are not followed.
pub async fn discover(root: &Path, extension: &str) -> Discovery {
    walk(root, extension, |dir| async move { list(&dir).await }).await
}

/// The walk behind [`discover`], with the directory listing supplied by the caller.
async fn walk<L, F>(root: &Path, extension: &str, mut list_dir: L) -> Discovery
where
    L: FnMut(PathBuf) -> F,
    F: Future<Output = io::Result<Vec<(PathBuf, FileType)>>>,
{
    let mut found = Discovery::default();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = match list_dir(dir.clone()).await {
            Ok(entries) => entries,
            Err(source) => {
                let err = PipelineError::Discovery { path: dir, source };
                tracing::warn!(error = %err, "skipping directory");
                found.failures.push(err);
                continue;
            }
        };

        let mut subdirs = Vec::new();
        for (path, file_type) in entries {
            if file_type.is_dir() {
                if path.file_name().is_some_and(|name| skip_dir(&name.to_string_lossy())) {
                    tracing::info!(dir = %path.display(), "skipping hidden or build output directory");
                    found.skipped.push(path);
                } else {
                    subdirs.push(path);
                }
            } else if file_type.is_file() && has_extension(&path, extension) {
                found.files.push(path);
            }
        }
        // Reversed so the first subdirectory is walked next.
        stack.extend(subdirs.into_iter().rev());
    }

    found
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "class A { }").unwrap();
    }

    #[tokio::test]
    async fn test_walks_sorted_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("b.cs"));
        touch(&root.join("a.cs"));
        touch(&root.join("notes.txt"));
        touch(&root.join("Core/z.cs"));
        touch(&root.join("Core/Deep/y.cs"));
        touch(&root.join("bin/Debug/gen.cs"));
        touch(&root.join("obj/gen.cs"));
        touch(&root.join(".git/hook.cs"));

        let found = discover(root, "cs").await;
        let relative: Vec<_> = found
            .files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(relative, vec!["a.cs", "b.cs", "Core/z.cs", "Core/Deep/y.cs"]);
        assert!(found.failures.is_empty());
    }

    #[tokio::test]
    async fn test_skipped_directories_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.cs"));
        touch(&root.join("bin/Debug/gen.cs"));
        touch(&root.join("obj/gen.cs"));
        touch(&root.join(".vs/cache.cs"));

        let found = discover(root, "cs").await;
        assert_eq!(found.files, vec![root.join("a.cs")]);
        assert_eq!(found.skipped, vec![root.join(".vs"), root.join("bin"), root.join("obj")]);
    }

    #[tokio::test]
    async fn test_unlistable_subdirectory_keeps_its_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.cs"));
        touch(&root.join("Locked/hidden.cs"));
        touch(&root.join("Open/b.cs"));
        touch(&root.join("z.cs"));

        let locked = root.join("Locked");
        let found = walk(root, "cs", |dir| {
            let locked = locked.clone();
            async move {
                if dir == locked {
                    Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
                } else {
                    list(&dir).await
                }
            }
        })
        .await;

        assert_eq!(found.files, vec![root.join("a.cs"), root.join("z.cs"), root.join("Open").join("b.cs")]);
        match found.failures.as_slice() {
            [PipelineError::Discovery { path, source }] => {
                assert_eq!(path, &locked);
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected one discovery failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unlistable_root_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover(&dir.path().join("missing"), "cs").await;
        assert!(found.files.is_empty());
        assert!(matches!(found.failures.as_slice(), [PipelineError::Discovery { .. }]));
    }
}
