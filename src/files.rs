use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// No regular file at the resolved path, or the request path tried to
    /// leave the document root.
    #[error("file not found")]
    NotFound,
    #[error("i/o reading file")]
    Io(#[from] std::io::Error),
}

/// A resolved static file: the path actually read and its full contents.
#[derive(Debug)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// Resolves request paths to files under the document root.
///
/// Invariant: the resolved path never escapes the document root. Any `..`
/// segment, or an absolute segment left after stripping the leading slash,
/// is rejected as `NotFound` before touching the filesystem.
#[derive(Debug, Clone)]
pub struct StaticFileResolver {
    root: PathBuf,
}

impl StaticFileResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn resolve(&self, request_path: &str) -> Result<ResolvedFile, ResolveError> {
        let path = if request_path == "/" {
            "/index.html"
        } else {
            request_path
        };
        let relative = path.strip_prefix('/').unwrap_or(path);

        if !is_confined(Path::new(relative)) {
            return Err(ResolveError::NotFound);
        }

        let full = self.root.join(relative);
        match tokio::fs::metadata(&full).await {
            Ok(meta) if meta.is_file() => {
                let contents = tokio::fs::read(&full).await?;
                Ok(ResolvedFile {
                    path: full,
                    contents,
                })
            }
            Ok(_) => Err(ResolveError::NotFound),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ResolveError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// Only plain name components are allowed; `..`, a root, or a prefix would
/// let the joined path escape the document root.
fn is_confined(relative: &Path) -> bool {
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
