//! Serving root: loads static content by request path.
//!
//! [`DirectoryProvider`] looks a path up in an ordered list of root
//! directories (by default `./templates` for pages, then `./static` for
//! stylesheets, scripts and fonts) and returns the first hit.

use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Source of static file contents, keyed by request path.
pub trait FileProvider: Send + Sync {
    fn load(&self, path: &str) -> Result<Vec<u8>, FileError>;
}

#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    roots: Vec<PathBuf>,
}

impl DirectoryProvider {
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileProvider for DirectoryProvider {
    fn load(&self, path: &str) -> Result<Vec<u8>, FileError> {
        let relative = sanitize(path).ok_or_else(|| FileError::NotFound(path.to_string()))?;

        for root in &self.roots {
            let candidate = root.join(&relative);
            if !candidate.is_file() {
                continue;
            }

            // std::fs::read closes the handle on both the success and error path
            return match std::fs::read(&candidate) {
                Ok(bytes) => {
                    tracing::debug!(path, file = %candidate.display(), bytes = bytes.len(), "Loaded file");
                    Ok(bytes)
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    Err(FileError::NotFound(path.to_string()))
                }
                Err(source) => Err(FileError::Io {
                    path: path.to_string(),
                    source,
                }),
            };
        }

        Err(FileError::NotFound(path.to_string()))
    }
}

/// Turns a request path into a path relative to a root.
///
/// Returns `None` for empty paths and for anything that could climb out of the
/// root (`..`, absolute prefixes).
fn sanitize(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let mut relative = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (!relative.as_os_str().is_empty()).then_some(relative)
}
