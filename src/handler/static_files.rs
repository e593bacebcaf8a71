//! Fallback controller serving files from the serving root.

use std::sync::Arc;

use crate::files::{FileError, FileProvider};
use crate::http::response::Response;
use crate::http::status::StatusCode;

const INDEX_FILE: &str = "index.html";

/// Serves the request path as a static file.
///
/// Built once at startup and owned by the router; it holds no mutable state.
#[derive(Clone)]
pub struct StaticController {
    provider: Arc<dyn FileProvider>,
}

impl StaticController {
    pub fn new(provider: Arc<dyn FileProvider>) -> Self {
        Self { provider }
    }

    /// Loads `path` and answers `200` with its bytes and MIME type.
    ///
    /// A missing file is `404` with no headers or body; any other read or MIME
    /// failure is `500`. Paths ending in `/` serve that directory's
    /// `index.html`.
    pub fn serve(&self, path: &str) -> Response {
        let path = if path.ends_with('/') {
            format!("{path}{INDEX_FILE}")
        } else {
            path.to_string()
        };

        match self.provider.load(&path) {
            Ok(bytes) => Response::from_file_contents(&path, bytes, StatusCode::Ok),
            Err(FileError::NotFound(_)) => {
                tracing::debug!(path = %path, "Static file not found");
                Response::not_found()
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to read static file");
                Response::internal_error()
            }
        }
    }
}
