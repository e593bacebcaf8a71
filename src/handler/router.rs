use crate::handler::Handler;
use crate::handler::static_files::StaticController;
use crate::http::request::Request;
use crate::http::response::Response;

/// Exact-path dispatch table.
///
/// Bindings are registered at startup and read-only afterwards, so a router
/// behind an `Arc` can be shared by every connection task.
pub struct Router {
    bindings: Vec<Box<dyn Handler>>,
    fallback: StaticController,
}

impl Router {
    pub fn new(fallback: StaticController) -> Self {
        Self {
            bindings: Vec::new(),
            fallback,
        }
    }

    /// Appends a binding. Earlier registrations win when two handlers share a path.
    pub fn register(mut self, handler: impl Handler + 'static) -> Self {
        tracing::debug!(url = handler.url(), "Registered handler");
        self.bindings.push(Box::new(handler));
        self
    }

    /// Bound paths in registration order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|h| h.url())
    }

    /// The first handler whose path equals `path` exactly.
    pub fn find(&self, path: &str) -> Option<&dyn Handler> {
        self.bindings
            .iter()
            .find(|h| h.is_same_url(path))
            .map(|h| h.as_ref())
    }

    /// Produces the response for `request`.
    ///
    /// Never fails: handler errors become `500`, unbound paths go to the
    /// static controller.
    pub fn dispatch(&self, request: &Request) -> Response {
        let path = request.path();

        let Some(handler) = self.find(path) else {
            tracing::debug!(method = %request.method(), path, "No binding, serving static file");
            return self.fallback.serve(path);
        };

        match handler.work(request) {
            Ok(response) => {
                tracing::debug!(
                    method = %request.method(),
                    path,
                    status = response.status(),
                    "Handler completed"
                );
                response
            }
            Err(e) => {
                tracing::error!(
                    method = %request.method(),
                    path,
                    error = %e,
                    "Handler failed"
                );
                Response::internal_error()
            }
        }
    }
}
