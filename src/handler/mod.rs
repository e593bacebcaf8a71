//! Request handlers and path-based dispatch.
//!
//! A [`Handler`] is bound to one exact URL path. The [`router::Router`] picks
//! the first binding whose path equals the request path; anything unbound
//! falls through to [`static_files::StaticController`].

pub mod login;
pub mod router;
pub mod static_files;
pub mod user_create;

pub use login::LoginHandler;
pub use router::Router;
pub use static_files::StaticController;
pub use user_create::CreateUserHandler;

use crate::http::request::Request;
use crate::http::response::Response;

/// Produces the response for requests on a single bound path.
///
/// Implementations are shared across connection tasks and must not keep
/// per-request state.
pub trait Handler: Send + Sync {
    /// The exact path this handler is bound to, e.g. `/user/login`.
    fn url(&self) -> &str;

    fn is_same_url(&self, path: &str) -> bool {
        self.url() == path
    }

    /// Handles the request. An error is logged by the router and answered
    /// with `500 Internal Server Error`.
    fn work(&self, request: &Request) -> anyhow::Result<Response>;
}
