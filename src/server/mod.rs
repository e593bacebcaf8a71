//! Process wiring: the accept loop and the default route table.

pub mod listener;

use std::sync::Arc;

use crate::config::Config;
use crate::files::DirectoryProvider;
use crate::handler::{CreateUserHandler, LoginHandler, Router, StaticController};
use crate::store::UserStore;

pub const LOGIN_URL: &str = "/user/login";
pub const CREATE_USER_URL: &str = "/user/create";

/// Builds the route table: signup and login bindings over a static file fallback.
pub fn build_router(cfg: &Config, store: Arc<dyn UserStore>) -> Router {
    let provider = DirectoryProvider::new(cfg.static_files.roots.iter().cloned());

    let router = Router::new(StaticController::new(Arc::new(provider)))
        .register(CreateUserHandler::new(CREATE_USER_URL, Arc::clone(&store)))
        .register(LoginHandler::new(LOGIN_URL, store));

    tracing::info!(urls = ?router.urls().collect::<Vec<_>>(), "Routes registered");
    router
}
