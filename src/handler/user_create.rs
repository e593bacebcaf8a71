use std::sync::Arc;

use crate::handler::Handler;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::store::{User, UserStore};

const SIGNUP_SUCCESS_LOCATION: &str = "/index.html";

/// Registers a user from a signup form and redirects to the index page.
pub struct CreateUserHandler {
    url: String,
    store: Arc<dyn UserStore>,
}

impl CreateUserHandler {
    pub fn new(url: impl Into<String>, store: Arc<dyn UserStore>) -> Self {
        Self {
            url: url.into(),
            store,
        }
    }
}

impl Handler for CreateUserHandler {
    fn url(&self) -> &str {
        &self.url
    }

    fn work(&self, request: &Request) -> anyhow::Result<Response> {
        let form = if request.body.is_empty() {
            request.query_string().clone()
        } else {
            request.form()
        };

        let Some(user) = User::from_form(&form) else {
            tracing::info!(path = request.path(), "Signup rejected: userId and password are required");
            return Ok(Response::bad_request());
        };

        tracing::info!(user_id = %user.user_id, "User created");
        self.store.add(user);

        Ok(Response::found(SIGNUP_SUCCESS_LOCATION))
    }
}
