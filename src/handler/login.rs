use std::sync::Arc;

use crate::handler::Handler;
use crate::http::headers::SET_COOKIE;
use crate::http::query::QueryString;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::store::UserStore;

const LOGIN_SUCCESS_LOCATION: &str = "/index.html";
const LOGIN_FAILED_LOCATION: &str = "/user/login_failed.html";

/// Checks `userId`/`password` against the user store and redirects with a
/// `logined` cookie.
pub struct LoginHandler {
    url: String,
    store: Arc<dyn UserStore>,
}

impl LoginHandler {
    pub fn new(url: impl Into<String>, store: Arc<dyn UserStore>) -> Self {
        Self {
            url: url.into(),
            store,
        }
    }

    fn authenticate(&self, form: &QueryString) -> bool {
        let (Some(user_id), Some(password)) = (form.get("userId"), form.get("password")) else {
            return false;
        };

        match self.store.find_by_id(user_id) {
            Some(user) => user.password_matches(password),
            None => {
                tracing::debug!(user_id, "Login for unknown user");
                false
            }
        }
    }
}

impl Handler for LoginHandler {
    fn url(&self) -> &str {
        &self.url
    }

    fn work(&self, request: &Request) -> anyhow::Result<Response> {
        // Forms posted with a body win over the query string
        let form = if request.body.is_empty() {
            request.query_string().clone()
        } else {
            request.form()
        };

        if self.authenticate(&form) {
            return Ok(Response::redirect(
                LOGIN_SUCCESS_LOCATION,
                [(SET_COOKIE, "logined=true; Path=/")],
            ));
        }

        Ok(Response::redirect(
            LOGIN_FAILED_LOCATION,
            [(SET_COOKIE, "logined=false")],
        ))
    }
}
