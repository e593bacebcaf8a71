//! In-memory user records consulted by the login and signup handlers.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::http::query::QueryString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Builds a user from signup form fields.
    ///
    /// `userId` and `password` are required and must be non-empty; `name` and
    /// `email` default to empty.
    pub fn from_form(form: &QueryString) -> Option<Self> {
        let user_id = form.get("userId").filter(|v| !v.is_empty())?;
        let password = form.get("password").filter(|v| !v.is_empty())?;

        Some(Self::new(
            user_id,
            password,
            form.get("name").unwrap_or_default(),
            form.get("email").unwrap_or_default(),
        ))
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Lookup of user records by id.
pub trait UserStore: Send + Sync {
    /// Returns the user, or `None` when no user has that id.
    fn find_by_id(&self, user_id: &str) -> Option<User>;

    /// Inserts or replaces the user with the same id.
    fn add(&self, user: User);
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserStore for MemoryUserStore {
    fn find_by_id(&self, user_id: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn add(&self, user: User) {
        tracing::debug!(user_id = %user.user_id, "Storing user");
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.user_id.clone(), user);
    }
}
