//! Account registration and credential checks.
use serde::Deserialize;

use crate::store::next_id;
use crate::users::{Role, User};
use crate::{EngineError, ResultEngine};

use super::Engine;

/// Input for registering an account.
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

impl Engine {
    /// Register a new account. Usernames and email addresses are unique
    /// across the user collection.
    pub fn register_user(&mut self, new: NewUser) -> ResultEngine<User> {
        let username = new.username.trim();
        let email = new.email.trim();

        if username.is_empty() {
            return Err(EngineError::Validation(
                "username must not be empty".to_string(),
            ));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(EngineError::Validation(
                "a valid email address is required".to_string(),
            ));
        }
        if new.password.len() < 6 {
            return Err(EngineError::Validation(
                "password must be at least 6 characters".to_string(),
            ));
        }

        {
            let doc = self.store().document();
            if doc.users.iter().any(|u| u.username == username) {
                return Err(EngineError::ExistingKey(format!("username {username}")));
            }
            if doc.users.iter().any(|u| u.email == email) {
                return Err(EngineError::ExistingKey(format!("email {email}")));
            }
        }

        let doc = self.store_mut().document_mut();
        let user = User {
            id: next_id(doc.users.iter().map(|u| u.id)),
            username: username.to_string(),
            email: email.to_string(),
            password: new.password,
            role: new.role,
            created_at: chrono::Utc::now(),
        };
        doc.users.push(user.clone());
        self.store().persist()?;
        Ok(user)
    }

    /// Resolve credentials to a user. The failure message does not reveal
    /// whether the username exists.
    pub fn authenticate(&self, username: &str, password: &str) -> ResultEngine<User> {
        self.store()
            .document()
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
            .ok_or_else(|| EngineError::NotFound("user".to_string()))
    }
}
