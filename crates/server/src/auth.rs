//! Account registration endpoint.

use api_types::auth::RegisterUser;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{ServerError, server::ServerState};
use engine::{NewUser, Role, User};

/// Registered account, without the password.
#[derive(Serialize)]
pub struct UserView {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

fn map_role(role: api_types::Role) -> Role {
    match role {
        api_types::Role::Customer => Role::Customer,
        api_types::Role::Admin => Role::Admin,
    }
}

/// Handle account registration. Public; accounts are customers unless the
/// body asks for the admin role.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterUser>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let user = state.engine.write().await.register_user(NewUser {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        role: map_role(payload.role),
    })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
