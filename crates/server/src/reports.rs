//! The operations report endpoint. Admin only.

use axum::{Extension, Json, extract::State};

use crate::{ServerError, server::ServerState, server::require_admin};
use engine::{Report, User};

/// One composite snapshot of the whole business.
pub async fn generate(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<Report>, ServerError> {
    require_admin(&user)?;

    let report = state.engine.write().await.generate_report()?;
    Ok(Json(report))
}
