//! Financial summary API endpoints. All admin only.

use axum::{Extension, Json, extract::State};

use crate::{ServerError, server::ServerState, server::require_admin};
use engine::{FinancialReport, User};

/// Current breakdown, recomputed from the ledgers.
pub async fn summary(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<FinancialReport>, ServerError> {
    require_admin(&user)?;

    let report = state.engine.write().await.financial_summary()?;
    Ok(Json(report))
}

/// Forced recomputation. Same numbers as the summary over an unchanged
/// ledger.
pub async fn recalculate(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<FinancialReport>, ServerError> {
    require_admin(&user)?;

    let report = state.engine.write().await.recalculate_financials()?;
    Ok(Json(report))
}
