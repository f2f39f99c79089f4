//! Container yard API endpoints. All admin only.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{ServerError, server::ServerState, server::require_admin};
use engine::{Container, ContainerDetail, ContainerStats, PackingPlan, User};

#[derive(Serialize)]
pub struct ContainersResponse {
    pub containers: Vec<Container>,
    pub stats: ContainerStats,
}

#[derive(Serialize)]
pub struct OptimizeResponse {
    pub message: String,
    #[serde(flatten)]
    pub plan: PackingPlan,
}

/// The whole yard with its statistics.
pub async fn list(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<ContainersResponse>, ServerError> {
    require_admin(&user)?;

    let (containers, stats) = state.engine.read().await.list_containers();
    Ok(Json(ContainersResponse { containers, stats }))
}

/// One container with the shipments loaded into it.
pub async fn detail(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<ContainerDetail>, ServerError> {
    require_admin(&user)?;

    let detail = state.engine.read().await.container_detail(id)?;
    Ok(Json(detail))
}

/// Run the allocator over pending shipments and available containers.
pub async fn optimize(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<OptimizeResponse>, ServerError> {
    require_admin(&user)?;

    let plan = state.engine.write().await.optimize_containers()?;
    Ok(Json(OptimizeResponse {
        message: plan.message(),
        plan,
    }))
}
