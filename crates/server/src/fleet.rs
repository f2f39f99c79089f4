//! Fleet API endpoints. All admin only.

use api_types::fleet::ExpenseNew;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::{ServerError, server::ServerState, server::require_admin};
use engine::{FleetStats, FleetTrip, User, Vehicle};

#[derive(Serialize)]
pub struct FleetResponse {
    pub fleet: Vec<Vehicle>,
    pub stats: FleetStats,
}

#[derive(Serialize)]
pub struct VehicleResponse {
    pub vehicle: Vehicle,
    pub trips: Vec<FleetTrip>,
}

/// All vehicles with fleet statistics.
pub async fn list(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<FleetResponse>, ServerError> {
    require_admin(&user)?;

    let (fleet, stats) = state.engine.read().await.list_fleet();
    Ok(Json(FleetResponse { fleet, stats }))
}

/// One vehicle with its trip history.
pub async fn detail(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<VehicleResponse>, ServerError> {
    require_admin(&user)?;

    let (vehicle, trips) = state.engine.read().await.vehicle_detail(id)?;
    Ok(Json(VehicleResponse { vehicle, trips }))
}

/// Log a trip expense against a vehicle.
pub async fn expense_new(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<FleetTrip>), ServerError> {
    require_admin(&user)?;

    let trip = state.engine.write().await.log_trip_expense(
        payload.vehicle_id,
        payload.distance,
        payload.shipment_id,
    )?;
    Ok((StatusCode::CREATED, Json(trip)))
}
