//! Shipment API endpoints.

use api_types::shipment::{ShipmentListQuery, ShipmentNew, StatusUpdate};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState, server::require_admin};
use engine::{
    NewShipment, ProductCategory, ServiceClass, Shipment, ShipmentStatus, TrackingInfo, User,
};

fn map_category(category: api_types::Category) -> ProductCategory {
    match category {
        api_types::Category::Fresh => ProductCategory::Fresh,
        api_types::Category::Frozen => ProductCategory::Frozen,
        api_types::Category::Organic => ProductCategory::Organic,
    }
}

fn map_class(class: api_types::ServiceClass) -> ServiceClass {
    match class {
        api_types::ServiceClass::Small => ServiceClass::Small,
        api_types::ServiceClass::Medium => ServiceClass::Medium,
        api_types::ServiceClass::Large => ServiceClass::Large,
    }
}

fn map_status(status: api_types::ShipmentStatus) -> ShipmentStatus {
    match status {
        api_types::ShipmentStatus::Pending => ShipmentStatus::Pending,
        api_types::ShipmentStatus::Ready => ShipmentStatus::Ready,
        api_types::ShipmentStatus::InTransit => ShipmentStatus::InTransit,
        api_types::ShipmentStatus::Delivered => ShipmentStatus::Delivered,
    }
}

/// Handle shipment booking for the authenticated customer.
pub async fn create(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Json(payload): Json<ShipmentNew>,
) -> Result<(StatusCode, Json<Shipment>), ServerError> {
    let shipment = state.engine.write().await.create_shipment(
        user.id,
        &user.username,
        NewShipment {
            product_name: payload.product_name,
            category: map_category(payload.category),
            weight: payload.weight,
            destination: payload.destination,
            destination_country: payload.destination_country,
            service_class: map_class(payload.service_class),
        },
    )?;

    Ok((StatusCode::CREATED, Json(shipment)))
}

/// The authenticated customer's shipments, newest first.
pub async fn mine(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<Shipment>>, ServerError> {
    let shipments = state.engine.read().await.customer_shipments(user.id);
    Ok(Json(shipments))
}

/// All shipments, optionally filtered by status. Admin only.
pub async fn list(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Query(query): Query<ShipmentListQuery>,
) -> Result<Json<Vec<Shipment>>, ServerError> {
    require_admin(&user)?;

    let shipments = state
        .engine
        .read()
        .await
        .list_shipments(query.status.map(map_status));
    Ok(Json(shipments))
}

/// Move a shipment to a new status. Admin only.
pub async fn update_status(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<Shipment>, ServerError> {
    require_admin(&user)?;

    let shipment = state
        .engine
        .write()
        .await
        .update_shipment_status(id, map_status(payload.status))?;
    Ok(Json(shipment))
}

/// Public tracking endpoint, no credentials required.
pub async fn track(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<TrackingInfo>, ServerError> {
    let info = state.engine.read().await.track_shipment(id)?;
    Ok(Json(info))
}
