//! Warehouse inventory API endpoints. All admin only.

use api_types::inventory::RestockNew;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{ServerError, server::ServerState, server::require_admin};
use engine::{InventoryItem, InventoryStats, ProductCategory, StockAlert, User};

#[derive(Serialize)]
pub struct InventoryResponse {
    pub inventory: Vec<InventoryItem>,
    pub alerts: Vec<StockAlert>,
    pub stats: InventoryStats,
}

/// Path segments are matched case-insensitively against the three
/// categories.
fn parse_category(raw: &str) -> Result<ProductCategory, ServerError> {
    match raw.to_lowercase().as_str() {
        "fresh" => Ok(ProductCategory::Fresh),
        "frozen" => Ok(ProductCategory::Frozen),
        "organic" => Ok(ProductCategory::Organic),
        _ => Err(ServerError::Generic(format!("unknown category: {raw}"))),
    }
}

/// All inventory rows with low-stock alerts.
pub async fn list(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<InventoryResponse>, ServerError> {
    require_admin(&user)?;

    let (inventory, alerts, stats) = state.engine.read().await.list_inventory();
    Ok(Json(InventoryResponse {
        inventory,
        alerts,
        stats,
    }))
}

/// The inventory row for one category.
pub async fn by_category(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> Result<Json<InventoryItem>, ServerError> {
    require_admin(&user)?;

    let category = parse_category(&category)?;
    let item = state.engine.read().await.inventory_by_category(category)?;
    Ok(Json(item))
}

/// Add stock to one category.
pub async fn restock(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    Path(category): Path<String>,
    Json(payload): Json<RestockNew>,
) -> Result<Json<InventoryItem>, ServerError> {
    require_admin(&user)?;

    let category = parse_category(&category)?;
    let item = state
        .engine
        .write()
        .await
        .restock(category, payload.quantity)?;
    Ok(Json(item))
}
