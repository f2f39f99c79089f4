use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{run, run_with_listener, spawn_with_listener};

mod auth;
mod containers;
mod financials;
mod fleet;
mod inventory;
mod reports;
mod server;
mod shipments;

pub mod types {
    pub mod auth {
        pub use api_types::auth::RegisterUser;
    }

    pub mod shipment {
        pub use api_types::shipment::{ShipmentListQuery, ShipmentNew, StatusUpdate};
        pub use engine::{Shipment, TrackingInfo};
    }

    pub mod container {
        pub use engine::{Container, ContainerDetail, ContainerStats, PackingPlan};
    }

    pub mod fleet {
        pub use api_types::fleet::ExpenseNew;
        pub use engine::{FleetStats, FleetTrip, Vehicle};
    }

    pub mod inventory {
        pub use api_types::inventory::RestockNew;
        pub use engine::{InventoryItem, InventoryStats, StockAlert};
    }

    pub mod financials {
        pub use engine::{FinancialReport, FinancialSourceStats};
    }

    pub mod report {
        pub use engine::Report;
    }
}

pub enum ServerError {
    Engine(EngineError),
    Forbidden,
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) => StatusCode::BAD_REQUEST,
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::CapacityExceeded(_)
        | EngineError::InsufficientStock(_)
        | EngineError::NothingToOptimize(_)
        | EngineError::NoVehicleAvailable(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Storage(store_err) => {
            tracing::error!("storage error: {store_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Forbidden => (StatusCode::FORBIDDEN, "admin access required".to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
