//! The business rule engine for the logistics backend.
//!
//! Pure calculators (pricing, distance, delivery estimation, trip expense,
//! financial aggregation, bin packing) plus a JSON document store, tied
//! together by the [`Engine`] facade. Side effects live in the store; the
//! calculators are total functions and do no I/O.
pub use allocator::{Assignment, PackedContainer, PackingPlan};
pub use container::{Container, ContainerClass, ContainerStatus};
pub use error::EngineError;
pub use financials::{Breakdown, TAX_RATE, round2};
pub use fleet::{FleetTrip, TripExpense, Vehicle, VehicleKind, VehicleStatus};
pub use inventory::{InventoryItem, StockStatus};
pub use ops::{
    ContainerDetail, ContainerStats, Engine, EngineBuilder, FinancialReport, FinancialSourceStats,
    FleetStats, InventoryStats, NewShipment, NewUser, Report, StockAlert, TrackingInfo,
};
pub use report::{CategorySales, InventoryLevel, RouteCount, StatusCounts};
pub use shipment::{ProductCategory, ServiceClass, Shipment, ShipmentStatus};
pub use store::{Document, FinancialSnapshot, Store, StoreError};
pub use users::{Role, User};

pub mod allocator;
mod container;
pub mod distance;
mod error;
pub mod financials;
pub mod fleet;
mod inventory;
mod ops;
pub mod pricing;
pub mod report;
mod shipment;
mod store;
mod users;

pub type ResultEngine<T> = Result<T, EngineError>;
