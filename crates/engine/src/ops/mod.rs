//! Engine operations, split by functional area.
//!
//! Every operation reads from and (when mutating) writes back through the
//! document store. Mutating operations flush the whole document exactly
//! once, after all collections involved have been updated.
use std::path::PathBuf;

use crate::store::Store;
use crate::{EngineError, ResultEngine};

mod containers;
mod financials;
mod fleet;
mod inventory;
mod reports;
mod shipments;
mod users;

pub use containers::{ContainerDetail, ContainerStats};
pub use financials::{FinancialReport, FinancialSourceStats};
pub use fleet::FleetStats;
pub use inventory::{InventoryStats, StockAlert};
pub use reports::Report;
pub use shipments::{NewShipment, TrackingInfo};
pub use users::NewUser;

/// The facade over the business rules and the document store.
#[derive(Debug)]
pub struct Engine {
    store: Store,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub(crate) fn store(&self) -> &Store {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

/// The builder for `Engine`.
#[derive(Default)]
pub struct EngineBuilder {
    path: Option<PathBuf>,
}

impl EngineBuilder {
    /// Path of the JSON document backing the store.
    pub fn path(mut self, path: impl Into<PathBuf>) -> EngineBuilder {
        self.path = Some(path.into());
        self
    }

    /// Construct `Engine`, loading (or seeding) the document.
    pub fn build(self) -> ResultEngine<Engine> {
        let path = self.path.ok_or_else(|| {
            EngineError::Validation("a document path is required to build the engine".to_string())
        })?;
        let store = Store::open(path)?;
        Ok(Engine { store })
    }
}
