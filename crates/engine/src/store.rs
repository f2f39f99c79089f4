//! The flat-file document store.
//!
//! The whole dataset is one JSON document loaded into memory when the
//! engine is built and rewritten after every mutating operation. Writes go
//! through a sibling temp file followed by a rename, so a crash mid-write
//! never leaves a truncated document behind.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::container::{Container, ContainerClass, ContainerStatus};
use crate::fleet::{FleetTrip, Vehicle, VehicleKind, VehicleStatus};
use crate::inventory::{InventoryItem, StockStatus};
use crate::shipment::{ProductCategory, Shipment};
use crate::users::User;

/// Errors raised by the store itself.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The singleton financial snapshot, overwritten wholesale on every
/// recomputation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_income: f64,
    pub tax: f64,
    pub profit_after_tax: f64,
    pub updated_at: DateTime<Utc>,
}

impl Default for FinancialSnapshot {
    fn default() -> Self {
        Self {
            total_revenue: 0.0,
            total_expenses: 0.0,
            net_income: 0.0,
            tax: 0.0,
            profit_after_tax: 0.0,
            updated_at: Utc::now(),
        }
    }
}

/// The whole dataset: flat, independent collections keyed by integer id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default)]
    pub fleet: Vec<Vehicle>,
    #[serde(default)]
    pub fleet_trips: Vec<FleetTrip>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub financials: Option<FinancialSnapshot>,
}

/// Next auto-increment id for a collection: max existing id + 1.
pub fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

/// Owns the in-memory document and the path it is persisted to.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    doc: Document,
}

impl Store {
    /// Load the document from `path`, seeding a fresh one (and writing it
    /// out) when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Document::seeded()
        };

        let store = Self { path, doc };
        if !store.path.exists() {
            store.persist()?;
        }
        Ok(store)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access to the document. Callers must [`persist`] afterwards;
    /// mutation and flush are split so one operation can touch several
    /// collections and still produce a single write.
    ///
    /// [`persist`]: Store::persist
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Rewrite the whole document atomically: serialize to a sibling temp
    /// file, then rename over the target.
    pub fn persist(&self) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(&self.doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// The financial snapshot, zeroed when none has been computed yet.
    pub fn financials(&self) -> FinancialSnapshot {
        self.doc.financials.clone().unwrap_or_default()
    }

    /// Overwrite the financial snapshot, stamping `updated_at`, and persist.
    pub fn update_financials(
        &mut self,
        mut snapshot: FinancialSnapshot,
    ) -> Result<FinancialSnapshot, StoreError> {
        snapshot.updated_at = Utc::now();
        self.doc.financials = Some(snapshot.clone());
        self.persist()?;
        Ok(snapshot)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document {
    /// Default dataset for a brand-new deployment: an empty yard ledger
    /// would make every admin screen useless, so seed two containers per
    /// class, a small mixed fleet and full inventory rows.
    pub fn seeded() -> Self {
        let now = Utc::now();

        let containers = [
            ContainerClass::Small,
            ContainerClass::Small,
            ContainerClass::Medium,
            ContainerClass::Medium,
            ContainerClass::Large,
            ContainerClass::Large,
        ]
        .iter()
        .enumerate()
        .map(|(i, class)| Container {
            id: i as u64 + 1,
            class: *class,
            capacity: class.nominal_capacity(),
            current_load: 0.0,
            status: ContainerStatus::Available,
        })
        .collect();

        let fleet = vec![
            Vehicle {
                id: 1,
                kind: VehicleKind::Ship,
                name: "MV Muğla Star".to_string(),
                capacity: 50000.0,
                fuel_cost_per_km: 2.0,
                crew_cost: 500.0,
                maintenance: 300.0,
                status: VehicleStatus::Available,
            },
            Vehicle {
                id: 2,
                kind: VehicleKind::Ship,
                name: "MV Aegean Carrier".to_string(),
                capacity: 80000.0,
                fuel_cost_per_km: 3.5,
                crew_cost: 800.0,
                maintenance: 450.0,
                status: VehicleStatus::Available,
            },
            Vehicle {
                id: 3,
                kind: VehicleKind::Truck,
                name: "TR-48 Frigo".to_string(),
                capacity: 10000.0,
                fuel_cost_per_km: 1.2,
                crew_cost: 200.0,
                maintenance: 100.0,
                status: VehicleStatus::Available,
            },
            Vehicle {
                id: 4,
                kind: VehicleKind::Truck,
                name: "TR-48 Kargo".to_string(),
                capacity: 15000.0,
                fuel_cost_per_km: 1.5,
                crew_cost: 250.0,
                maintenance: 120.0,
                status: VehicleStatus::Available,
            },
        ];

        let inventory = [
            ProductCategory::Fresh,
            ProductCategory::Frozen,
            ProductCategory::Organic,
        ]
        .iter()
        .enumerate()
        .map(|(i, category)| InventoryItem {
            id: i as u64 + 1,
            category: *category,
            quantity: 10000.0,
            min_stock: 2000.0,
            status: StockStatus::Ok,
            last_updated: now,
        })
        .collect();

        Self {
            users: Vec::new(),
            shipments: Vec::new(),
            containers,
            fleet,
            fleet_trips: Vec::new(),
            inventory,
            financials: None,
        }
    }
}
