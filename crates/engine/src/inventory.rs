//! The module contains the representation of an inventory row.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shipment::ProductCategory;

/// Stock level of an inventory row, derived from quantity vs min_stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "OK")]
    Ok,
    Low,
}

/// Inventory for one product category, in kg.
///
/// Quantity is decremented when a shipment is created and incremented by
/// restocks; `status` is re-derived on every mutation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u64,
    pub category: ProductCategory,
    pub quantity: f64,
    pub min_stock: f64,
    pub status: StockStatus,
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// Status the row should carry for a given quantity.
    pub fn status_for(quantity: f64, min_stock: f64) -> StockStatus {
        if quantity < min_stock {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    pub fn is_low(&self) -> bool {
        self.quantity < self.min_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_min_stock() {
        assert_eq!(InventoryItem::status_for(100.0, 200.0), StockStatus::Low);
        assert_eq!(InventoryItem::status_for(200.0, 200.0), StockStatus::Ok);
        assert_eq!(InventoryItem::status_for(300.0, 200.0), StockStatus::Ok);
    }
}
