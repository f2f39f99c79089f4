//! Warehouse inventory operations.
use serde::Serialize;

use crate::inventory::InventoryItem;
use crate::shipment::ProductCategory;
use crate::{EngineError, ResultEngine};

use super::Engine;

/// A low-stock warning for one category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StockAlert {
    pub category: ProductCategory,
    pub message: String,
}

/// Warehouse-wide inventory statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total_quantity: f64,
    pub categories: usize,
    pub low_stock: usize,
}

impl Engine {
    /// All inventory rows plus low-stock alerts and totals.
    pub fn list_inventory(&self) -> (Vec<InventoryItem>, Vec<StockAlert>, InventoryStats) {
        let inventory = self.store().document().inventory.clone();

        let alerts: Vec<StockAlert> = inventory
            .iter()
            .filter(|i| i.is_low())
            .map(|i| StockAlert {
                category: i.category,
                message: format!(
                    "{} blueberries stock running low, please restock",
                    i.category
                ),
            })
            .collect();

        let stats = InventoryStats {
            total_quantity: inventory.iter().map(|i| i.quantity).sum(),
            categories: inventory.len(),
            low_stock: alerts.len(),
        };
        (inventory, alerts, stats)
    }

    /// The inventory row for one category.
    pub fn inventory_by_category(&self, category: ProductCategory) -> ResultEngine<InventoryItem> {
        self.store()
            .document()
            .inventory
            .iter()
            .find(|i| i.category == category)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(format!("inventory for {category}")))
    }

    /// Add stock to one category and re-derive its status.
    pub fn restock(
        &mut self,
        category: ProductCategory,
        quantity: f64,
    ) -> ResultEngine<InventoryItem> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(EngineError::Validation(
                "restock quantity must be a positive number".to_string(),
            ));
        }

        let doc = self.store_mut().document_mut();
        let item = doc
            .inventory
            .iter_mut()
            .find(|i| i.category == category)
            .ok_or_else(|| EngineError::NotFound(format!("inventory for {category}")))?;

        item.quantity += quantity;
        item.status = InventoryItem::status_for(item.quantity, item.min_stock);
        item.last_updated = chrono::Utc::now();
        let updated = item.clone();

        self.store().persist()?;
        Ok(updated)
    }
}
