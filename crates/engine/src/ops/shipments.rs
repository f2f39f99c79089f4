//! Shipment operations: creation, tracking, listing, status updates.
use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::inventory::InventoryItem;
use crate::shipment::{ProductCategory, ServiceClass, Shipment, ShipmentStatus};
use crate::store::next_id;
use crate::{EngineError, ResultEngine, distance, pricing};

use super::Engine;

/// Input for creating a shipment. Enum fields are already validated by the
/// time deserialization succeeds; the remaining fields are checked here.
#[derive(Clone, Debug, Deserialize)]
pub struct NewShipment {
    pub product_name: String,
    pub category: ProductCategory,
    pub weight: f64,
    pub destination: String,
    pub destination_country: Option<String>,
    pub service_class: ServiceClass,
}

/// Tracking view for the public tracking endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct TrackingInfo {
    pub shipment: Shipment,
    pub container: Option<Container>,
    pub current_location: &'static str,
}

impl Engine {
    /// Create a shipment for `customer_id`.
    ///
    /// Checks, in order: field validation, service-class weight limit,
    /// inventory coverage. Passing all three derives distance, price and
    /// delivery estimate, inserts the shipment and decrements the inventory
    /// row as one unit of work with a single persisted write.
    pub fn create_shipment(
        &mut self,
        customer_id: u64,
        customer_name: &str,
        new: NewShipment,
    ) -> ResultEngine<Shipment> {
        let product_name = new.product_name.trim();
        if product_name.is_empty() {
            return Err(EngineError::Validation(
                "product_name must not be empty".to_string(),
            ));
        }
        let destination = new.destination.trim();
        if destination.is_empty() {
            return Err(EngineError::Validation(
                "destination must not be empty".to_string(),
            ));
        }
        if !new.weight.is_finite() || new.weight <= 0.0 {
            return Err(EngineError::Validation(
                "weight must be a positive number".to_string(),
            ));
        }

        if !pricing::fits_capacity(new.weight, new.service_class) {
            return Err(EngineError::CapacityExceeded(format!(
                "weight exceeds {} container capacity",
                new.service_class
            )));
        }

        // Inventory gate: the category must cover the shipment's weight.
        let available = self
            .store()
            .document()
            .inventory
            .iter()
            .find(|i| i.category == new.category)
            .map(|i| i.quantity)
            .unwrap_or(0.0);
        if available < new.weight {
            return Err(EngineError::InsufficientStock(format!(
                "insufficient inventory for {}. Available: {} kg",
                new.category, available
            )));
        }

        let dist = distance::resolve(destination);
        let price = pricing::price(dist, new.service_class);
        let estimated_delivery_days = distance::estimate_delivery_days(dist, new.service_class);
        let destination_country = new
            .destination_country
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| {
                destination
                    .rsplit(',')
                    .next()
                    .unwrap_or(destination)
                    .trim()
                    .to_string()
            });

        let doc = self.store_mut().document_mut();
        let shipment = Shipment {
            id: next_id(doc.shipments.iter().map(|s| s.id)),
            customer_id,
            customer_name: customer_name.to_string(),
            product_name: product_name.to_string(),
            category: new.category,
            weight: new.weight,
            destination: destination.to_string(),
            destination_country,
            distance: dist,
            service_class: new.service_class,
            price,
            estimated_delivery_days,
            status: ShipmentStatus::Pending,
            container_id: None,
            created_at: chrono::Utc::now(),
        };
        doc.shipments.push(shipment.clone());

        if let Some(item) = doc.inventory.iter_mut().find(|i| i.category == new.category) {
            item.quantity -= new.weight;
            item.status = InventoryItem::status_for(item.quantity, item.min_stock);
            item.last_updated = chrono::Utc::now();
        }

        self.store().persist()?;
        Ok(shipment)
    }

    /// Public tracking by shipment id.
    pub fn track_shipment(&self, id: u64) -> ResultEngine<TrackingInfo> {
        let doc = self.store().document();
        let shipment = doc
            .shipments
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(format!("shipment {id}")))?;

        let container = shipment
            .container_id
            .and_then(|cid| doc.containers.iter().find(|c| c.id == cid).cloned());

        Ok(TrackingInfo {
            current_location: shipment.status.location(),
            shipment,
            container,
        })
    }

    /// All shipments, optionally filtered by status, newest first.
    pub fn list_shipments(&self, status: Option<ShipmentStatus>) -> Vec<Shipment> {
        let mut shipments: Vec<Shipment> = self
            .store()
            .document()
            .shipments
            .iter()
            .filter(|s| status.is_none_or(|wanted| s.status == wanted))
            .cloned()
            .collect();
        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }

    /// Shipments belonging to one customer, newest first.
    pub fn customer_shipments(&self, customer_id: u64) -> Vec<Shipment> {
        let mut shipments: Vec<Shipment> = self
            .store()
            .document()
            .shipments
            .iter()
            .filter(|s| s.customer_id == customer_id)
            .cloned()
            .collect();
        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }

    /// Set a shipment's status (admin operation).
    pub fn update_shipment_status(
        &mut self,
        id: u64,
        status: ShipmentStatus,
    ) -> ResultEngine<Shipment> {
        let doc = self.store_mut().document_mut();
        let shipment = doc
            .shipments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::NotFound(format!("shipment {id}")))?;

        shipment.status = status;
        let updated = shipment.clone();
        self.store().persist()?;
        Ok(updated)
    }
}
