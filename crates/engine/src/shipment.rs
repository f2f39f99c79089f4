//! The module contains the representation of a shipment.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::container::ContainerClass;

/// Product category of a shipment, also the key of the inventory rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Fresh,
    Frozen,
    Organic,
}

impl ProductCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::Frozen => "Frozen",
            Self::Organic => "Organic",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The container class a customer books for a shipment.
///
/// This is a *service* class: it fixes the per-km rate and the maximum
/// accepted weight. It is distinct from [`ContainerClass`], the class of a
/// physical bin in the yard; the two share names but are mapped explicitly
/// via [`ServiceClass::container_class`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceClass {
    Small,
    Medium,
    Large,
}

impl ServiceClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// The physical container class that serves this booking class.
    pub fn container_class(self) -> ContainerClass {
        match self {
            Self::Small => ContainerClass::Small,
            Self::Medium => ContainerClass::Medium,
            Self::Large => ContainerClass::Large,
        }
    }
}

impl std::fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a shipment. Progression is monotonic by convention
/// (Pending → Ready → In Transit → Delivered) but not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Pending,
    Ready,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Ready => "Ready",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }

    /// Human-readable location shown by the public tracking endpoint.
    pub fn location(self) -> &'static str {
        match self {
            Self::Pending => "Muğla Warehouse",
            Self::Ready => "Loading Dock",
            Self::InTransit => "En Route",
            Self::Delivered => "Destination",
        }
    }
}

/// A customer shipment.
///
/// `distance`, `price` and `estimated_delivery_days` are derived at creation
/// time from the destination and the booked service class; `container_id` is
/// set by the allocator when the shipment is packed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shipment {
    pub id: u64,
    pub customer_id: u64,
    pub customer_name: String,
    pub product_name: String,
    pub category: ProductCategory,
    /// Weight in kg, always positive.
    pub weight: f64,
    pub destination: String,
    pub destination_country: String,
    /// Distance from the Muğla hub in km.
    pub distance: f64,
    pub service_class: ServiceClass,
    pub price: f64,
    pub estimated_delivery_days: u32,
    pub status: ShipmentStatus,
    pub container_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}
