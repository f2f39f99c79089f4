use serde::{Deserialize, Serialize};

/// Product category on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Fresh,
    Frozen,
    Organic,
}

impl Category {
    /// Returns the canonical category string used by the engine.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::Frozen => "Frozen",
            Self::Organic => "Organic",
        }
    }
}

/// Booked container class on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceClass {
    Small,
    Medium,
    Large,
}

/// Account role on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

/// Shipment lifecycle status on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Pending,
    Ready,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

pub mod auth {
    use super::*;

    /// Request body for registering an account. The role defaults to
    /// customer when absent.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RegisterUser {
        pub username: String,
        pub email: String,
        pub password: String,
        #[serde(default)]
        pub role: Role,
    }
}

pub mod shipment {
    use super::*;

    /// Request body for booking a shipment.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ShipmentNew {
        pub product_name: String,
        pub category: Category,
        /// Weight in kg.
        pub weight: f64,
        /// Destination as "City, Country".
        pub destination: String,
        pub destination_country: Option<String>,
        pub service_class: ServiceClass,
    }

    /// Query string for the admin shipment listing.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ShipmentListQuery {
        pub status: Option<ShipmentStatus>,
    }

    /// Request body for updating a shipment's status.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct StatusUpdate {
        pub status: ShipmentStatus,
    }
}

pub mod fleet {
    use super::*;

    /// Request body for logging a trip expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub vehicle_id: u64,
        /// Trip distance in km, must be positive.
        pub distance: f64,
        pub shipment_id: Option<u64>,
    }
}

pub mod inventory {
    use super::*;

    /// Request body for restocking a category.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RestockNew {
        /// Quantity to add in kg, must be positive.
        pub quantity: f64,
    }
}
