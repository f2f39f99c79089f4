//! The module contains the representation of a physical container.
use serde::{Deserialize, Serialize};

/// Class of a physical container in the yard.
///
/// Each class has a fixed nominal capacity used when seeding the yard. Not
/// to be confused with the booking class of a shipment
/// ([`crate::ServiceClass`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerClass {
    Small,
    Medium,
    Large,
}

impl ContainerClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Nominal capacity in kg of a freshly seeded container.
    pub fn nominal_capacity(self) -> f64 {
        match self {
            Self::Small => 2000.0,
            Self::Medium => 5000.0,
            Self::Large => 10000.0,
        }
    }
}

impl std::fmt::Display for ContainerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a container. Only the allocator moves a container out of
/// `Available`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerStatus {
    Available,
    #[serde(rename = "Ready for Transport")]
    ReadyForTransport,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl ContainerStatus {
    /// A container counts as in use once the allocator has touched it.
    pub fn is_in_use(self) -> bool {
        matches!(
            self,
            Self::ReadyForTransport | Self::InTransit | Self::Delivered
        )
    }
}

/// A physical container.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Container {
    pub id: u64,
    pub class: ContainerClass,
    /// Capacity in kg.
    pub capacity: f64,
    /// Load already committed to this container, in kg.
    pub current_load: f64,
    pub status: ContainerStatus,
}

impl Container {
    /// Remaining capacity in kg, never negative.
    pub fn remaining_capacity(&self) -> f64 {
        (self.capacity - self.current_load).max(0.0)
    }

    /// Utilization in percent, rounded to two decimals. A container with
    /// zero capacity reports 0 instead of dividing by zero.
    pub fn utilization(&self) -> f64 {
        if self.capacity <= 0.0 {
            return 0.0;
        }
        let load = self.current_load.min(self.capacity);
        crate::financials::round2(load / self.capacity * 100.0)
    }
}
