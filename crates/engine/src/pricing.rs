//! Shipment pricing.
//!
//! The price of a shipment is `distance × rate-per-km` where the rate is
//! fixed by the booked service class. The same table carries the maximum
//! weight a class accepts, which gates shipment creation.
use crate::shipment::ServiceClass;

/// Rate and weight limit of a service class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassSpec {
    /// Maximum accepted weight in kg.
    pub capacity: f64,
    /// Rate in ₺ per km.
    pub rate_per_km: f64,
}

impl ServiceClass {
    /// The pricing spec of this class.
    pub fn spec(self) -> ClassSpec {
        match self {
            Self::Small => ClassSpec {
                capacity: 2000.0,
                rate_per_km: 5.0,
            },
            Self::Medium => ClassSpec {
                capacity: 5000.0,
                rate_per_km: 8.0,
            },
            Self::Large => ClassSpec {
                capacity: 10000.0,
                rate_per_km: 12.0,
            },
        }
    }
}

/// Total price in ₺ for a shipment over `distance_km` with the given class.
pub fn price(distance_km: f64, class: ServiceClass) -> f64 {
    distance_km * class.spec().rate_per_km
}

/// Whether `weight_kg` fits the weight limit of the class. This is a hard
/// business constraint, not advisory.
pub fn fits_capacity(weight_kg: f64, class: ServiceClass) -> bool {
    weight_kg <= class.spec().capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_distance_times_rate() {
        assert_eq!(price(1000.0, ServiceClass::Medium), 8000.0);
        assert_eq!(price(0.0, ServiceClass::Small), 0.0);
        assert_eq!(price(650.0, ServiceClass::Large), 7800.0);
    }

    #[test]
    fn capacity_limits_per_class() {
        assert!(fits_capacity(2000.0, ServiceClass::Small));
        assert!(!fits_capacity(2000.1, ServiceClass::Small));
        assert!(fits_capacity(5000.0, ServiceClass::Medium));
        assert!(!fits_capacity(10000.5, ServiceClass::Large));
    }
}
