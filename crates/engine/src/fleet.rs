//! Fleet vehicles and per-trip expense calculation.
//!
//! Trip expense is a closed formula over the vehicle's reference data:
//! `fuel_cost_per_km × distance + crew_cost + maintenance`. The calculator
//! assumes the caller already validated the distance.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Kind of fleet vehicle. Ships serve international routes, trucks domestic
/// ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Ship,
    Truck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    #[serde(rename = "In Use")]
    InUse,
}

/// A fleet vehicle. Static reference data for expense calculation; vehicles
/// are not depleted by trips.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u64,
    pub kind: VehicleKind,
    pub name: String,
    /// Load capacity in kg.
    pub capacity: f64,
    pub fuel_cost_per_km: f64,
    pub crew_cost: f64,
    pub maintenance: f64,
    pub status: VehicleStatus,
}

/// One row of the append-only trip ledger, written per expense calculation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FleetTrip {
    pub id: u64,
    pub vehicle_id: u64,
    pub distance: f64,
    pub fuel_expense: f64,
    pub crew_expense: f64,
    pub maintenance_expense: f64,
    pub total_expense: f64,
    pub shipment_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// Expense breakdown of a single trip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripExpense {
    pub fuel_expense: f64,
    pub crew_expense: f64,
    pub maintenance_expense: f64,
    pub total_expense: f64,
}

/// Compute the expense of driving `vehicle` over `distance_km`.
pub fn trip_expense(vehicle: &Vehicle, distance_km: f64) -> TripExpense {
    let fuel_expense = vehicle.fuel_cost_per_km * distance_km;
    let crew_expense = vehicle.crew_cost;
    let maintenance_expense = vehicle.maintenance;

    TripExpense {
        fuel_expense,
        crew_expense,
        maintenance_expense,
        total_expense: fuel_expense + crew_expense + maintenance_expense,
    }
}

/// Pick the cheapest available vehicle that can carry `weight_kg` to the
/// destination country: ships for international deliveries, trucks for
/// domestic ones.
pub fn select_vehicle<'a>(
    weight_kg: f64,
    destination_country: &str,
    fleet: &'a [Vehicle],
) -> Result<&'a Vehicle, EngineError> {
    let international = !destination_country.to_lowercase().contains("turkey");
    let wanted = if international {
        VehicleKind::Ship
    } else {
        VehicleKind::Truck
    };

    fleet
        .iter()
        .filter(|v| {
            v.kind == wanted && v.capacity >= weight_kg && v.status == VehicleStatus::Available
        })
        .min_by(|a, b| {
            let cost_a = trip_expense(a, 1.0).total_expense;
            let cost_b = trip_expense(b, 1.0).total_expense;
            cost_a.total_cmp(&cost_b)
        })
        .ok_or_else(|| {
            let kind = if international { "ships" } else { "trucks" };
            let scope = if international {
                "international"
            } else {
                "domestic"
            };
            EngineError::NoVehicleAvailable(format!("no available {kind} for {scope} delivery"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: u64, kind: VehicleKind, capacity: f64, fuel: f64) -> Vehicle {
        Vehicle {
            id,
            kind,
            name: format!("vehicle-{id}"),
            capacity,
            fuel_cost_per_km: fuel,
            crew_cost: 500.0,
            maintenance: 300.0,
            status: VehicleStatus::Available,
        }
    }

    #[test]
    fn trip_expense_follows_formula() {
        let v = vehicle(1, VehicleKind::Ship, 20000.0, 2.0);
        let expense = trip_expense(&v, 1000.0);
        assert_eq!(expense.fuel_expense, 2000.0);
        assert_eq!(expense.crew_expense, 500.0);
        assert_eq!(expense.maintenance_expense, 300.0);
        assert_eq!(expense.total_expense, 2800.0);
    }

    #[test]
    fn international_routes_take_the_cheapest_ship() {
        let fleet = vec![
            vehicle(1, VehicleKind::Ship, 20000.0, 3.0),
            vehicle(2, VehicleKind::Ship, 20000.0, 2.0),
            vehicle(3, VehicleKind::Truck, 5000.0, 1.0),
        ];
        let picked = select_vehicle(1000.0, "Germany", &fleet).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn domestic_routes_take_trucks() {
        let fleet = vec![
            vehicle(1, VehicleKind::Ship, 20000.0, 2.0),
            vehicle(2, VehicleKind::Truck, 5000.0, 1.0),
        ];
        let picked = select_vehicle(1000.0, "Turkey", &fleet).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn overweight_or_busy_vehicles_are_skipped() {
        let mut busy = vehicle(1, VehicleKind::Truck, 5000.0, 1.0);
        busy.status = VehicleStatus::InUse;
        let fleet = vec![busy, vehicle(2, VehicleKind::Truck, 500.0, 1.0)];

        let err = select_vehicle(1000.0, "Turkey", &fleet).unwrap_err();
        assert!(matches!(err, EngineError::NoVehicleAvailable(_)));
    }
}
