//! Fleet listing and the trip expense ledger.
use serde::Serialize;

use crate::financials::round2;
use crate::fleet::{self, FleetTrip, Vehicle, VehicleKind};
use crate::store::next_id;
use crate::{EngineError, ResultEngine};

use super::Engine;

/// Fleet-wide statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub ships: usize,
    pub trucks: usize,
    /// Combined load capacity in kg.
    pub total_capacity: f64,
}

impl Engine {
    /// All vehicles plus fleet statistics.
    pub fn list_fleet(&self) -> (Vec<Vehicle>, FleetStats) {
        let fleet = self.store().document().fleet.clone();
        let stats = FleetStats {
            total: fleet.len(),
            ships: fleet.iter().filter(|v| v.kind == VehicleKind::Ship).count(),
            trucks: fleet
                .iter()
                .filter(|v| v.kind == VehicleKind::Truck)
                .count(),
            total_capacity: fleet.iter().map(|v| v.capacity).sum(),
        };
        (fleet, stats)
    }

    /// One vehicle together with its logged trips, newest first.
    pub fn vehicle_detail(&self, id: u64) -> ResultEngine<(Vehicle, Vec<FleetTrip>)> {
        let doc = self.store().document();
        let vehicle = doc
            .fleet
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(format!("vehicle {id}")))?;

        let mut trips: Vec<FleetTrip> = doc
            .fleet_trips
            .iter()
            .filter(|t| t.vehicle_id == id)
            .cloned()
            .collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok((vehicle, trips))
    }

    /// Compute the expense of a trip and append it to the ledger.
    pub fn log_trip_expense(
        &mut self,
        vehicle_id: u64,
        distance: f64,
        shipment_id: Option<u64>,
    ) -> ResultEngine<FleetTrip> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(EngineError::Validation(
                "distance must be a positive number".to_string(),
            ));
        }

        let vehicle = self
            .store()
            .document()
            .fleet
            .iter()
            .find(|v| v.id == vehicle_id)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(format!("vehicle {vehicle_id}")))?;

        let expense = fleet::trip_expense(&vehicle, distance);

        let doc = self.store_mut().document_mut();
        let trip = FleetTrip {
            id: next_id(doc.fleet_trips.iter().map(|t| t.id)),
            vehicle_id,
            distance,
            fuel_expense: round2(expense.fuel_expense),
            crew_expense: round2(expense.crew_expense),
            maintenance_expense: round2(expense.maintenance_expense),
            total_expense: round2(expense.total_expense),
            shipment_id,
            created_at: chrono::Utc::now(),
        };
        doc.fleet_trips.push(trip.clone());
        self.store().persist()?;
        Ok(trip)
    }
}
