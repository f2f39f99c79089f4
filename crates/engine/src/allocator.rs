//! Container allocation: First-Fit Decreasing bin packing.
//!
//! Pending shipments are sorted by weight, largest first, and each one goes
//! into the first available container with enough remaining capacity. The
//! heuristic is O(n·m) and deliberately not optimal; downstream consumers
//! rely on its exact assignment order, so do not swap it for a solver.
use serde::{Deserialize, Serialize};

use crate::container::{Container, ContainerStatus};
use crate::error::EngineError;
use crate::financials::round2;
use crate::shipment::{Shipment, ShipmentStatus};

/// One shipment placed into one container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub shipment_id: u64,
    pub container_id: u64,
    pub weight: f64,
}

/// State of a container that received at least one shipment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackedContainer {
    pub id: u64,
    pub capacity: f64,
    pub current_load: f64,
    pub remaining_capacity: f64,
    pub shipment_count: usize,
    /// Utilization in percent, two decimals.
    pub utilization: f64,
    pub status: ContainerStatus,
}

/// Result of one allocator run.
///
/// A run with unassigned shipments is still a success; only an empty input
/// (no pending shipments or no available containers) is an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackingPlan {
    pub assignments: Vec<Assignment>,
    pub containers: Vec<PackedContainer>,
    pub unassigned: Vec<u64>,
}

impl PackingPlan {
    pub fn message(&self) -> String {
        format!(
            "Optimized {} shipments into {} containers",
            self.assignments.len(),
            self.containers.len()
        )
    }
}

struct Bin {
    id: u64,
    capacity: f64,
    current_load: f64,
    remaining: f64,
    shipment_count: usize,
}

/// Run First-Fit Decreasing over the given shipments and containers.
///
/// Only shipments with status `Pending` and containers with status
/// `Available` participate. The input container order is preserved;
/// shipments are stably sorted by descending weight so equal weights keep
/// their original relative order.
pub fn pack(shipments: &[Shipment], containers: &[Container]) -> Result<PackingPlan, EngineError> {
    let mut pending: Vec<&Shipment> = shipments
        .iter()
        .filter(|s| s.status == ShipmentStatus::Pending)
        .collect();

    if pending.is_empty() {
        return Err(EngineError::NothingToOptimize(
            "no pending shipments to optimize".to_string(),
        ));
    }

    let mut bins: Vec<Bin> = containers
        .iter()
        .filter(|c| c.status == ContainerStatus::Available)
        .map(|c| Bin {
            id: c.id,
            capacity: c.capacity,
            current_load: c.current_load,
            remaining: c.remaining_capacity(),
            shipment_count: 0,
        })
        .collect();

    if bins.is_empty() {
        return Err(EngineError::NothingToOptimize(
            "no available containers".to_string(),
        ));
    }

    // Largest first; sort_by is stable so ties keep input order.
    pending.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut assignments = Vec::new();
    let mut unassigned = Vec::new();

    for shipment in pending {
        if shipment.weight <= 0.0 {
            continue;
        }

        let fit = bins.iter_mut().find(|bin| shipment.weight <= bin.remaining);
        match fit {
            Some(bin) => {
                bin.remaining = round2(bin.remaining - shipment.weight);
                bin.current_load = round2(bin.current_load + shipment.weight);
                bin.shipment_count += 1;
                assignments.push(Assignment {
                    shipment_id: shipment.id,
                    container_id: bin.id,
                    weight: shipment.weight,
                });
            }
            None => unassigned.push(shipment.id),
        }
    }

    let containers = bins
        .into_iter()
        .filter(|bin| bin.shipment_count > 0)
        .map(|bin| {
            let capacity = bin.capacity.max(0.0);
            let current_load = bin.current_load.min(capacity);
            let utilization = if capacity <= 0.0 {
                0.0
            } else {
                round2(current_load / capacity * 100.0)
            };

            PackedContainer {
                id: bin.id,
                capacity,
                current_load,
                remaining_capacity: round2(capacity - current_load).max(0.0),
                shipment_count: bin.shipment_count,
                utilization,
                status: ContainerStatus::ReadyForTransport,
            }
        })
        .collect();

    Ok(PackingPlan {
        assignments,
        containers,
        unassigned,
    })
}

/// Average utilization in percent across in-use containers (two decimals).
/// Containers still `Available` are ignored; a zero-capacity container
/// counts in the average, contributing 0%.
pub fn average_utilization(containers: &[Container]) -> f64 {
    let in_use: Vec<&Container> = containers
        .iter()
        .filter(|c| c.status.is_in_use())
        .collect();

    if in_use.is_empty() {
        return 0.0;
    }

    let total: f64 = in_use.iter().map(|c| c.utilization()).sum();
    round2(total / in_use.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerClass;
    use crate::shipment::{ProductCategory, ServiceClass};
    use chrono::Utc;

    fn shipment(id: u64, weight: f64, status: ShipmentStatus) -> Shipment {
        Shipment {
            id,
            customer_id: 1,
            customer_name: "test".to_string(),
            product_name: "Blueberries".to_string(),
            category: ProductCategory::Fresh,
            weight,
            destination: "Berlin, Germany".to_string(),
            destination_country: "Germany".to_string(),
            distance: 3000.0,
            service_class: ServiceClass::Large,
            price: 0.0,
            estimated_delivery_days: 9,
            status,
            container_id: None,
            created_at: Utc::now(),
        }
    }

    fn container(id: u64, capacity: f64, load: f64, status: ContainerStatus) -> Container {
        Container {
            id,
            class: ContainerClass::Large,
            capacity,
            current_load: load,
            status,
        }
    }

    #[test]
    fn first_fit_decreasing_assignment_order() {
        let shipments = vec![
            shipment(1, 8000.0, ShipmentStatus::Pending),
            shipment(2, 3000.0, ShipmentStatus::Pending),
            shipment(3, 1000.0, ShipmentStatus::Pending),
        ];
        let containers = vec![
            container(1, 10000.0, 0.0, ContainerStatus::Available),
            container(2, 5000.0, 0.0, ContainerStatus::Available),
        ];

        let plan = pack(&shipments, &containers).unwrap();

        // 8000 → container 1 (rem 2000), 3000 → container 2 (doesn't fit
        // 1's remaining 2000), 1000 → container 1 again (first fit).
        assert_eq!(
            plan.assignments,
            vec![
                Assignment {
                    shipment_id: 1,
                    container_id: 1,
                    weight: 8000.0
                },
                Assignment {
                    shipment_id: 2,
                    container_id: 2,
                    weight: 3000.0
                },
                Assignment {
                    shipment_id: 3,
                    container_id: 1,
                    weight: 1000.0
                },
            ]
        );
        assert!(plan.unassigned.is_empty());
        assert_eq!(plan.containers.len(), 2);
        assert!(
            plan.containers
                .iter()
                .all(|c| c.status == ContainerStatus::ReadyForTransport)
        );
    }

    #[test]
    fn sorting_is_decreasing_regardless_of_input_order() {
        let shipments = vec![
            shipment(1, 1000.0, ShipmentStatus::Pending),
            shipment(2, 8000.0, ShipmentStatus::Pending),
            shipment(3, 3000.0, ShipmentStatus::Pending),
        ];
        let containers = vec![
            container(1, 10000.0, 0.0, ContainerStatus::Available),
            container(2, 5000.0, 0.0, ContainerStatus::Available),
        ];

        let plan = pack(&shipments, &containers).unwrap();
        let order: Vec<u64> = plan.assignments.iter().map(|a| a.shipment_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let shipments = vec![
            shipment(1, 1000.0, ShipmentStatus::Pending),
            shipment(2, 1000.0, ShipmentStatus::Pending),
            shipment(3, 1000.0, ShipmentStatus::Pending),
        ];
        let containers = vec![container(1, 5000.0, 0.0, ContainerStatus::Available)];

        let plan = pack(&shipments, &containers).unwrap();
        let order: Vec<u64> = plan.assignments.iter().map(|a| a.shipment_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn misfit_is_reported_not_fatal() {
        let shipments = vec![shipment(7, 600.0, ShipmentStatus::Pending)];
        let containers = vec![container(1, 500.0, 0.0, ContainerStatus::Available)];

        let plan = pack(&shipments, &containers).unwrap();
        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unassigned, vec![7]);
        // The container got nothing, so it keeps its prior status.
        assert!(plan.containers.is_empty());
    }

    #[test]
    fn non_pending_shipments_and_busy_containers_are_ignored() {
        let shipments = vec![
            shipment(1, 100.0, ShipmentStatus::Delivered),
            shipment(2, 100.0, ShipmentStatus::Pending),
        ];
        let containers = vec![
            container(1, 1000.0, 0.0, ContainerStatus::InTransit),
            container(2, 1000.0, 0.0, ContainerStatus::Available),
        ];

        let plan = pack(&shipments, &containers).unwrap();
        assert_eq!(plan.assignments.len(), 1);
        assert_eq!(plan.assignments[0].shipment_id, 2);
        assert_eq!(plan.assignments[0].container_id, 2);
    }

    #[test]
    fn no_pending_shipments_is_a_reported_failure() {
        let shipments = vec![shipment(1, 100.0, ShipmentStatus::Ready)];
        let containers = vec![container(1, 1000.0, 0.0, ContainerStatus::Available)];

        let err = pack(&shipments, &containers).unwrap_err();
        assert!(matches!(err, EngineError::NothingToOptimize(_)));
    }

    #[test]
    fn no_available_containers_is_a_reported_failure() {
        let shipments = vec![shipment(1, 100.0, ShipmentStatus::Pending)];
        let containers = vec![container(1, 1000.0, 0.0, ContainerStatus::Delivered)];

        let err = pack(&shipments, &containers).unwrap_err();
        assert!(matches!(err, EngineError::NothingToOptimize(_)));
    }

    #[test]
    fn preloaded_containers_expose_reduced_remaining_capacity() {
        let shipments = vec![shipment(1, 800.0, ShipmentStatus::Pending)];
        let containers = vec![container(1, 1000.0, 400.0, ContainerStatus::Available)];

        let plan = pack(&shipments, &containers).unwrap();
        // 800 does not fit into 1000 - 400.
        assert_eq!(plan.unassigned, vec![1]);

        let shipments = vec![shipment(1, 500.0, ShipmentStatus::Pending)];
        let plan = pack(&shipments, &containers).unwrap();
        assert_eq!(plan.assignments.len(), 1);
        assert_eq!(plan.containers[0].current_load, 900.0);
        assert_eq!(plan.containers[0].remaining_capacity, 100.0);
        assert_eq!(plan.containers[0].utilization, 90.0);
    }

    #[test]
    fn average_utilization_ignores_available_containers() {
        let containers = vec![
            container(1, 1000.0, 500.0, ContainerStatus::ReadyForTransport),
            container(2, 1000.0, 1000.0, ContainerStatus::InTransit),
            container(3, 1000.0, 0.0, ContainerStatus::Available),
        ];
        assert_eq!(average_utilization(&containers), 75.0);
        assert_eq!(average_utilization(&[]), 0.0);
    }
}
