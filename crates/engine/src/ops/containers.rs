//! Container yard operations.
use serde::Serialize;

use crate::allocator::{self, PackingPlan};
use crate::container::{Container, ContainerStatus};
use crate::shipment::{Shipment, ShipmentStatus};
use crate::{EngineError, ResultEngine, financials::round2};

use super::Engine;

/// Yard-wide container statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContainerStats {
    pub total: usize,
    pub available: usize,
    pub in_use: usize,
    /// Average utilization in percent across in-use containers.
    pub average_utilization: f64,
}

/// One container together with the shipments loaded into it.
#[derive(Clone, Debug, Serialize)]
pub struct ContainerDetail {
    pub container: Container,
    pub shipments: Vec<Shipment>,
    pub remaining_capacity: f64,
    pub utilization: f64,
}

impl Engine {
    /// All containers plus yard statistics.
    pub fn list_containers(&self) -> (Vec<Container>, ContainerStats) {
        let containers = self.store().document().containers.clone();
        let stats = ContainerStats {
            total: containers.len(),
            available: containers
                .iter()
                .filter(|c| c.status == ContainerStatus::Available)
                .count(),
            in_use: containers.iter().filter(|c| c.status.is_in_use()).count(),
            average_utilization: allocator::average_utilization(&containers),
        };
        (containers, stats)
    }

    /// One container with its shipments.
    pub fn container_detail(&self, id: u64) -> ResultEngine<ContainerDetail> {
        let doc = self.store().document();
        let container = doc
            .containers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(format!("container {id}")))?;

        let shipments: Vec<Shipment> = doc
            .shipments
            .iter()
            .filter(|s| s.container_id == Some(id))
            .cloned()
            .collect();

        Ok(ContainerDetail {
            remaining_capacity: round2(container.remaining_capacity()),
            utilization: container.utilization(),
            container,
            shipments,
        })
    }

    /// Run the allocator over pending shipments and available containers,
    /// then apply the plan: assigned shipments become `Ready` with their
    /// container id set, touched containers take the packed load and move
    /// to `Ready for Transport`. One persisted write for the whole plan.
    pub fn optimize_containers(&mut self) -> ResultEngine<PackingPlan> {
        let plan = {
            let doc = self.store().document();
            allocator::pack(&doc.shipments, &doc.containers)?
        };

        let doc = self.store_mut().document_mut();
        for assignment in &plan.assignments {
            if let Some(shipment) = doc
                .shipments
                .iter_mut()
                .find(|s| s.id == assignment.shipment_id)
            {
                shipment.status = ShipmentStatus::Ready;
                shipment.container_id = Some(assignment.container_id);
            }
        }
        for packed in &plan.containers {
            if let Some(container) = doc.containers.iter_mut().find(|c| c.id == packed.id) {
                container.current_load = packed.current_load;
                container.status = packed.status;
            }
        }

        self.store().persist()?;
        Ok(plan)
    }
}
