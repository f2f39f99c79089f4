//! The operations report: one composite snapshot for the admin dashboard.
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ResultEngine;
use crate::financials::round2;
use crate::report::{self, CategorySales, InventoryLevel, RouteCount, StatusCounts};

use super::financials::FinancialReport;
use super::{ContainerStats, Engine, FleetStats};

/// The whole business at a glance.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub financials: FinancialReport,
    pub shipments: StatusCounts,
    pub containers: ContainerStats,
    pub popular_routes: Vec<RouteCount>,
    /// Combined distance of all shipments, km.
    pub total_distance: f64,
    pub sales_by_category: Vec<CategorySales>,
    pub inventory: Vec<InventoryLevel>,
    pub fleet: FleetStats,
    pub generated_at: DateTime<Utc>,
}

impl Engine {
    /// Assemble the report. Financials are recomputed from the ledgers (and
    /// the snapshot refreshed) rather than read from the stored copy.
    pub fn generate_report(&mut self) -> ResultEngine<Report> {
        let financials = self.financial_summary()?;

        let doc = self.store().document();
        let shipments = report::status_counts(&doc.shipments);
        let popular_routes = report::popular_routes(&doc.shipments);
        let total_distance = round2(doc.shipments.iter().map(|s| s.distance).sum());
        let sales_by_category = report::category_sales(&doc.shipments);
        let inventory = report::inventory_levels(&doc.inventory);

        let (_, containers) = self.list_containers();
        let (_, fleet) = self.list_fleet();

        Ok(Report {
            financials,
            shipments,
            containers,
            popular_routes,
            total_distance,
            sales_by_category,
            inventory,
            fleet,
            generated_at: Utc::now(),
        })
    }
}
