//! Financial summary, recomputed from the ledgers on every request.
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ResultEngine;
use crate::financials::{self, Breakdown};
use crate::shipment::ShipmentStatus;
use crate::store::FinancialSnapshot;

use super::Engine;

/// Where the numbers came from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FinancialSourceStats {
    pub delivered_shipments: usize,
    pub logged_trips: usize,
}

/// The persisted breakdown plus its sources.
#[derive(Clone, Debug, Serialize)]
pub struct FinancialReport {
    #[serde(flatten)]
    pub breakdown: Breakdown,
    pub sources: FinancialSourceStats,
    pub updated_at: DateTime<Utc>,
}

impl Engine {
    /// Recompute the financial breakdown from the ledgers and persist the
    /// snapshot. Revenue counts only delivered shipments; expenses come
    /// from the trip ledger. Recomputing over unchanged ledgers yields the
    /// identical breakdown.
    pub fn financial_summary(&mut self) -> ResultEngine<FinancialReport> {
        let (breakdown, sources) = {
            let doc = self.store().document();
            let delivered: Vec<f64> = doc
                .shipments
                .iter()
                .filter(|s| s.status == ShipmentStatus::Delivered)
                .map(|s| s.price)
                .collect();
            let revenue: f64 = delivered.iter().sum();
            let expenses: f64 = doc.fleet_trips.iter().map(|t| t.total_expense).sum();

            (
                financials::summarize(revenue, expenses),
                FinancialSourceStats {
                    delivered_shipments: delivered.len(),
                    logged_trips: doc.fleet_trips.len(),
                },
            )
        };

        let snapshot = self.store_mut().update_financials(FinancialSnapshot {
            total_revenue: breakdown.total_revenue,
            total_expenses: breakdown.total_expenses,
            net_income: breakdown.net_income,
            tax: breakdown.tax,
            profit_after_tax: breakdown.profit_after_tax,
            updated_at: Utc::now(),
        })?;

        Ok(FinancialReport {
            breakdown,
            sources,
            updated_at: snapshot.updated_at,
        })
    }

    /// Explicit recomputation. Same work as [`financial_summary`]; exposed
    /// separately so admins can force a refresh after bulk edits.
    ///
    /// [`financial_summary`]: Engine::financial_summary
    pub fn recalculate_financials(&mut self) -> ResultEngine<FinancialReport> {
        self.financial_summary()
    }
}
