//! Financial aggregation.
//!
//! A single pure function derives the full breakdown from total revenue and
//! total expenses. All monetary outputs go through [`round2`]
//! (round-half-away-from-zero on cents) so recomputing over unchanged
//! ledgers yields the identical snapshot.
use serde::{Deserialize, Serialize};

/// Corporate tax rate applied to positive net income.
pub const TAX_RATE: f64 = 0.20;

/// Round a monetary amount to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Full financial breakdown for a revenue/expense pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_income: f64,
    pub tax: f64,
    pub tax_rate: f64,
    pub profit_after_tax: f64,
}

/// Derive the breakdown. Tax is 20% of net income and never negative: a
/// loss carries no tax credit, so `profit_after_tax == net_income` when the
/// net is zero or below.
pub fn summarize(total_revenue: f64, total_expenses: f64) -> Breakdown {
    let net_income = total_revenue - total_expenses;
    let tax = if net_income > 0.0 {
        net_income * TAX_RATE
    } else {
        0.0
    };
    let profit_after_tax = net_income - tax;

    Breakdown {
        total_revenue: round2(total_revenue),
        total_expenses: round2(total_expenses),
        net_income: round2(net_income),
        tax: round2(tax),
        tax_rate: TAX_RATE,
        profit_after_tax: round2(profit_after_tax),
    }
}
