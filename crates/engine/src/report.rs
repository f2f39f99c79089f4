//! Pure aggregation helpers behind the operations report.
use serde::Serialize;

use crate::financials::round2;
use crate::inventory::{InventoryItem, StockStatus};
use crate::shipment::{ProductCategory, Shipment, ShipmentStatus};

/// How many routes the popularity ranking keeps.
pub const TOP_ROUTES: usize = 5;

/// One route with its shipment count, labelled from the company's origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteCount {
    pub route: String,
    pub count: usize,
}

/// Group shipments by destination and rank by count, descending. The sort
/// is stable, so tied destinations keep first-appearance order; only the
/// top [`TOP_ROUTES`] survive.
pub fn popular_routes(shipments: &[Shipment]) -> Vec<RouteCount> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for shipment in shipments {
        match counts
            .iter_mut()
            .find(|(dest, _)| *dest == shipment.destination)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((&shipment.destination, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_ROUTES);
    counts
        .into_iter()
        .map(|(dest, count)| RouteCount {
            route: format!("Muğla → {dest}"),
            count,
        })
        .collect()
}

/// Shipment counts per lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub ready: usize,
    pub in_transit: usize,
    pub delivered: usize,
}

pub fn status_counts(shipments: &[Shipment]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: shipments.len(),
        ..StatusCounts::default()
    };
    for shipment in shipments {
        match shipment.status {
            ShipmentStatus::Pending => counts.pending += 1,
            ShipmentStatus::Ready => counts.ready += 1,
            ShipmentStatus::InTransit => counts.in_transit += 1,
            ShipmentStatus::Delivered => counts.delivered += 1,
        }
    }
    counts
}

/// Shipment count and total weight sold for one product category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CategorySales {
    pub category: ProductCategory,
    pub shipments: usize,
    pub weight: f64,
}

/// Sales per category. Every category gets a row, even with zero sales.
pub fn category_sales(shipments: &[Shipment]) -> Vec<CategorySales> {
    [
        ProductCategory::Fresh,
        ProductCategory::Frozen,
        ProductCategory::Organic,
    ]
    .iter()
    .map(|&category| {
        let matching = shipments.iter().filter(|s| s.category == category);
        let (count, weight) = matching.fold((0usize, 0.0f64), |(count, weight), s| {
            (count + 1, weight + s.weight)
        });
        CategorySales {
            category,
            shipments: count,
            weight: round2(weight),
        }
    })
    .collect()
}

/// One inventory row expressed against its minimum stock level.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InventoryLevel {
    pub category: ProductCategory,
    pub quantity: f64,
    pub min_stock: f64,
    /// Quantity as a percentage of the minimum, two decimals.
    pub percent_of_minimum: f64,
    pub status: StockStatus,
}

pub fn inventory_levels(inventory: &[InventoryItem]) -> Vec<InventoryLevel> {
    inventory
        .iter()
        .map(|item| InventoryLevel {
            category: item.category,
            quantity: item.quantity,
            min_stock: item.min_stock,
            percent_of_minimum: if item.min_stock <= 0.0 {
                0.0
            } else {
                round2(item.quantity / item.min_stock * 100.0)
            },
            status: item.status,
        })
        .collect()
}
