//! Distance resolution and delivery-time estimation.
//!
//! Distances are measured from the company hub in Muğla, Turkey. Known
//! destinations come from a static table; anything else falls back to a
//! country keyword estimate. The resolver is total: it always returns a
//! distance.
use crate::shipment::ServiceClass;

/// The company hub all distances are measured from.
pub const ORIGIN: &str = "Muğla, Turkey";

/// Freight covers roughly this many km per day.
const KM_PER_DAY: f64 = 500.0;

/// Fallback distance for destinations no rule matches.
const DEFAULT_DISTANCE: f64 = 3000.0;

/// Known destinations, "City, Country" → km from Muğla.
const DISTANCES: &[(&str, f64)] = &[
    // Domestic (Turkey)
    ("Istanbul, Turkey", 650.0),
    ("Ankara, Turkey", 520.0),
    ("Izmir, Turkey", 120.0),
    ("Antalya, Turkey", 200.0),
    ("Bodrum, Turkey", 60.0),
    // Europe
    ("Berlin, Germany", 3000.0),
    ("Paris, France", 3200.0),
    ("London, UK", 3500.0),
    ("Rome, Italy", 2100.0),
    ("Madrid, Spain", 3800.0),
    ("Amsterdam, Netherlands", 3300.0),
    ("Vienna, Austria", 2400.0),
    ("Athens, Greece", 800.0),
    ("Sofia, Bulgaria", 1100.0),
    ("Bucharest, Romania", 1400.0),
    // Middle East
    ("Dubai, UAE", 3400.0),
    ("Tel Aviv, Israel", 1200.0),
    ("Cairo, Egypt", 1500.0),
    ("Beirut, Lebanon", 1000.0),
    ("Riyadh, Saudi Arabia", 2800.0),
    // Asia
    ("Mumbai, India", 5500.0),
    ("Shanghai, China", 8500.0),
    ("Tokyo, Japan", 9800.0),
    ("Singapore, Singapore", 9200.0),
    ("Bangkok, Thailand", 7800.0),
    // North America
    ("New York, USA", 9500.0),
    ("Los Angeles, USA", 12000.0),
    ("Chicago, USA", 9800.0),
    ("Toronto, Canada", 9200.0),
    ("Mexico City, Mexico", 11500.0),
];

/// Country keyword fallbacks, matched by substring containment against the
/// lower-cased text after the last comma of the destination.
const COUNTRY_RULES: &[(&str, f64)] = &[
    ("turkey", 300.0),
    ("germany", 3000.0),
    ("france", 3000.0),
    ("uk", 3500.0),
    ("england", 3500.0),
    ("spain", 3800.0),
    ("portugal", 3800.0),
    ("italy", 2100.0),
    ("greece", 800.0),
    ("egypt", 1500.0),
    ("uae", 3400.0),
    ("emirates", 3400.0),
    ("india", 5500.0),
    ("china", 8500.0),
    ("japan", 9800.0),
    ("usa", 10000.0),
    ("united states", 10000.0),
    ("canada", 9200.0),
];

/// Resolve a destination string to a distance in km.
///
/// Lookup order: exact table match, case-insensitive table match, country
/// keyword rule, default. Never fails.
pub fn resolve(destination: &str) -> f64 {
    if let Some((_, km)) = DISTANCES.iter().find(|(city, _)| *city == destination) {
        return *km;
    }

    let lower = destination.to_lowercase();
    if let Some((_, km)) = DISTANCES
        .iter()
        .find(|(city, _)| city.to_lowercase() == lower)
    {
        return *km;
    }

    let country = lower.rsplit(',').next().unwrap_or("").trim().to_string();
    for (keyword, km) in COUNTRY_RULES {
        if country.contains(keyword) {
            return *km;
        }
    }

    DEFAULT_DISTANCE
}

/// All known destinations, sorted.
pub fn destinations() -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = DISTANCES.iter().map(|(city, _)| *city).collect();
    cities.sort_unstable();
    cities
}

/// Estimated delivery time in days: travel days at [`KM_PER_DAY`] plus the
/// processing time of the booked class (Small 1, Medium 2, Large 3).
pub fn estimate_delivery_days(distance_km: f64, class: ServiceClass) -> u32 {
    let travel_days = (distance_km / KM_PER_DAY).ceil().max(0.0) as u32;
    let processing_days = match class {
        ServiceClass::Small => 1,
        ServiceClass::Medium => 2,
        ServiceClass::Large => 3,
    };
    travel_days + processing_days
}
