use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::traits::CityRanker;

// Dispatch priority table. Lower tier ships first. Keys are the normalized
// (uppercase) city names produced by the loader.
static CITY_TIERS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    let mut tiers = HashMap::new();

    // NCR and top metros
    tiers.insert("DELHI", 0);
    tiers.insert("NOIDA", 1);
    tiers.insert("BANGALORE", 2);
    tiers.insert("HYDERABAD", 3);

    // State capitals
    for city in [
        "JAIPUR",
        "LUCKNOW",
        "BHOPAL",
        "GANDHINAGAR",
        "RAIPUR",
        "SHIMLA",
        "SRINAGAR",
    ] {
        tiers.insert(city, 4);
    }

    // Major cities
    for city in [
        "PUNE",
        "AHMEDABAD",
        "GURUGRAM",
        "CHANDIGARH",
        "LUDHIANA",
        "AMRITSAR",
        "KANPUR",
        "NAGPUR",
        "SURAT",
        "INDORE",
        "VISAKHAPATNAM",
        "VIJAYAWADA",
    ] {
        tiers.insert(city, 5);
    }

    tiers
});

// One bucket below the lowest listed tier, so unlisted cities never
// interleave with ranked ones.
static DEFAULT_TIER: Lazy<u32> =
    Lazy::new(|| CITY_TIERS.values().copied().max().map_or(0, |max| max + 1));

/// Ranker backed by the compiled-in priority table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCityRanker;

impl CityRanker for StaticCityRanker {
    fn lookup(&self, city: &str) -> Option<u32> {
        CITY_TIERS.get(city).copied()
    }

    fn default_tier(&self) -> u32 {
        *DEFAULT_TIER
    }
}
