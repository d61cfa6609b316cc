use std::collections::{BTreeMap, BTreeSet};

use crate::domain::model::{normalize_text, trim_text, Retailer};
use crate::domain::traits::CityRanker;
use crate::usecase::event::{emit, AppEvent, EventSink};
use crate::usecase::stats::SortStats;

/// Normalize records, tally tiers, then stable-sort by (tier, city, name).
/// Input order is preserved for records with identical keys.
pub fn sort_retailers(
    records: Vec<Retailer>,
    ranker: &dyn CityRanker,
    sink: Option<&dyn EventSink>,
) -> (Vec<Retailer>, SortStats) {
    let mut stats = SortStats {
        rows_read: records.len(),
        ..SortStats::default()
    };

    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "normalize".into(),
        },
    );
    let mut records = normalize_records(records);
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "normalize".into(),
        },
    );

    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "sort".into(),
        },
    );

    let mut distinct_cities: BTreeSet<&str> = BTreeSet::new();
    let mut unlisted: BTreeMap<String, usize> = BTreeMap::new();
    for record in &records {
        distinct_cities.insert(record.city.as_str());
        match ranker.lookup(&record.city) {
            Some(_) => stats.listed_city_records += 1,
            None => {
                stats.default_tier_records += 1;
                *unlisted.entry(record.city.clone()).or_insert(0) += 1;
            }
        }
    }
    stats.distinct_cities = distinct_cities.len();

    // BTreeMap iteration keeps the event order deterministic across runs.
    for (city, count) in &unlisted {
        emit(
            sink,
            AppEvent::UnknownCity {
                city: city.clone(),
                records: *count,
            },
        );
    }
    emit(
        sink,
        AppEvent::TiersAssigned {
            listed: stats.listed_city_records,
            defaulted: stats.default_tier_records,
            default_tier: ranker.default_tier(),
        },
    );

    records.sort_by_cached_key(|record| record.sort_key(ranker));

    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "sort".into(),
        },
    );

    (records, stats)
}

pub fn normalize_records(records: Vec<Retailer>) -> Vec<Retailer> {
    records
        .into_iter()
        .map(|record| Retailer {
            sap_code: trim_text(&record.sap_code),
            name: normalize_text(&record.name),
            area: normalize_text(&record.area),
            city: normalize_text(&record.city),
            map_link: trim_text(&record.map_link),
            contact: trim_text(&record.contact),
        })
        .collect()
}
