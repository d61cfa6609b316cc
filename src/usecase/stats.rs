use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SortStats {
    pub rows_read: usize,
    pub listed_city_records: usize,
    pub default_tier_records: usize,
    pub distinct_cities: usize,
    pub records_written: usize,
}

impl SortStats {
    // One greppable line for scripts; keys stay short on purpose.
    pub fn summary_line(&self) -> String {
        format!(
            "summary: rows_read={} listed={} defaulted={} distinct_cities={} written={}",
            self.rows_read,
            self.listed_city_records,
            self.default_tier_records,
            self.distinct_cities,
            self.records_written
        )
    }
}
