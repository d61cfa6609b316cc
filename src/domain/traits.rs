pub trait CityRanker {
    fn lookup(&self, city: &str) -> Option<u32>;

    fn default_tier(&self) -> u32;

    fn tier(&self, city: &str) -> u32 {
        self.lookup(city).unwrap_or_else(|| self.default_tier())
    }
}
