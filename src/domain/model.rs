use crate::domain::traits::CityRanker;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Retailer {
    pub sap_code: String,
    pub name: String,
    pub area: String,
    pub city: String,
    pub map_link: String,
    pub contact: String,
}

// Derived Ord is declaration order: tier bucket, then city, then name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub tier: u32,
    pub city: String,
    pub name: String,
}

// Normal form for name/area/city. sap_code, map_link and contact are kept
// verbatim apart from trimming.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn trim_text(raw: &str) -> String {
    raw.trim().to_string()
}

impl Retailer {
    pub fn sort_key(&self, ranker: &dyn CityRanker) -> SortKey {
        SortKey {
            tier: ranker.tier(&self.city),
            city: self.city.clone(),
            name: self.name.clone(),
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.name == normalize_text(&self.name)
            && self.area == normalize_text(&self.area)
            && self.city == normalize_text(&self.city)
            && self.sap_code == trim_text(&self.sap_code)
            && self.map_link == trim_text(&self.map_link)
            && self.contact == trim_text(&self.contact)
    }
}
