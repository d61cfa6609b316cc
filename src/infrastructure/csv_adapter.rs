use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};

use crate::domain::model::Retailer;

// Column headers exactly as the all-region report writes them. Matching is
// case sensitive; a missing or renamed column reads as empty instead of
// failing the run.
pub const COL_SAP_CODE: &str = "SAP Code";
pub const COL_NAME: &str = "Retailer Name";
pub const COL_LOCATION: &str = "Location";
pub const COL_MAP_LINK: &str = "Google Map Link";
pub const COL_CONTACT: &str = "Contact Number";

pub fn read_retailers_file(path: &str) -> Result<Vec<Retailer>> {
    let file =
        File::open(path).with_context(|| format!("failed to open source report {}", path))?;
    parse_retailers(file).with_context(|| format!("failed to parse source report {}", path))
}

/// Parse report rows into records. Cell values are taken verbatim here;
/// trimming and case folding happen in the sort workflow. Both `area` and
/// `city` come from the single Location column.
pub fn parse_retailers<R: Read>(reader: R) -> Result<Vec<Retailer>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let index_of = |name: &str| headers.iter().position(|header| header == name);

    let sap_code_idx = index_of(COL_SAP_CODE);
    let name_idx = index_of(COL_NAME);
    let location_idx = index_of(COL_LOCATION);
    let map_link_idx = index_of(COL_MAP_LINK);
    let contact_idx = index_of(COL_CONTACT);

    let mut retailers = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let location = field(&record, location_idx).to_string();
        retailers.push(Retailer {
            sap_code: field(&record, sap_code_idx).to_string(),
            name: field(&record, name_idx).to_string(),
            area: location.clone(),
            city: location,
            map_link: field(&record, map_link_idx).to_string(),
            contact: field(&record, contact_idx).to_string(),
        });
    }

    Ok(retailers)
}

// Short rows under flexible parsing simply have no cell at this index.
fn field(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}
