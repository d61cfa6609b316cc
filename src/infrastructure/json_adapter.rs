use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::model::Retailer;

// Wire shape of one record in the destination file. Key order follows field
// order here, so consumers see sapCode first.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RetailerDto {
    pub sap_code: String,
    pub name: String,
    pub area: String,
    pub city: String,
    pub map_link: String,
    pub contact: String,
}

impl From<&Retailer> for RetailerDto {
    fn from(retailer: &Retailer) -> Self {
        RetailerDto {
            sap_code: retailer.sap_code.clone(),
            name: retailer.name.clone(),
            area: retailer.area.clone(),
            city: retailer.city.clone(),
            map_link: retailer.map_link.clone(),
            contact: retailer.contact.clone(),
        }
    }
}

impl From<RetailerDto> for Retailer {
    fn from(dto: RetailerDto) -> Self {
        Retailer {
            sap_code: dto.sap_code,
            name: dto.name,
            area: dto.area,
            city: dto.city,
            map_link: dto.map_link,
            contact: dto.contact,
        }
    }
}

// Pretty-printed with two-space indentation and no trailing newline.
pub fn write_retailers_file(path: &str, retailers: &[Retailer]) -> Result<()> {
    let dtos: Vec<RetailerDto> = retailers.iter().map(RetailerDto::from).collect();
    let pretty = serde_json::to_string_pretty(&dtos)?;
    fs::write(path, pretty).with_context(|| format!("failed to write destination file {}", path))
}

pub fn read_retailers_file(path: &str) -> Result<Vec<Retailer>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read destination file {}", path))?;
    let dtos: Vec<RetailerDto> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse destination file {}", path))?;
    Ok(dtos.into_iter().map(Retailer::from).collect())
}
