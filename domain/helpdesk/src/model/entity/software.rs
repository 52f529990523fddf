use asset_architecture::model::AggregateRoot;
use chrono::NaiveDate;
use serde::Serialize;

/// Software installed on a workstation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Software {
    pub id: i32,
    pub name: String,
    pub version: Option<String>,
    pub license_key: Option<String>,
    pub install_date: Option<NaiveDate>,
    pub workstation_id: i32,
}

impl AggregateRoot for Software {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoftwareView {
    #[serde(flatten)]
    pub software: Software,
    pub workstation_inventory_number: Option<String>,
}
