use asset_architecture::model::AggregateRoot;
use serde::Serialize;

/// A tracked computer asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workstation {
    pub id: i32,
    pub inventory_number: String,
    pub os_name: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub department_id: Option<i32>,
    /// User accountable for the workstation.
    pub responsible_id: Option<i32>,
    /// Free text, e.g. `operational`, `maintenance`, `repair`, `decommissioned`.
    pub status: String,
    pub notes: Option<String>,
}

impl AggregateRoot for Workstation {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkstationView {
    #[serde(flatten)]
    pub workstation: Workstation,
    pub department_name: Option<String>,
    pub responsible_name: Option<String>,
}
