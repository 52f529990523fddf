use asset_architecture::model::AggregateRoot;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::vo::RepairStatus;

/// A maintenance action on a workstation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repair {
    pub id: i32,
    pub description: String,
    pub workstation_id: i32,
    pub technician_id: Option<i32>,
    pub repair_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub cost: Option<Decimal>,
    pub status: RepairStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AggregateRoot for Repair {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairView {
    #[serde(flatten)]
    pub repair: Repair,
    pub workstation_inventory_number: Option<String>,
    pub technician_name: Option<String>,
}
