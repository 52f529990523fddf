use serde::Deserialize;

use super::{RepairStatus, TicketStatus};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkstationFilter {
    /// Substring matched against inventory number, IP, MAC, OS and responsible name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoftwareFilter {
    pub workstation_id: Option<i32>,
    /// Substring of the software name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub workstation_id: Option<i32>,
    pub assigned_to: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepairFilter {
    pub status: Option<RepairStatus>,
    pub workstation_id: Option<i32>,
}
