use asset_architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::vo::{TicketPriority, TicketStatus};

/// A reported issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// Reporter.
    pub user_id: i32,
    /// Technician working on it.
    pub assigned_to: Option<i32>,
    pub workstation_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AggregateRoot for Ticket {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub reporter_name: Option<String>,
    pub assignee_name: Option<String>,
    pub workstation_inventory_number: Option<String>,
}
