use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{merge_nullable, merge_nullable_text, merge_text, nullable, optional_text, Required};
use crate::{
    exception::HelpdeskResult,
    model::{
        entity::Ticket,
        vo::{advance_timestamp, TicketPriority, TicketStatus},
    },
};

const TITLE_LIMIT: usize = 80;

/// First non-empty line of the description, cut to a listing-friendly length.
pub fn derive_title(description: &str) -> String {
    description
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .chars()
        .take(TITLE_LIMIT)
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketPayload {
    /// Derived from the description when absent or blank.
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub ticket_type: Option<Option<String>>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub assigned_to: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub workstation_id: Option<Option<i32>>,
}

impl TicketPayload {
    pub fn into_new(self, now: DateTime<Utc>) -> HelpdeskResult<Ticket> {
        Required::default()
            .text("description", &self.description)
            .value("user_id", &self.user_id)
            .check()?;
        let description = self.description.unwrap_or_default().trim().to_string();
        let title = optional_text(self.title).unwrap_or_else(|| derive_title(&description));
        Ok(Ticket {
            id: 0,
            title,
            description,
            ticket_type: optional_text(self.ticket_type.flatten()),
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            user_id: self.user_id.unwrap_or_default(),
            assigned_to: self.assigned_to.flatten(),
            workstation_id: self.workstation_id.flatten(),
            created_at: now,
            updated_at: now,
        })
    }

    /// `created_at` is kept; `updated_at` moves strictly forward.
    pub fn merge_into(self, current: Ticket, now: DateTime<Utc>) -> HelpdeskResult<Ticket> {
        let description = merge_text("description", self.description, current.description)?;
        let title = match self.title {
            None => current.title,
            Some(title) => optional_text(Some(title)).unwrap_or_else(|| derive_title(&description)),
        };
        Ok(Ticket {
            id: current.id,
            title,
            description,
            ticket_type: merge_nullable_text(self.ticket_type, current.ticket_type),
            status: self.status.unwrap_or(current.status),
            priority: self.priority.unwrap_or(current.priority),
            user_id: self.user_id.unwrap_or(current.user_id),
            assigned_to: merge_nullable(self.assigned_to, current.assigned_to),
            workstation_id: merge_nullable(self.workstation_id, current.workstation_id),
            created_at: current.created_at,
            updated_at: advance_timestamp(current.updated_at, now),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::exception::HelpdeskException;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn stored() -> Ticket {
        TicketPayload {
            description: Some("Printer jams\nOn every second page".to_string()),
            user_id: Some(3),
            workstation_id: Some(Some(5)),
            ..Default::default()
        }
        .into_new(at(0))
        .unwrap()
    }

    #[test]
    fn title_comes_from_first_description_line() {
        assert_eq!(derive_title("\n  Printer jams \nmore"), "Printer jams");
        assert_eq!(derive_title(&"x".repeat(200)).len(), 80);
        assert_eq!(derive_title("   "), "");
    }

    #[test]
    fn create_applies_defaults() {
        let ticket = stored();
        assert_eq!(ticket.title, "Printer jams");
        assert_eq!(ticket.status, TicketStatus::New);
        assert_eq!(ticket.priority, TicketPriority::Medium);
        assert_eq!(ticket.created_at, ticket.updated_at);
    }

    #[test]
    fn create_without_reporter_fails() {
        let payload: TicketPayload = serde_json::from_str(r#"{"description": "x"}"#).unwrap();
        match payload.into_new(at(0)) {
            Err(HelpdeskException::MissingFields { fields }) => assert_eq!(fields, vec!["user_id"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn status_only_update_keeps_other_fields() {
        let payload: TicketPayload = serde_json::from_str(r#"{"status": "in_progress"}"#).unwrap();
        let current = stored();
        let merged = payload.merge_into(current.clone(), at(60)).unwrap();
        assert_eq!(merged.status, TicketStatus::InProgress);
        assert_eq!(merged.description, current.description);
        assert_eq!(merged.workstation_id, Some(5));
        assert_eq!(merged.created_at, current.created_at);
        assert_eq!(merged.updated_at, at(60));
    }

    #[test]
    fn updated_at_advances_even_when_clock_lags() {
        let payload = TicketPayload {
            priority: Some(TicketPriority::High),
            ..Default::default()
        };
        let merged = payload.merge_into(stored(), at(-10)).unwrap();
        assert_eq!(merged.updated_at, at(0) + Duration::milliseconds(1));
    }

    #[test]
    fn type_key_maps_to_ticket_type() {
        let payload: TicketPayload =
            serde_json::from_str(r#"{"type": "hardware", "assigned_to": null}"#).unwrap();
        assert_eq!(payload.ticket_type, Some(Some("hardware".to_string())));
        assert_eq!(payload.assigned_to, Some(None));
    }
}
