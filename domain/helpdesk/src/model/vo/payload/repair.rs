use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{merge_nullable, merge_text, nullable, required_text, Required};
use crate::{
    exception::{HelpdeskException, HelpdeskResult},
    model::{
        entity::Repair,
        vo::{advance_timestamp, RepairStatus},
    },
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepairPayload {
    pub description: Option<String>,
    pub workstation_id: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub technician_id: Option<Option<i32>>,
    /// Defaults to the current date on create.
    pub repair_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub cost: Option<Option<Decimal>>,
    pub status: Option<RepairStatus>,
}

fn checked_cost(cost: Option<Decimal>) -> HelpdeskResult<Option<Decimal>> {
    match cost {
        Some(c) if c.is_sign_negative() && !c.is_zero() => Err(HelpdeskException::InvalidField {
            field: "cost",
            reason: "must not be negative".to_string(),
        }),
        other => Ok(other),
    }
}

impl RepairPayload {
    pub fn into_new(self, now: DateTime<Utc>) -> HelpdeskResult<Repair> {
        Required::default()
            .text("description", &self.description)
            .value("workstation_id", &self.workstation_id)
            .check()?;
        Ok(Repair {
            id: 0,
            description: required_text(self.description),
            workstation_id: self.workstation_id.unwrap_or_default(),
            technician_id: self.technician_id.flatten(),
            repair_date: self.repair_date.unwrap_or_else(|| now.date_naive()),
            cost: checked_cost(self.cost.flatten())?,
            status: self.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn merge_into(self, current: Repair, now: DateTime<Utc>) -> HelpdeskResult<Repair> {
        Ok(Repair {
            id: current.id,
            description: merge_text("description", self.description, current.description)?,
            workstation_id: self.workstation_id.unwrap_or(current.workstation_id),
            technician_id: merge_nullable(self.technician_id, current.technician_id),
            repair_date: self.repair_date.unwrap_or(current.repair_date),
            cost: checked_cost(merge_nullable(self.cost, current.cost))?,
            status: self.status.unwrap_or(current.status),
            created_at: current.created_at,
            updated_at: advance_timestamp(current.updated_at, now),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn create_defaults_date_and_status() {
        let payload: RepairPayload =
            serde_json::from_str(r#"{"description": "Replace PSU", "workstation_id": 4, "cost": 45.5}"#)
                .unwrap();
        let repair = payload.into_new(now()).unwrap();
        assert_eq!(repair.repair_date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(repair.status, RepairStatus::Pending);
        assert_eq!(repair.cost, Some(Decimal::from_str("45.5").unwrap()));
    }

    #[test]
    fn negative_cost_is_rejected() {
        let payload: RepairPayload =
            serde_json::from_str(r#"{"description": "x", "workstation_id": 1, "cost": -3}"#)
                .unwrap();
        assert!(matches!(
            payload.into_new(now()),
            Err(HelpdeskException::InvalidField { field: "cost", .. })
        ));
    }

    #[test]
    fn null_cost_clears_it() {
        let current = RepairPayload {
            description: Some("x".to_string()),
            workstation_id: Some(1),
            cost: Some(Some(Decimal::from(10))),
            ..Default::default()
        }
        .into_new(now())
        .unwrap();
        let payload: RepairPayload = serde_json::from_str(r#"{"cost": null}"#).unwrap();
        assert_eq!(payload.merge_into(current, now()).unwrap().cost, None);
    }
}
