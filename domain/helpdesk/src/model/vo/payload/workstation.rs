use serde::Deserialize;

use super::{
    merge_nullable, merge_nullable_text, merge_text, nullable, optional_text, required_text,
    Required,
};
use crate::{exception::HelpdeskResult, model::entity::Workstation};

pub const DEFAULT_WORKSTATION_STATUS: &str = "operational";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkstationPayload {
    pub inventory_number: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub os_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub ip_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub mac_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub department_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub responsible_id: Option<Option<i32>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<Option<String>>,
}

impl WorkstationPayload {
    pub fn into_new(self) -> HelpdeskResult<Workstation> {
        Required::default().text("inventory_number", &self.inventory_number).check()?;
        Ok(Workstation {
            id: 0,
            inventory_number: required_text(self.inventory_number),
            os_name: optional_text(self.os_name.flatten()),
            ip_address: optional_text(self.ip_address.flatten()),
            mac_address: optional_text(self.mac_address.flatten()),
            department_id: self.department_id.flatten(),
            responsible_id: self.responsible_id.flatten(),
            status: optional_text(self.status)
                .unwrap_or_else(|| DEFAULT_WORKSTATION_STATUS.to_string()),
            notes: optional_text(self.notes.flatten()),
        })
    }

    pub fn merge_into(self, current: Workstation) -> HelpdeskResult<Workstation> {
        Ok(Workstation {
            id: current.id,
            inventory_number: merge_text(
                "inventory_number",
                self.inventory_number,
                current.inventory_number,
            )?,
            os_name: merge_nullable_text(self.os_name, current.os_name),
            ip_address: merge_nullable_text(self.ip_address, current.ip_address),
            mac_address: merge_nullable_text(self.mac_address, current.mac_address),
            department_id: merge_nullable(self.department_id, current.department_id),
            responsible_id: merge_nullable(self.responsible_id, current.responsible_id),
            status: merge_text("status", self.status, current.status)?,
            notes: merge_nullable_text(self.notes, current.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_operational() {
        let payload: WorkstationPayload =
            serde_json::from_str(r#"{"inventory_number": " WS-01 "}"#).unwrap();
        let ws = payload.into_new().unwrap();
        assert_eq!(ws.inventory_number, "WS-01");
        assert_eq!(ws.status, DEFAULT_WORKSTATION_STATUS);
    }

    #[test]
    fn any_store_defined_status_is_accepted() {
        let payload: WorkstationPayload =
            serde_json::from_str(r#"{"inventory_number": "WS-02", "status": "in_storage"}"#)
                .unwrap();
        assert_eq!(payload.into_new().unwrap().status, "in_storage");
    }
}
