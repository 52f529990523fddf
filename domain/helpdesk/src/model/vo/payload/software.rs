use chrono::NaiveDate;
use serde::Deserialize;

use super::{
    merge_nullable, merge_nullable_text, merge_text, nullable, optional_text, required_text,
    Required,
};
use crate::{exception::HelpdeskResult, model::entity::Software};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoftwarePayload {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub version: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub license_key: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub install_date: Option<Option<NaiveDate>>,
    pub workstation_id: Option<i32>,
}

impl SoftwarePayload {
    pub fn into_new(self) -> HelpdeskResult<Software> {
        Required::default()
            .text("name", &self.name)
            .value("workstation_id", &self.workstation_id)
            .check()?;
        Ok(Software {
            id: 0,
            name: required_text(self.name),
            version: optional_text(self.version.flatten()),
            license_key: optional_text(self.license_key.flatten()),
            install_date: self.install_date.flatten(),
            workstation_id: self.workstation_id.unwrap_or_default(),
        })
    }

    pub fn merge_into(self, current: Software) -> HelpdeskResult<Software> {
        Ok(Software {
            id: current.id,
            name: merge_text("name", self.name, current.name)?,
            version: merge_nullable_text(self.version, current.version),
            license_key: merge_nullable_text(self.license_key, current.license_key),
            install_date: merge_nullable(self.install_date, current.install_date),
            workstation_id: self.workstation_id.unwrap_or(current.workstation_id),
        })
    }
}
