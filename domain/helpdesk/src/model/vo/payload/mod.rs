//! Request payloads. The same payload serves create and update: create
//! requires some fields, update merges whatever is present over the current
//! row and keeps everything else.
//!
//! Nullable columns are `Option<Option<T>>`: absent keeps the current value,
//! `null` clears it.
mod department;
mod repair;
mod software;
mod ticket;
mod user;
mod workstation;

#[rustfmt::skip]
pub use {
    department::DepartmentPayload,
    repair::RepairPayload,
    software::SoftwarePayload,
    ticket::{derive_title, TicketPayload},
    user::UserPayload,
    workstation::{WorkstationPayload, DEFAULT_WORKSTATION_STATUS},
};

use serde::{Deserialize, Deserializer};

use crate::exception::{HelpdeskException, HelpdeskResult};

pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Collects every absent required field before failing.
#[derive(Default)]
pub(crate) struct Required(Vec<&'static str>);

impl Required {
    pub fn text(mut self, field: &'static str, value: &Option<String>) -> Self {
        if is_blank(value.as_deref()) {
            self.0.push(field);
        }
        self
    }

    pub fn value<T>(mut self, field: &'static str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.0.push(field);
        }
        self
    }

    pub fn check(self) -> HelpdeskResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(HelpdeskException::MissingFields { fields: self.0 })
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Trimmed text of a field already known to be present.
pub(crate) fn required_text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Blank optional text is stored as `NULL`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Update of a required text column: absent keeps `current`, blank is rejected.
pub(crate) fn merge_text(
    field: &'static str,
    patch: Option<String>,
    current: String,
) -> HelpdeskResult<String> {
    match patch {
        None => Ok(current),
        Some(v) if v.trim().is_empty() => Err(HelpdeskException::InvalidField {
            field,
            reason: "must not be blank".to_string(),
        }),
        Some(v) => Ok(v.trim().to_string()),
    }
}

pub(crate) fn merge_nullable<T>(patch: Option<Option<T>>, current: Option<T>) -> Option<T> {
    match patch {
        None => current,
        Some(v) => v,
    }
}

pub(crate) fn merge_nullable_text(
    patch: Option<Option<String>>,
    current: Option<String>,
) -> Option<String> {
    match patch {
        None => current,
        Some(v) => optional_text(v),
    }
}
