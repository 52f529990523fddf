use serde::Deserialize;

use super::{merge_nullable_text, merge_text, nullable, optional_text, required_text, Required};
use crate::{exception::HelpdeskResult, model::entity::Department};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepartmentPayload {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl DepartmentPayload {
    pub fn into_new(self) -> HelpdeskResult<Department> {
        Required::default().text("name", &self.name).check()?;
        Ok(Department {
            id: 0,
            name: required_text(self.name),
            description: optional_text(self.description.flatten()),
        })
    }

    pub fn merge_into(self, current: Department) -> HelpdeskResult<Department> {
        Ok(Department {
            id: current.id,
            name: merge_text("name", self.name, current.name)?,
            description: merge_nullable_text(self.description, current.description),
        })
    }
}
