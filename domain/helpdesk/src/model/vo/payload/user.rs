use std::fmt;

use serde::Deserialize;

use super::{
    merge_nullable, merge_nullable_text, merge_text, nullable, optional_text, required_text,
    Required,
};
use crate::{
    exception::HelpdeskResult,
    model::{entity::User, vo::Role},
};

#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    pub username: Option<String>,
    pub full_name: Option<String>,
    /// Plain text; hashed before it reaches a repository.
    pub password: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "nullable")]
    pub department_id: Option<Option<i32>>,
}

impl fmt::Debug for UserPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPayload")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("role", &self.role)
            .field("department_id", &self.department_id)
            .finish()
    }
}

impl UserPayload {
    pub fn check_new(&self) -> HelpdeskResult<()> {
        Required::default()
            .text("username", &self.username)
            .text("password", &self.password)
            .text("full_name", &self.full_name)
            .check()
    }

    /// Password to set, ignoring a blank one (an edit form left empty).
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn into_new(self, password_hash: String) -> HelpdeskResult<User> {
        self.check_new()?;
        Ok(User {
            id: 0,
            username: required_text(self.username),
            full_name: required_text(self.full_name),
            password_hash,
            email: optional_text(self.email.flatten()),
            role: self.role.unwrap_or_default(),
            department_id: self.department_id.flatten(),
        })
    }

    /// `password_hash` replaces the stored hash when present.
    pub fn merge_into(self, current: User, password_hash: Option<String>) -> HelpdeskResult<User> {
        Ok(User {
            id: current.id,
            username: merge_text("username", self.username, current.username)?,
            full_name: merge_text("full_name", self.full_name, current.full_name)?,
            password_hash: password_hash.unwrap_or(current.password_hash),
            email: merge_nullable_text(self.email, current.email),
            role: self.role.unwrap_or(current.role),
            department_id: merge_nullable(self.department_id, current.department_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::HelpdeskException;

    fn stored() -> User {
        User {
            id: 7,
            username: "john.doe".to_string(),
            full_name: "John Doe".to_string(),
            password_hash: "old-hash".to_string(),
            email: Some("john@example.com".to_string()),
            role: Role::User,
            department_id: Some(2),
        }
    }

    #[test]
    fn create_reports_every_missing_field() {
        let payload: UserPayload = serde_json::from_str(r#"{"username": "  "}"#).unwrap();
        match payload.check_new() {
            Err(HelpdeskException::MissingFields { fields }) => {
                assert_eq!(fields, vec!["username", "password", "full_name"])
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<UserPayload>(r#"{"username": "a", "is_root": true}"#).is_err());
        assert!(serde_json::from_str::<UserPayload>(r#"{"role": "superuser"}"#).is_err());
    }

    #[test]
    fn partial_update_keeps_everything_else() {
        let payload: UserPayload = serde_json::from_str(r#"{"full_name": "John Q. Doe"}"#).unwrap();
        let merged = payload.merge_into(stored(), None).unwrap();
        assert_eq!(merged.full_name, "John Q. Doe");
        assert_eq!(merged.email.as_deref(), Some("john@example.com"));
        assert_eq!(merged.department_id, Some(2));
        assert_eq!(merged.password_hash, "old-hash");
    }

    #[test]
    fn explicit_null_clears_nullable_fields() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"department_id": null, "email": null}"#).unwrap();
        let merged = payload.merge_into(stored(), None).unwrap();
        assert_eq!(merged.department_id, None);
        assert_eq!(merged.email, None);
    }

    #[test]
    fn blank_password_on_edit_keeps_the_old_one() {
        let payload: UserPayload = serde_json::from_str(r#"{"password": ""}"#).unwrap();
        assert!(payload.new_password().is_none());
    }

    #[test]
    fn debug_output_redacts_password() {
        let payload: UserPayload = serde_json::from_str(r#"{"password": "hunter2"}"#).unwrap();
        assert!(!format!("{payload:?}").contains("hunter2"));
    }
}
