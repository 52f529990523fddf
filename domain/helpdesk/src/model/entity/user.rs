use asset_architecture::model::AggregateRoot;
use serde::Serialize;

use crate::model::vo::Role;

/// The administrator seeded on first start. It can never be deleted.
pub const BOOTSTRAP_ADMIN_ID: i32 = 1;

/// User account as stored. Deliberately not `Serialize`: the password hash
/// must never leave the service layer, read APIs return [`UserView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub email: Option<String>,
    pub role: Role,
    pub department_id: Option<i32>,
}

impl AggregateRoot for User {}

/// Public shape of a user, with the department name resolved at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub role: Role,
    pub department_id: Option<i32>,
    pub department_name: Option<String>,
}

impl UserView {
    pub fn new(user: User, department_name: Option<String>) -> Self {
        let User {
            id,
            username,
            full_name,
            password_hash: _,
            email,
            role,
            department_id,
        } = user;
        Self {
            id,
            username,
            full_name,
            email,
            role,
            department_id,
            department_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_never_carries_the_password() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            full_name: "Administrator".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            email: None,
            role: Role::Admin,
            department_id: Some(1),
        };
        let json = serde_json::to_value(UserView::new(user, Some("IT".to_string()))).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("argon2"));
        assert_eq!(json["role"], "admin");
        assert_eq!(json["department_name"], "IT");
    }
}
