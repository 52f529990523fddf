use async_trait::async_trait;

use crate::{exception::HelpdeskResult, model::entity::UserView};

/// Credential check. No session is created; the caller keeps the identity.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Unknown user and wrong password both fail with
    /// [`HelpdeskException::InvalidCredentials`](crate::exception::HelpdeskException::InvalidCredentials).
    async fn authenticate(&self, username: &str, password: &str) -> HelpdeskResult<UserView>;
}

/// Salted password hashing.
pub trait CredentialHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> anyhow::Result<String>;
    fn verify_password(&self, password: &str, stored_hash: &str) -> bool;
    /// Runs a verification that always fails, so rejecting an unknown user
    /// costs as much as rejecting a wrong password.
    fn verify_unknown(&self, password: &str);
}
