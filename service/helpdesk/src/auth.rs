use std::sync::Arc;

use async_trait::async_trait;
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::entity::UserView,
    repository::UserRepo,
    service::{AuthService, CredentialHasher},
};
use typed_builder::TypedBuilder;

use crate::credential::verify_blocking;

#[derive(TypedBuilder)]
pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    hasher: Arc<dyn CredentialHasher>,
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn authenticate(&self, username: &str, password: &str) -> HelpdeskResult<UserView> {
        let mut missing = vec![];
        if username.is_empty() {
            missing.push("username");
        }
        if password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(HelpdeskException::MissingFields { fields: missing });
        }

        let user = self.user_repo.get_by_username(username).await?;
        let stored_hash = user.as_ref().map(|user| user.password_hash.clone());
        let verified = verify_blocking(&self.hasher, password, stored_hash).await?;
        let user = match user {
            Some(user) if verified => user,
            Some(user) => {
                tracing::info!("Login rejected: wrong password for user {}", user.id);
                return Err(HelpdeskException::InvalidCredentials);
            }
            None => {
                tracing::info!("Login rejected: no user named {username:?}");
                return Err(HelpdeskException::InvalidCredentials);
            }
        };

        tracing::info!("User {} logged in", user.id);
        let department_name =
            self.user_repo.get_view(user.id).await?.and_then(|view| view.department_name);
        Ok(UserView::new(user, department_name))
    }
}
