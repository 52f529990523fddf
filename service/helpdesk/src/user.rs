use std::sync::Arc;

use asset_architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::{
        entity::{Department, UserView, BOOTSTRAP_ADMIN_ID},
        vo::UserPayload,
    },
    repository::{DepartmentRepo, UserRepo},
    service::{CredentialHasher, UserService},
};
use typed_builder::TypedBuilder;

use crate::{
    credential::hash_blocking,
    reference::{deletion_result, ensure_reference},
};

#[derive(TypedBuilder)]
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    department_repo: Arc<dyn DepartmentRepo>,
    hasher: Arc<dyn CredentialHasher>,
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list(&self) -> HelpdeskResult<Vec<UserView>> {
        Ok(self.user_repo.list_views().await?)
    }

    async fn get(&self, id: i32) -> HelpdeskResult<UserView> {
        self.user_repo
            .get_view(id)
            .await?
            .ok_or(HelpdeskException::not_found("User", id))
    }

    async fn create(&self, payload: UserPayload) -> HelpdeskResult<UserView> {
        payload.check_new()?;
        if let Some(username) = payload.username.as_deref() {
            self.ensure_username_free(username.trim(), None).await?;
        }
        self.ensure_department(payload.department_id.flatten()).await?;

        let password_hash =
            hash_blocking(&self.hasher, payload.new_password().unwrap_or_default()).await?;
        let user = payload.into_new(password_hash)?;
        let id = self.user_repo.insert(&user).await?;
        tracing::info!("Created user {id} ({})", user.username);
        self.get(id).await
    }

    async fn update(&self, id: i32, payload: UserPayload) -> HelpdeskResult<UserView> {
        let current = self
            .user_repo
            .get_by_id(id)
            .await?
            .ok_or(HelpdeskException::not_found("User", id))?;
        if let Some(username) = payload.username.as_deref() {
            if username.trim() != current.username {
                self.ensure_username_free(username.trim(), Some(id)).await?;
            }
        }
        if let Some(department_id) = payload.department_id {
            self.ensure_department(department_id).await?;
        }

        let password_hash = match payload.new_password() {
            Some(password) => Some(hash_blocking(&self.hasher, password).await?),
            None => None,
        };
        let user = payload.merge_into(current, password_hash)?;
        if !self.user_repo.update(&user).await? {
            return Err(HelpdeskException::not_found("User", id));
        }
        self.get(id).await
    }

    async fn delete(&self, id: i32) -> HelpdeskResult<()> {
        if id == BOOTSTRAP_ADMIN_ID {
            return Err(HelpdeskException::ProtectedRecord {
                reason: "The bootstrap administrator cannot be deleted".to_string(),
            });
        }
        let deletion = self.user_repo.delete_unreferenced(id).await?;
        deletion_result(deletion, "User", id)?;
        tracing::info!("Deleted user {id}");
        Ok(())
    }
}

impl UserServiceImpl {
    async fn ensure_username_free(&self, username: &str, owner: Option<i32>) -> HelpdeskResult<()> {
        match self.user_repo.get_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(HelpdeskException::conflict("Username already exists"))
            }
            _ => Ok(()),
        }
    }

    async fn ensure_department(&self, department_id: Option<i32>) -> HelpdeskResult<()> {
        ensure_reference::<Department, _>(
            self.department_repo.as_ref(),
            "department_id",
            "Department",
            department_id,
        )
        .await
    }
}
