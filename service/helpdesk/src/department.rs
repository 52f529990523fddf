use std::sync::Arc;

use asset_architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::{entity::Department, vo::DepartmentPayload},
    repository::DepartmentRepo,
    service::DepartmentService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct DepartmentServiceImpl {
    department_repo: Arc<dyn DepartmentRepo>,
}

#[async_trait]
impl DepartmentService for DepartmentServiceImpl {
    async fn list(&self) -> HelpdeskResult<Vec<Department>> {
        Ok(self.department_repo.get_all().await?)
    }

    async fn get(&self, id: i32) -> HelpdeskResult<Department> {
        self.department_repo
            .get_by_id(id)
            .await?
            .ok_or(HelpdeskException::not_found("Department", id))
    }

    async fn create(&self, payload: DepartmentPayload) -> HelpdeskResult<Department> {
        let department = payload.into_new()?;
        let id = self.department_repo.insert(&department).await?;
        tracing::info!("Created department {id} ({})", department.name);
        self.get(id).await
    }

    async fn update(&self, id: i32, payload: DepartmentPayload) -> HelpdeskResult<Department> {
        let current = self.get(id).await?;
        let department = payload.merge_into(current)?;
        if !self.department_repo.update(&department).await? {
            return Err(HelpdeskException::not_found("Department", id));
        }
        self.get(id).await
    }
}
