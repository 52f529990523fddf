use async_trait::async_trait;

use crate::{
    exception::HelpdeskResult,
    model::{entity::Department, vo::DepartmentPayload},
};

#[async_trait]
pub trait DepartmentService: Send + Sync {
    async fn list(&self) -> HelpdeskResult<Vec<Department>>;
    async fn get(&self, id: i32) -> HelpdeskResult<Department>;
    async fn create(&self, payload: DepartmentPayload) -> HelpdeskResult<Department>;
    async fn update(&self, id: i32, payload: DepartmentPayload) -> HelpdeskResult<Department>;
}
