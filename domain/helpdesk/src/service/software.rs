use async_trait::async_trait;

use crate::{
    exception::HelpdeskResult,
    model::{
        entity::SoftwareView,
        vo::{SoftwareFilter, SoftwarePayload},
    },
};

#[async_trait]
pub trait SoftwareService: Send + Sync {
    async fn list(&self, filter: SoftwareFilter) -> HelpdeskResult<Vec<SoftwareView>>;
    async fn get(&self, id: i32) -> HelpdeskResult<SoftwareView>;
    async fn create(&self, payload: SoftwarePayload) -> HelpdeskResult<SoftwareView>;
    async fn update(&self, id: i32, payload: SoftwarePayload) -> HelpdeskResult<SoftwareView>;
    async fn delete(&self, id: i32) -> HelpdeskResult<()>;
}
