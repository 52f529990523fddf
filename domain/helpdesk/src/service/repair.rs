use async_trait::async_trait;

use crate::{
    exception::HelpdeskResult,
    model::{
        entity::RepairView,
        vo::{RepairFilter, RepairPayload},
    },
};

#[async_trait]
pub trait RepairService: Send + Sync {
    async fn list(&self, filter: RepairFilter) -> HelpdeskResult<Vec<RepairView>>;
    async fn get(&self, id: i32) -> HelpdeskResult<RepairView>;
    async fn create(&self, payload: RepairPayload) -> HelpdeskResult<RepairView>;
    async fn update(&self, id: i32, payload: RepairPayload) -> HelpdeskResult<RepairView>;
    async fn delete(&self, id: i32) -> HelpdeskResult<()>;
}
