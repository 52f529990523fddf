use asset_architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::{
    entity::{Repair, RepairView},
    vo::RepairFilter,
};

#[async_trait]
pub trait RepairRepo: DBRepository<Repair> + Send + Sync {
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<RepairView>>;
    /// Latest repair date first.
    async fn list_views(&self, filter: &RepairFilter) -> anyhow::Result<Vec<RepairView>>;
}
