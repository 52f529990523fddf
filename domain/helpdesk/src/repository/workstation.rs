use asset_architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::{
    entity::{Workstation, WorkstationView},
    vo::{Deletion, WorkstationFilter, WorkstationStatusCount},
};

#[async_trait]
pub trait WorkstationRepo: DBRepository<Workstation> + Send + Sync {
    async fn get_by_inventory_number(
        &self,
        inventory_number: &str,
    ) -> anyhow::Result<Option<Workstation>>;
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<WorkstationView>>;
    /// Ordered by inventory number.
    async fn list_views(&self, filter: &WorkstationFilter)
        -> anyhow::Result<Vec<WorkstationView>>;
    async fn count_by_status(&self) -> anyhow::Result<Vec<WorkstationStatusCount>>;
    /// Checks tickets and repairs, then removes the workstation together with
    /// its installed software, all in one transaction.
    async fn delete_unreferenced(&self, id: i32) -> anyhow::Result<Deletion>;
}
