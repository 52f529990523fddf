use asset_architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::{
    entity::{Software, SoftwareView},
    vo::SoftwareFilter,
};

#[async_trait]
pub trait SoftwareRepo: DBRepository<Software> + Send + Sync {
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<SoftwareView>>;
    /// Most recently installed first.
    async fn list_views(&self, filter: &SoftwareFilter) -> anyhow::Result<Vec<SoftwareView>>;
}
