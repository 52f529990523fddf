use asset_architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::{
    entity::{User, UserView},
    vo::Deletion,
};

#[async_trait]
pub trait UserRepo: DBRepository<User> + Send + Sync {
    async fn get_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<UserView>>;
    /// Ordered by username.
    async fn list_views(&self) -> anyhow::Result<Vec<UserView>>;
    /// Counts every reference to the user and removes it only when there are
    /// none, as one atomic unit.
    async fn delete_unreferenced(&self, id: i32) -> anyhow::Result<Deletion>;
}
