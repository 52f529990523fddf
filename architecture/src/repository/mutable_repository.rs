use crate::model::AggregateRoot;

/// Mutable repository.
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync + AggregateRoot,
{
    /// Insert a record and return the id the store assigned to it.
    ///
    /// The id carried by `entity` is ignored.
    async fn insert(&self, entity: &T) -> anyhow::Result<i32>;
    /// Overwrite every column of the row with `entity.id`.
    ///
    /// Returns `false` when no such row exists.
    async fn update(&self, entity: &T) -> anyhow::Result<bool>;
    /// Returns `false` when no such row exists.
    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
}
