use crate::model::AggregateRoot;

/// Read-only repository.
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + Sync + AggregateRoot,
{
    /// Get one record by id, `None` when no row has that id.
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<T>>;
    /// Get every record.
    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}
