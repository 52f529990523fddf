use asset_architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::{
    entity::{Ticket, TicketView},
    vo::TicketFilter,
};

#[async_trait]
pub trait TicketRepo: DBRepository<Ticket> + Send + Sync {
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<TicketView>>;
    /// Newest first.
    async fn list_views(&self, filter: &TicketFilter) -> anyhow::Result<Vec<TicketView>>;
}
