use async_trait::async_trait;

use crate::{
    exception::HelpdeskResult,
    model::{
        entity::TicketView,
        vo::{TicketFilter, TicketPayload},
    },
};

#[async_trait]
pub trait TicketService: Send + Sync {
    async fn list(&self, filter: TicketFilter) -> HelpdeskResult<Vec<TicketView>>;
    async fn get(&self, id: i32) -> HelpdeskResult<TicketView>;
    async fn create(&self, payload: TicketPayload) -> HelpdeskResult<TicketView>;
    /// Fields missing from `payload` keep their value; `updated_at` always advances.
    async fn update(&self, id: i32, payload: TicketPayload) -> HelpdeskResult<TicketView>;
    async fn delete(&self, id: i32) -> HelpdeskResult<()>;
}
