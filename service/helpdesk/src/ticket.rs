use std::sync::Arc;

use asset_architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::{
        entity::{Ticket, TicketView, User, Workstation},
        vo::{now, TicketFilter, TicketPayload},
    },
    repository::{TicketRepo, UserRepo, WorkstationRepo},
    service::TicketService,
};
use typed_builder::TypedBuilder;

use crate::reference::ensure_reference;

#[derive(TypedBuilder)]
pub struct TicketServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    user_repo: Arc<dyn UserRepo>,
    workstation_repo: Arc<dyn WorkstationRepo>,
    /// Reject status changes the transition table does not list.
    #[builder(default)]
    strict_status_transitions: bool,
}

#[async_trait]
impl TicketService for TicketServiceImpl {
    async fn list(&self, filter: TicketFilter) -> HelpdeskResult<Vec<TicketView>> {
        Ok(self.ticket_repo.list_views(&filter).await?)
    }

    async fn get(&self, id: i32) -> HelpdeskResult<TicketView> {
        self.ticket_repo
            .get_view(id)
            .await?
            .ok_or(HelpdeskException::not_found("Ticket", id))
    }

    async fn create(&self, payload: TicketPayload) -> HelpdeskResult<TicketView> {
        let ticket = payload.into_new(now())?;
        self.ensure_references(&ticket).await?;
        let id = self.ticket_repo.insert(&ticket).await?;
        tracing::info!("Opened ticket {id} for user {}", ticket.user_id);
        self.get(id).await
    }

    async fn update(&self, id: i32, payload: TicketPayload) -> HelpdeskResult<TicketView> {
        let current = self
            .ticket_repo
            .get_by_id(id)
            .await?
            .ok_or(HelpdeskException::not_found("Ticket", id))?;
        if let Some(next) = payload.status {
            if self.strict_status_transitions && !current.status.can_transition_to(next) {
                return Err(HelpdeskException::IllegalTransition {
                    from: current.status.to_string(),
                    to: next.to_string(),
                });
            }
            if next != current.status {
                tracing::info!("Ticket {id}: {} -> {next}", current.status);
            }
        }
        let ticket = payload.merge_into(current, now())?;
        self.ensure_references(&ticket).await?;
        if !self.ticket_repo.update(&ticket).await? {
            return Err(HelpdeskException::not_found("Ticket", id));
        }
        self.get(id).await
    }

    async fn delete(&self, id: i32) -> HelpdeskResult<()> {
        if !self.ticket_repo.delete_by_id(id).await? {
            return Err(HelpdeskException::not_found("Ticket", id));
        }
        Ok(())
    }
}

impl TicketServiceImpl {
    async fn ensure_references(&self, ticket: &Ticket) -> HelpdeskResult<()> {
        ensure_reference::<User, _>(self.user_repo.as_ref(), "user_id", "User", Some(ticket.user_id))
            .await?;
        ensure_reference::<User, _>(
            self.user_repo.as_ref(),
            "assigned_to",
            "User",
            ticket.assigned_to,
        )
        .await?;
        ensure_reference::<Workstation, _>(
            self.workstation_repo.as_ref(),
            "workstation_id",
            "Workstation",
            ticket.workstation_id,
        )
        .await
    }
}
