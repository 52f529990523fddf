mod common;

use std::sync::Arc;

use domain_helpdesk::{
    exception::HelpdeskException,
    mock::{MockTicketRepo, MockUserRepo, MockWorkstationRepo},
    model::{
        entity::TicketView,
        vo::{TicketPayload, TicketPriority, TicketStatus},
    },
    service::TicketService,
};
use service_helpdesk::TicketServiceImpl;

use common::{ticket, user, workstation};

fn service(ticket_repo: MockTicketRepo, strict: bool) -> TicketServiceImpl {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_by_id().returning(|id| Ok(Some(user(id, "someone"))));
    let mut workstation_repo = MockWorkstationRepo::new();
    workstation_repo.expect_get_by_id().returning(|id| Ok(Some(workstation(id, "WS-05"))));
    TicketServiceImpl::builder()
        .ticket_repo(Arc::new(ticket_repo))
        .user_repo(Arc::new(user_repo))
        .workstation_repo(Arc::new(workstation_repo))
        .strict_status_transitions(strict)
        .build()
}

fn view_of_stored() -> TicketView {
    TicketView {
        ticket: ticket(8),
        reporter_name: None,
        assignee_name: None,
        workstation_inventory_number: None,
    }
}

#[tokio::test]
async fn test_status_only_update_keeps_other_fields() {
    let original = ticket(8);
    let mut ticket_repo = MockTicketRepo::new();
    ticket_repo.expect_get_by_id().returning(|id| Ok(Some(ticket(id))));
    ticket_repo
        .expect_update()
        .withf(move |t| {
            t.status == TicketStatus::Resolved
                && t.description == original.description
                && t.priority == TicketPriority::High
                && t.workstation_id == Some(5)
                && t.assigned_to == Some(3)
                && t.created_at == original.created_at
                && t.updated_at > original.updated_at
        })
        .times(1)
        .returning(|_| Ok(true));
    ticket_repo.expect_get_view().returning(|_| Ok(Some(view_of_stored())));

    let payload: TicketPayload = serde_json::from_str(r#"{"status": "resolved"}"#).unwrap();
    service(ticket_repo, false).update(8, payload).await.unwrap();
}

#[tokio::test]
async fn test_any_status_is_accepted_by_default() {
    let mut ticket_repo = MockTicketRepo::new();
    ticket_repo.expect_get_by_id().returning(|id| Ok(Some(ticket(id))));
    ticket_repo.expect_update().returning(|_| Ok(true));
    ticket_repo.expect_get_view().returning(|_| Ok(Some(view_of_stored())));
    let payload = TicketPayload {
        status: Some(TicketStatus::RepairInProgress),
        ..Default::default()
    };
    service(ticket_repo, false).update(8, payload).await.unwrap();
}

#[tokio::test]
async fn test_strict_mode_rejects_unlisted_transition() {
    let mut ticket_repo = MockTicketRepo::new();
    ticket_repo.expect_get_by_id().returning(|id| Ok(Some(ticket(id))));
    ticket_repo.expect_update().never();
    let payload = TicketPayload {
        status: Some(TicketStatus::RepairInProgress),
        ..Default::default()
    };
    let e = service(ticket_repo, true).update(8, payload).await.unwrap_err();
    match e {
        HelpdeskException::IllegalTransition { from, to } => {
            assert_eq!(from, "new");
            assert_eq!(to, "repair_in_progress");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_update_of_missing_ticket_is_not_found() {
    let mut ticket_repo = MockTicketRepo::new();
    ticket_repo.expect_get_by_id().returning(|_| Ok(None));
    let e = service(ticket_repo, false)
        .update(99, TicketPayload::default())
        .await
        .unwrap_err();
    assert!(matches!(e, HelpdeskException::NotFound { entity: "Ticket", id: 99 }));
}

#[tokio::test]
async fn test_create_requires_reporter_before_touching_store() {
    let mut ticket_repo = MockTicketRepo::new();
    ticket_repo.expect_insert().never();
    let payload: TicketPayload = serde_json::from_str(r#"{"description": "no boot"}"#).unwrap();
    let e = service(ticket_repo, false).create(payload).await.unwrap_err();
    assert!(matches!(e, HelpdeskException::MissingFields { .. }));
}
