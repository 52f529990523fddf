mod common;

use std::sync::Arc;

use domain_helpdesk::{
    exception::{ExceptionKind, HelpdeskException},
    mock::{MockDepartmentRepo, MockSoftwareRepo, MockUserRepo, MockWorkstationRepo},
    model::vo::{Deletion, WorkstationPayload, WorkstationReferences},
    service::WorkstationService,
};
use service_helpdesk::WorkstationServiceImpl;

use common::workstation;

fn service(
    workstation_repo: MockWorkstationRepo,
    software_repo: MockSoftwareRepo,
) -> WorkstationServiceImpl {
    let mut department_repo = MockDepartmentRepo::new();
    department_repo.expect_get_by_id().returning(|_| Ok(None));
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_by_id().returning(|_| Ok(None));
    WorkstationServiceImpl::builder()
        .workstation_repo(Arc::new(workstation_repo))
        .software_repo(Arc::new(software_repo))
        .department_repo(Arc::new(department_repo))
        .user_repo(Arc::new(user_repo))
        .build()
}

#[tokio::test]
async fn test_workstation_with_tickets_is_not_deleted() {
    let mut workstation_repo = MockWorkstationRepo::new();
    workstation_repo.expect_delete_unreferenced().returning(|_| {
        Ok(Deletion::Blocked(
            WorkstationReferences {
                tickets: 1,
                repairs: 0,
            }
            .blocking(),
        ))
    });
    let e = service(workstation_repo, MockSoftwareRepo::new()).delete(5).await.unwrap_err();
    assert_eq!(e.kind(), ExceptionKind::Conflict);
    assert!(e.to_string().contains("tickets.workstation_id (1)"));
}

#[tokio::test]
async fn test_unreferenced_workstation_is_deleted() {
    let mut workstation_repo = MockWorkstationRepo::new();
    workstation_repo.expect_delete_unreferenced().times(1).returning(|_| Ok(Deletion::Deleted));
    service(workstation_repo, MockSoftwareRepo::new()).delete(5).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_inventory_number_is_a_conflict() {
    let mut workstation_repo = MockWorkstationRepo::new();
    workstation_repo
        .expect_get_by_inventory_number()
        .withf(|n| n == "WS-01")
        .returning(|n| Ok(Some(workstation(1, n))));
    workstation_repo.expect_insert().never();
    let payload: WorkstationPayload =
        serde_json::from_str(r#"{"inventory_number": "WS-01"}"#).unwrap();
    let e = service(workstation_repo, MockSoftwareRepo::new()).create(payload).await.unwrap_err();
    assert_eq!(e.to_string(), "Inventory number already exists");
}

#[tokio::test]
async fn test_unknown_responsible_user_is_rejected() {
    let mut workstation_repo = MockWorkstationRepo::new();
    workstation_repo.expect_get_by_inventory_number().returning(|_| Ok(None));
    workstation_repo.expect_insert().never();
    let payload: WorkstationPayload =
        serde_json::from_str(r#"{"inventory_number": "WS-02", "responsible_id": 12}"#).unwrap();
    let e = service(workstation_repo, MockSoftwareRepo::new()).create(payload).await.unwrap_err();
    assert!(matches!(
        e,
        HelpdeskException::InvalidReference { field: "responsible_id", id: 12, .. }
    ));
}

#[tokio::test]
async fn test_software_of_missing_workstation_is_not_found() {
    let mut workstation_repo = MockWorkstationRepo::new();
    workstation_repo.expect_get_by_id().returning(|_| Ok(None));
    let mut software_repo = MockSoftwareRepo::new();
    software_repo.expect_list_views().never();
    let e = service(workstation_repo, software_repo).list_software(77).await.unwrap_err();
    assert_eq!(e.kind(), ExceptionKind::NotFound);
}

#[tokio::test]
async fn test_software_listing_is_scoped_to_workstation() {
    let mut workstation_repo = MockWorkstationRepo::new();
    workstation_repo.expect_get_by_id().returning(|id| Ok(Some(workstation(id, "WS-03"))));
    let mut software_repo = MockSoftwareRepo::new();
    software_repo
        .expect_list_views()
        .withf(|filter| filter.workstation_id == Some(3) && filter.search.is_none())
        .returning(|_| Ok(vec![]));
    let software = service(workstation_repo, software_repo).list_software(3).await.unwrap();
    assert!(software.is_empty());
}
