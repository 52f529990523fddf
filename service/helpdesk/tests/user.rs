mod common;

use std::sync::Arc;

use domain_helpdesk::{
    exception::{ExceptionKind, HelpdeskException},
    mock::{MockCredentialHasher, MockDepartmentRepo, MockUserRepo},
    model::{
        entity::Department,
        vo::{Deletion, UserPayload, UserReferences},
    },
    service::UserService,
};
use service_helpdesk::UserServiceImpl;

use common::{user, user_view};

fn service(
    user_repo: MockUserRepo,
    department_repo: MockDepartmentRepo,
    hasher: MockCredentialHasher,
) -> UserServiceImpl {
    UserServiceImpl::builder()
        .user_repo(Arc::new(user_repo))
        .department_repo(Arc::new(department_repo))
        .hasher(Arc::new(hasher))
        .build()
}

fn it_department() -> MockDepartmentRepo {
    let mut department_repo = MockDepartmentRepo::new();
    department_repo.expect_get_by_id().returning(|id| {
        Ok(Some(Department {
            id,
            name: "IT".to_string(),
            description: None,
        }))
    });
    department_repo
}

fn payload(json: &str) -> UserPayload {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn test_duplicate_username_is_a_conflict() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_by_username().returning(|_| Ok(Some(user(1, "admin"))));
    user_repo.expect_insert().never();

    let e = service(user_repo, it_department(), MockCredentialHasher::new())
        .create(payload(
            r#"{"username": "admin", "password": "x", "full_name": "Another Admin"}"#,
        ))
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ExceptionKind::Conflict);
    assert_eq!(e.to_string(), "Username already exists");
}

#[tokio::test]
async fn test_create_hashes_password_and_returns_view() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_by_username().returning(|_| Ok(None));
    user_repo
        .expect_insert()
        .withf(|u| u.username == "jane" && u.password_hash == "argon-hash")
        .returning(|_| Ok(4));
    let created = user(4, "jane");
    user_repo.expect_get_view().returning(move |_| Ok(Some(user_view(&created))));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_hash_password()
        .withf(|p| p == "s3cret")
        .returning(|_| Ok("argon-hash".to_string()));

    let view = service(user_repo, it_department(), hasher)
        .create(payload(
            r#"{"username": "jane", "password": "s3cret", "full_name": "Jane", "department_id": 1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(view.id, 4);
}

#[tokio::test]
async fn test_unknown_department_is_rejected_before_insert() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_by_username().returning(|_| Ok(None));
    user_repo.expect_insert().never();
    let mut department_repo = MockDepartmentRepo::new();
    department_repo.expect_get_by_id().returning(|_| Ok(None));

    let e = service(user_repo, department_repo, MockCredentialHasher::new())
        .create(payload(
            r#"{"username": "jane", "password": "x", "full_name": "Jane", "department_id": 99}"#,
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        e,
        HelpdeskException::InvalidReference { field: "department_id", id: 99, .. }
    ));
}

#[tokio::test]
async fn test_blank_password_on_update_keeps_hash() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_by_id().returning(|id| Ok(Some(user(id, "jane"))));
    user_repo
        .expect_update()
        .withf(|u| u.password_hash == "hash-of-jane" && u.full_name == "Jane Roe")
        .returning(|_| Ok(true));
    let updated = user(4, "jane");
    user_repo.expect_get_view().returning(move |_| Ok(Some(user_view(&updated))));
    let mut hasher = MockCredentialHasher::new();
    hasher.expect_hash_password().never();

    service(user_repo, it_department(), hasher)
        .update(4, payload(r#"{"password": "", "full_name": "Jane Roe"}"#))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bootstrap_admin_cannot_be_deleted() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_delete_unreferenced().never();
    let e = service(user_repo, it_department(), MockCredentialHasher::new())
        .delete(1)
        .await
        .unwrap_err();
    assert!(matches!(e, HelpdeskException::ProtectedRecord { .. }));
}

#[tokio::test]
async fn test_referenced_user_is_not_deleted() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_delete_unreferenced().returning(|_| {
        Ok(Deletion::Blocked(
            UserReferences {
                responsible_workstations: 2,
                assigned_tickets: 1,
                ..Default::default()
            }
            .blocking(),
        ))
    });
    let e = service(user_repo, it_department(), MockCredentialHasher::new())
        .delete(3)
        .await
        .unwrap_err();
    match e {
        HelpdeskException::ReferencedBy { id, references, .. } => {
            assert_eq!(id, 3);
            let relations: Vec<_> = references.iter().map(|r| r.relation).collect();
            assert_eq!(relations, vec!["workstations.responsible_id", "tickets.assigned_to"]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_deleting_missing_user_is_not_found() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_delete_unreferenced().returning(|_| Ok(Deletion::NotFound));
    let e = service(user_repo, it_department(), MockCredentialHasher::new())
        .delete(42)
        .await
        .unwrap_err();
    assert_eq!(e.kind(), ExceptionKind::NotFound);
}
