mod common;

use std::sync::Arc;

use domain_helpdesk::{
    exception::HelpdeskException,
    mock::{MockCredentialHasher, MockUserRepo},
    service::AuthService,
};
use service_helpdesk::AuthServiceImpl;

use common::{user, user_view};

fn service(user_repo: MockUserRepo, hasher: MockCredentialHasher) -> AuthServiceImpl {
    AuthServiceImpl::builder()
        .user_repo(Arc::new(user_repo))
        .hasher(Arc::new(hasher))
        .build()
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_look_the_same() {
    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_by_username()
        .withf(|username| username == "ghost")
        .returning(|_| Ok(None));
    user_repo
        .expect_get_by_username()
        .withf(|username| username == "admin")
        .returning(|_| Ok(Some(user(1, "admin"))));
    let mut hasher = MockCredentialHasher::new();
    hasher.expect_verify_unknown().times(1).return_const(());
    hasher.expect_verify_password().returning(|_, _| false);
    let service = service(user_repo, hasher);

    let unknown = service.authenticate("ghost", "admin123").await.unwrap_err();
    let wrong = service.authenticate("admin", "nope").await.unwrap_err();

    assert!(matches!(unknown, HelpdeskException::InvalidCredentials));
    assert!(matches!(wrong, HelpdeskException::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_successful_login_returns_public_view() {
    let admin = user(1, "admin");
    let view = user_view(&admin);
    let mut user_repo = MockUserRepo::new();
    let stored = admin.clone();
    user_repo.expect_get_by_username().returning(move |_| Ok(Some(stored.clone())));
    user_repo.expect_get_view().returning(move |_| Ok(Some(view.clone())));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_verify_password()
        .withf(|password, hash| password == "admin123" && hash == "hash-of-admin")
        .returning(|_, _| true);

    let logged_in = service(user_repo, hasher).authenticate("admin", "admin123").await.unwrap();
    assert_eq!(logged_in.id, 1);
    assert_eq!(logged_in.department_name.as_deref(), Some("IT"));
}

#[tokio::test]
async fn test_missing_credentials_are_a_validation_error() {
    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_by_username().never();
    let e = service(user_repo, MockCredentialHasher::new())
        .authenticate("", "")
        .await
        .unwrap_err();
    match e {
        HelpdeskException::MissingFields { fields } => {
            assert_eq!(fields, vec!["username", "password"])
        }
        other => panic!("unexpected {other:?}"),
    }
}
