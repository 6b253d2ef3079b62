//! Add User use case tests.

use std::sync::Arc;

use uuid::Uuid;

use user_accounts::domain::{UserMapper, UserRecordMapper};
use user_accounts::errors::{AppError, ErrorKind};
use user_accounts::infra::{InMemoryUserRepository, MockUserRepository, UserRepository};
use user_accounts::services::AddUserUseCase;
use user_accounts::{Request, UserId};

fn valid_request() -> Request {
    Request::new()
        .with("name", "Ursula")
        .with("surname", "Le Guin")
        .with("email", "ursula@example.com")
        .with("password", "VeryLongPassword1")
}

fn use_case_with(repo: MockUserRepository) -> AddUserUseCase {
    AddUserUseCase::new(Arc::new(repo), Arc::new(UserRecordMapper))
}

#[tokio::test]
async fn valid_request_persists_exactly_one_user_and_succeeds() {
    let id = UserId::new(Uuid::new_v4());

    let mut repo = MockUserRepository::new();
    repo.expect_next_id().times(1).returning(move || Ok(id));
    repo.expect_add()
        .times(1)
        .withf(move |user| user.id() == id && user.email().as_str() == "ursula@example.com")
        .returning(|_| Ok(()));

    let use_case = use_case_with(repo);
    let response = use_case.execute(&valid_request()).await;

    assert!(response.is_success());
    assert!(!response.has_errors());

    let record = response.data().get("user").expect("user data entry");
    assert_eq!(record["name"], "Ursula");
    assert_eq!(record["email"], "ursula@example.com");
    assert_eq!(record["id"], id.to_string());
}

#[tokio::test]
async fn invalid_request_never_touches_the_repository() {
    // No expectations set: any repository call would panic the mock.
    let repo = MockUserRepository::new();
    let use_case = use_case_with(repo);

    let response = use_case.execute(&Request::new()).await;

    assert!(!response.is_success());
    assert!(response.has_errors());
    assert!(response.data().get("user").is_none());
}

#[tokio::test]
async fn missing_fields_each_produce_their_own_error() {
    let repo = MockUserRepository::new();
    let use_case = use_case_with(repo);

    let response = use_case.execute(&Request::new()).await;

    for field in ["name", "surname", "email", "password"] {
        let err = response.error(field).expect(field);
        assert_eq!(err.kind, ErrorKind::ValidationError);
    }
    assert_eq!(response.errors().len(), 4);
}

#[tokio::test]
async fn a_single_invalid_field_is_reported_alone() {
    let cases = [
        ("name", valid_request().with("name", "  ")),
        ("surname", valid_request().with("surname", "")),
        ("email", valid_request().with("email", "not-an-email")),
        ("password", valid_request().with("password", "short")),
    ];

    for (field, request) in cases {
        let repo = MockUserRepository::new();
        let use_case = use_case_with(repo);

        let response = use_case.execute(&request).await;

        assert!(!response.is_success(), "{field} should fail the request");
        assert_eq!(response.errors().len(), 1, "only {field} should error");
        assert!(response.error(field).is_some());
    }
}

#[tokio::test]
async fn weak_password_and_bad_email_are_both_reported() {
    let request = Request::new()
        .with("name", "Jo")
        .with("surname", "Doe")
        .with("email", "bad-email")
        .with("password", "x");

    let repo = MockUserRepository::new();
    let use_case = use_case_with(repo);

    let response = use_case.execute(&request).await;

    assert!(!response.is_success());
    assert_eq!(response.errors().len(), 2);
    assert!(response.error("email").is_some());
    assert!(response.error("password").is_some());
    assert!(response.error("name").is_none());
    assert!(response.error("surname").is_none());
}

#[tokio::test]
async fn persistence_failure_surfaces_one_generic_error() {
    let mut repo = MockUserRepository::new();
    repo.expect_next_id()
        .returning(|| Ok(UserId::new(Uuid::new_v4())));
    repo.expect_add()
        .times(1)
        .returning(|_| Err(AppError::internal("connection refused")));

    let use_case = use_case_with(repo);
    let response = use_case.execute(&valid_request()).await;

    assert!(!response.is_success());
    assert_eq!(response.errors().len(), 1);

    let err = response.error("generic").expect("generic error entry");
    assert_eq!(err.kind, ErrorKind::PersistenceError);
    assert_eq!(err.message, "connection refused");
    assert!(response.data().get("user").is_none());
}

#[tokio::test]
async fn id_allocation_failure_is_reported_as_persistence_error() {
    let mut repo = MockUserRepository::new();
    repo.expect_next_id()
        .times(1)
        .returning(|| Err(AppError::internal("sequence unavailable")));

    let use_case = use_case_with(repo);
    let response = use_case.execute(&valid_request()).await;

    assert!(!response.is_success());
    let err = response.error("generic").expect("generic error entry");
    assert_eq!(err.kind, ErrorKind::PersistenceError);
}

#[tokio::test]
async fn is_valid_is_idempotent_across_fresh_responses() {
    let request = Request::new()
        .with("name", "Jo")
        .with("email", "bad-email");

    let use_case = use_case_with(MockUserRepository::new());

    let mut first = user_accounts::UseCaseResponse::new();
    let mut second = user_accounts::UseCaseResponse::new();

    assert!(!use_case.is_valid(&request, &mut first));
    assert!(!use_case.is_valid(&request, &mut second));

    assert_eq!(first.errors(), second.errors());
}

#[tokio::test]
async fn duplicate_email_fails_the_second_add_end_to_end() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let use_case = AddUserUseCase::new(repo.clone(), Arc::new(UserRecordMapper));

    let first = use_case.execute(&valid_request()).await;
    assert!(first.is_success());

    let second = use_case.execute(&valid_request()).await;
    assert!(!second.is_success());

    let err = second.error("generic").expect("generic error entry");
    assert_eq!(err.kind, ErrorKind::PersistenceError);

    // Only the first user made it into the store.
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn mapped_record_matches_the_mapper_contract() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let use_case = AddUserUseCase::new(repo.clone(), Arc::new(UserRecordMapper));

    let response = use_case.execute(&valid_request()).await;
    assert!(response.is_success());

    let stored = repo
        .find_by_email("ursula@example.com")
        .await
        .unwrap()
        .expect("stored user");
    let expected = UserRecordMapper.to_record(&stored);

    let record = response.data().get("user").expect("user data entry");
    assert_eq!(record, &serde_json::Value::Object(expected));
}
