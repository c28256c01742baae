use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::User;
use crate::store::UserRepository;
use crate::test_utils::mock_user_repository::MockUserRepository;

fn test_user(name: &str, email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_mock_user_repository() {
    // Create a mock store
    let store = Arc::new(MockUserRepository::new());
    let user = test_user("Test User", "test@example.com");

    // Store the user
    store.add(&user).await.unwrap();

    // Get the user
    let retrieved = store.get_by_id(user.id).await.unwrap();
    assert_eq!(retrieved, Some(user.clone()));

    // Get by email
    let by_email = store.get_by_email("test@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    // Update the user
    let mut updated = user.clone();
    updated.name = "Updated User".to_string();
    assert_eq!(store.update(&updated).await.unwrap(), 1);
    assert_eq!(
        store.get_by_id(user.id).await.unwrap().unwrap().name,
        "Updated User"
    );

    // Delete the user
    assert_eq!(store.delete(user.id).await.unwrap(), 1);
    assert!(store.get_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_rejects_duplicate_id() {
    let user = test_user("Test User", "test@example.com");
    let store = MockUserRepository::with_data(vec![user.clone()]);

    let result = store.add(&user).await;
    assert!(matches!(result, Err(ServiceError::StorageError(_))));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_mock_missing_rows_affect_nothing() {
    let store = MockUserRepository::new();
    let ghost = test_user("Ghost", "ghost@example.com");

    assert_eq!(store.update(&ghost).await.unwrap(), 0);
    assert_eq!(store.delete(ghost.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_mock_update_keeps_created_at() {
    let user = test_user("Test User", "test@example.com");
    let store = MockUserRepository::with_data(vec![user.clone()]);

    let mut changed = user.clone();
    changed.created_at = Utc::now() + chrono::Duration::days(1);
    store.update(&changed).await.unwrap();

    let stored = store.get_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.created_at, user.created_at);
}

#[tokio::test]
async fn test_mock_failing_mode() {
    let store = MockUserRepository::new();
    store.set_failing(true);

    assert!(store.get_all().await.is_err());
    assert!(store.get_by_id(Uuid::new_v4()).await.is_err());

    store.set_failing(false);
    assert!(store.get_all().await.unwrap().is_empty());
}
