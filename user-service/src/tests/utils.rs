use axum::Router;
use chrono::Utc;
use roster_shared::models::User;
use roster_shared::store::sqlite::SqlUserRepository;
use roster_shared::test_utils::mock_user_repository::MockUserRepository;
use roster_shared::test_utils::sqlite_test_utils::TestDb;
use roster_shared::test_utils::test_logging::init_test_logging;
use std::sync::Arc;
use uuid::Uuid;

use crate::routes;

/// Builds a router over a mock repository pre-filled with `users`
pub fn create_test_app(users: Vec<User>) -> (Router, Arc<MockUserRepository>) {
    init_test_logging();
    let repo = Arc::new(MockUserRepository::with_data(users));
    let app = routes::create_router_with_repository(Arc::clone(&repo), "");
    (app, repo)
}

/// Builds a router over a real SQLite file with an empty Users table
///
/// Keep the returned `TestDb` alive for the duration of the test.
pub async fn create_sqlite_test_app(prefix: &str) -> (Router, TestDb) {
    init_test_logging();
    let db = TestDb::empty_table().await;
    let repo = Arc::new(SqlUserRepository::new(db.pool().clone()));
    let app = routes::create_router_with_repository(repo, prefix);
    (app, db)
}

/// Helper function to create test user data
pub fn create_test_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: Uuid::new_v4(),
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            created_at: now,
        },
        User {
            id: Uuid::new_v4(),
            name: "Alan Turing".into(),
            email: "alan@example.com".into(),
            created_at: now,
        },
    ]
}
