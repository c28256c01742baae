use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::User;

// SQLite-backed repository and the startup schema initializer
pub mod schema;
pub mod sqlite;

/// UserRepository trait defining the persistence contract for users,
/// independent of the storage technology behind it.
///
/// Absence is reported as `Ok(None)`; `Err` always means the store itself failed.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Gets a user by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Gets the first user with the given email (emails are not unique)
    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Gets all users, in whatever order the store returns them
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Inserts a new user; fails if the ID already exists
    async fn add(&self, user: &User) -> Result<()>;

    /// Updates name and email by ID, returning the number of rows affected
    async fn update(&self, user: &User) -> Result<u64>;

    /// Deletes a user by ID, returning the number of rows affected
    async fn delete(&self, id: Uuid) -> Result<u64>;
}
