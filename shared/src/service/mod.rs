//! User service: creation-time defaults on top of a `UserRepository`.

use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::User;
use crate::store::UserRepository;

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService around an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.get_by_email(email).await
    }

    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.repository.get_all().await
    }

    /// Persist a new user.
    ///
    /// A nil id is replaced with a fresh v4 UUID; a caller-supplied id is kept.
    /// `created_at` is always overwritten with the current UTC time.
    pub async fn create_user(&self, mut user: User) -> Result<User> {
        if user.id.is_nil() {
            user.id = Uuid::new_v4();
            debug!("Generated ID {} for new user", user.id);
        }

        user.created_at = Utc::now();

        self.repository.add(&user).await?;
        info!("Created user {}", user.id);

        Ok(user)
    }

    /// Update name and email. Returns `false` when no user has `user.id`.
    pub async fn update_user(&self, user: &User) -> Result<bool> {
        let affected = self.repository.update(user).await?;
        Ok(affected > 0)
    }

    /// Delete a user. Returns `false` when no user has `id`.
    pub async fn delete_user(&self, id: Uuid) -> Result<bool> {
        let affected = self.repository.delete(id).await?;
        if affected > 0 {
            info!("Deleted user {}", id);
        }
        Ok(affected > 0)
    }
}
