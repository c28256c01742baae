use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::models::User;
use crate::store::UserRepository;

/// MockUserRepository is a simple in-memory implementation of UserRepository for testing
pub struct MockUserRepository {
    users: Mutex<Vec<User>>, // insertion order, like a table scan
    failing: AtomicBool,
}

impl MockUserRepository {
    /// Create a new empty MockUserRepository
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// Create a MockUserRepository with initial test data
    pub fn with_data(users: Vec<User>) -> Self {
        let store = Self::new();
        store.users.lock().unwrap().extend(users);
        store
    }

    /// Make every subsequent call fail with a storage error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of users currently held
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::StorageError(
                "Mock repository is unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.check_available()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        self.check_available()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        self.check_available()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn add(&self, user: &User) -> Result<()> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.id == user.id) {
            return Err(ServiceError::StorageError(format!(
                "User with id {} already exists",
                user.id
            )));
        }

        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<u64> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                existing.name = user.name.clone();
                existing.email = user.email.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();

        let before = users.len();
        users.retain(|u| u.id != id);
        Ok((before - users.len()) as u64)
    }
}
