use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user record, serialized on the wire exactly as it is stored.
///
/// `id` and `createdAt` may be omitted by callers: a missing id becomes the
/// nil UUID (the service assigns a fresh one) and a missing timestamp becomes
/// the epoch (the service always overwrites it on creation).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Uuid,
    #[schema(max_length = 100, example = "Ada Lovelace")]
    pub name: String,
    #[schema(max_length = 100, example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds an unsaved user with a nil id, ready for `UserService::create_user`.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            email: email.into(),
            created_at: DateTime::<Utc>::default(),
        }
    }
}

// Response DTOs for general use across services
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
