use chrono::Utc;
use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{map_sqlx_error, Result};

// Table the repository reads and writes
pub const USERS_TABLE: &str = "Users";

const CREATE_USERS_TABLE: &str = "
    CREATE TABLE Users (
        Id TEXT PRIMARY KEY NOT NULL,
        Name TEXT NOT NULL CHECK (length(Name) <= 100),
        Email TEXT NOT NULL CHECK (length(Email) <= 100),
        CreatedAt TEXT NOT NULL
    )";

// Demo users inserted the first time the table is created
pub const DEMO_USERS: [(&str, &str); 2] = [
    ("Jon Doe", "jon.doe@example.com"),
    ("Isaac AI", "isaac.ai@example.com"),
];

/// What `DatabaseInitializer::initialize` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The table was missing; it was created and seeded
    Created,
    /// The table already existed; nothing was touched
    AlreadyPresent,
}

/// Ensures the `Users` table exists before the service starts taking traffic.
///
/// Only the table's existence is checked. Column shape is never compared, so a
/// table left behind by an older schema is accepted as-is.
pub struct DatabaseInitializer {
    pool: SqlitePool,
}

impl DatabaseInitializer {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn initialize(&self) -> Result<InitOutcome> {
        if self.table_exists(USERS_TABLE).await? {
            info!("Table '{}' already exists, skipping initialization", USERS_TABLE);
            return Ok(InitOutcome::AlreadyPresent);
        }

        info!("Table '{}' not found, creating it...", USERS_TABLE);

        // Create and seed together so a failed seed never leaves an empty table
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("begin", e))?;

        sqlx::query(CREATE_USERS_TABLE)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("create_table", e))?;

        for (name, email) in DEMO_USERS {
            let id = Uuid::new_v4();
            debug!("Seeding demo user '{}' with ID: {}", name, id);

            sqlx::query("INSERT INTO Users (Id, Name, Email, CreatedAt) VALUES (?, ?, ?, ?)")
                .bind(id.hyphenated())
                .bind(name)
                .bind(email)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("seed", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("commit", e))?;

        info!(
            "Table '{}' created and seeded with {} demo users",
            USERS_TABLE,
            DEMO_USERS.len()
        );
        Ok(InitOutcome::Created)
    }

    async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(table_name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("table_exists", e))?;

        Ok(count > 0)
    }
}
