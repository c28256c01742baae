use async_trait::async_trait;
use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use uuid::fmt::Hyphenated;
use uuid::Uuid;

use crate::error::{map_sqlx_error, Result};
use crate::models::User;

use super::UserRepository;

/// Creates a lazily-connected SQLite pool.
///
/// No connection is opened here; the first query does that and later queries
/// reuse pooled connections. A malformed URL still fails immediately.
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    debug!(
        "Creating SQLite pool (max_connections={}) for {}",
        max_connections, database_url
    );

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| map_sqlx_error("connect_options", e))?
        .create_if_missing(true);

    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options))
}

/// SQL store for users
pub struct SqlUserRepository {
    pool: SqlitePool,
}

impl SqlUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Columns are read positionally: Id, Name, Email, CreatedAt
fn user_from_row(row: &SqliteRow) -> std::result::Result<User, sqlx::Error> {
    let id: Hyphenated = row.try_get(0)?;
    Ok(User {
        id: id.into_uuid(),
        name: row.try_get(1)?,
        email: row.try_get(2)?,
        created_at: row.try_get(3)?,
    })
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        debug!("Repository: Finding user by ID: {}", id);

        let row = sqlx::query("SELECT Id, Name, Email, CreatedAt FROM Users WHERE Id = ?")
            .bind(id.hyphenated())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("select", e))?;

        row.as_ref()
            .map(user_from_row)
            .transpose()
            .map_err(|e| map_sqlx_error("decode", e))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Repository: Finding user by email: {}", email);

        let row = sqlx::query("SELECT Id, Name, Email, CreatedAt FROM Users WHERE Email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("select", e))?;

        row.as_ref()
            .map(user_from_row)
            .transpose()
            .map_err(|e| map_sqlx_error("decode", e))
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT Id, Name, Email, CreatedAt FROM Users")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("select", e))?;

        let mut users = Vec::with_capacity(rows.len());
        for row in &rows {
            users.push(user_from_row(row).map_err(|e| map_sqlx_error("decode", e))?);
        }

        debug!("Repository: Loaded {} users", users.len());
        Ok(users)
    }

    async fn add(&self, user: &User) -> Result<()> {
        debug!("Repository: Inserting user: {}", user.id);

        sqlx::query("INSERT INTO Users (Id, Name, Email, CreatedAt) VALUES (?, ?, ?, ?)")
            .bind(user.id.hyphenated())
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("insert", e))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<u64> {
        // CreatedAt is immutable once inserted
        let result = sqlx::query("UPDATE Users SET Name = ?, Email = ? WHERE Id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id.hyphenated())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("update", e))?;

        debug!(
            "Repository: Updated user {} ({} rows affected)",
            user.id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Users WHERE Id = ?")
            .bind(id.hyphenated())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        debug!(
            "Repository: Deleted user {} ({} rows affected)",
            id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
