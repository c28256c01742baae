use log::{debug, info};
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::store::schema::{DatabaseInitializer, InitOutcome};
use crate::store::sqlite::create_pool;

/// # SQLite test utilities
///
/// Tests run against a real SQLite file in a temporary directory rather than
/// `sqlite::memory:`, because every pooled connection to an in-memory database
/// would see its own empty database.
///
/// ## Example
/// ```rust,ignore
/// use roster_shared::test_utils::sqlite_test_utils::TestDb;
///
/// #[tokio::test]
/// async fn my_sql_test() {
///     let db = TestDb::initialized().await;
///     // db.pool() is ready, with the Users table and demo rows in place
/// }
/// ```
pub struct TestDb {
    pool: SqlitePool,
    database_url: String,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Creates an empty database file; no tables exist yet
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}", db_path.display());

        debug!("Creating test database at {}", database_url);
        let pool = create_pool(&database_url, 5).expect("Failed to create pool");

        Self {
            pool,
            database_url,
            _temp_dir: temp_dir,
        }
    }

    /// Creates a database with the Users table created and seeded
    pub async fn initialized() -> Self {
        let db = Self::new().await;
        let outcome = DatabaseInitializer::new(db.pool.clone())
            .initialize()
            .await
            .expect("Failed to initialize test database");
        assert_eq!(outcome, InitOutcome::Created);
        info!("Test database ready at {}", db.database_url);
        db
    }

    /// Creates a database with an empty Users table (no demo rows)
    pub async fn empty_table() -> Self {
        let db = Self::initialized().await;
        sqlx::query("DELETE FROM Users")
            .execute(&db.pool)
            .await
            .expect("Failed to clear Users table");
        db
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Row count of the Users table
    pub async fn count_users(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM Users")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }

    /// Number of tables in the database
    pub async fn count_tables(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count tables")
    }
}
