use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory SQLite database backing a single test.
///
/// SeaORM keeps an in-memory SQLite pool on one connection, so clones of `db` handed to
/// application state see the same tables and rows as the factories.
#[derive(Default)]
pub struct TestContext {
    /// Set on first use by `database()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening `sqlite::memory:` the first time.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("test database missing".to_string()).into())
    }

    /// Runs `stmts` in order against the test database.
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists
    /// - `Err(TestError::Database)` - A statement failed, e.g. a foreign key names a table
    ///   that was not created first
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
