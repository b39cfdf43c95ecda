use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, LikeRecipe};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(LikeRecipe)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
    }

    /// Adds every table the community board touches.
    ///
    /// Tables in dependency order:
    /// - User
    /// - Board
    /// - BoardImage
    /// - BoardComment
    /// - BoardLike
    pub fn with_board_tables(self) -> Self {
        self.with_table(User)
            .with_table(Board)
            .with_table(BoardImage)
            .with_table(BoardComment)
            .with_table(BoardLike)
    }

    /// Adds the user table and the ingredient inventory tables.
    ///
    /// Tables in dependency order:
    /// - User
    /// - IngredientCategory
    /// - Ingredient
    /// - ExpirationAlert
    pub fn with_ingredient_tables(self) -> Self {
        self.with_table(User)
            .with_table(IngredientCategory)
            .with_table(Ingredient)
            .with_table(ExpirationAlert)
    }

    /// Adds the ingredient tables plus saved recipes and the food ranking.
    pub fn with_recipe_tables(self) -> Self {
        self.with_ingredient_tables()
            .with_table(LikeRecipe)
            .with_table(FoodRanking)
    }

    /// Adds the full schema, as used by router level tests.
    pub fn with_all_tables(self) -> Self {
        self.with_recipe_tables()
            .with_table(Board)
            .with_table(BoardImage)
            .with_table(BoardComment)
            .with_table(BoardLike)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
