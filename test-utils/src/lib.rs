//! Foodthing Test Utils
//!
//! Shared testing utilities for the foodthing server. The crate offers a builder for test
//! contexts backed by in-memory SQLite databases, entity factories with sensible defaults,
//! and a throwaway HTTP server for imitating third-party APIs.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders that insert entities with defaults
//! - **MockServer**: Local axum server standing in for OAuth providers and LLM endpoints
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_board_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_board_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = test_utils::factory::create_user(db).await?;
//!     let board = test_utils::factory::create_board(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod mock;
