//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Foreign keys are passed in
//! explicitly, so parents have to be created first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let category = factory::create_category(&db).await?;
//! let ingredient = factory::create_ingredient(&db, user.id, category.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("cook@example.com")
//!     .nickname("cook")
//!     .password_hash(hash)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Local and social accounts
//! - `board` - Board posts, images and comments
//! - `ingredient_category` - Inventory categories
//! - `ingredient` - Inventory rows and their expiration alerts
//! - `like_recipe` - Saved recipes
//! - `helpers` - ID generation and multi-entity setups

pub mod board;
pub mod helpers;
pub mod ingredient;
pub mod ingredient_category;
pub mod like_recipe;
pub mod user;

pub use board::{create_board, create_comment};
pub use ingredient::{create_alert, create_ingredient};
pub use ingredient_category::create_category;
pub use like_recipe::create_like_recipe;
pub use user::create_user;
