//! Board factories for posts, images and comments.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating board posts.
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    content: String,
    like_count: i32,
    status: bool,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory for the given author.
    ///
    /// Defaults:
    /// - title: `"Board {id}"`
    /// - content: `"Content {id}"`
    /// - like_count: `0`
    /// - status: `true` (visible)
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Board {}", id),
            content: format!("Content {}", id),
            like_count: 0,
            status: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn like_count(mut self, like_count: i32) -> Self {
        self.like_count = like_count;
        self
    }

    /// Sets visibility. `false` creates a soft-deleted post.
    pub fn status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        let now = Utc::now();
        entity::board::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            like_count: ActiveValue::Set(self.like_count),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible board post for `user_id`.
pub async fn create_board(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, user_id).build().await
}

/// Attaches an image URL to a board post.
pub async fn create_image(
    db: &DatabaseConnection,
    board_id: i32,
    image_url: impl Into<String>,
) -> Result<entity::board_image::Model, DbErr> {
    entity::board_image::ActiveModel {
        board_id: ActiveValue::Set(board_id),
        image_url: ActiveValue::Set(image_url.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a visible comment on `board_id` written by `user_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    board_id: i32,
    user_id: i32,
) -> Result<entity::board_comment::Model, DbErr> {
    entity::board_comment::ActiveModel {
        board_id: ActiveValue::Set(board_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        status: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
