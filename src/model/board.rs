use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct BoardListItemDto {
    pub id: i32,
    pub title: String,
    pub nickname: String,
    pub like_count: i32,
    /// First attached image, if any.
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct BoardDetailDto {
    pub id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub title: String,
    pub content: String,
    pub like_count: i32,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateBoardDto {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Acknowledgement returned after creating or editing a post.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct BoardMutationDto {
    pub message: String,
    pub board_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct LikeToggleDto {
    pub liked: bool,
    pub like_count: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateCommentForm {
    pub comment: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CommentDto {
    pub id: i32,
    pub board_id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
