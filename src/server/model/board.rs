//! Board domain models and parameters.
//!
//! Posts and comments are soft deleted through their `status` flag; the repositories only
//! hand out visible rows.

use axum::body::Bytes;
use chrono::{DateTime, Utc};

use crate::model::board::{
    BoardDetailDto, BoardListItemDto, CommentDto, LikeToggleDto, UpdateBoardDto,
};

/// Upper bound for a single page of the board list.
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub like_count: i32,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn from_entity(entity: entity::board::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            like_count: entity.like_count,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// List entry with the author's nickname and first image.
#[derive(Debug, Clone)]
pub struct BoardSummary {
    pub board: Board,
    pub nickname: String,
    pub thumbnail: Option<String>,
}

impl BoardSummary {
    pub fn into_dto(self) -> BoardListItemDto {
        BoardListItemDto {
            id: self.board.id,
            title: self.board.title,
            nickname: self.nickname,
            like_count: self.board.like_count,
            thumbnail: self.thumbnail,
            created_at: self.board.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoardDetail {
    pub board: Board,
    pub nickname: String,
    /// Image URLs in upload order.
    pub images: Vec<String>,
}

impl BoardDetail {
    pub fn into_dto(self) -> BoardDetailDto {
        BoardDetailDto {
            id: self.board.id,
            user_id: self.board.user_id,
            nickname: self.nickname,
            title: self.board.title,
            content: self.board.content,
            like_count: self.board.like_count,
            images: self.images,
            created_at: self.board.created_at,
            updated_at: self.board.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub board_id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub content: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts a comment row and its author at the repository boundary.
    ///
    /// A missing author renders as an empty nickname.
    pub fn from_entity(
        entity: entity::board_comment::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            board_id: entity.board_id,
            user_id: entity.user_id,
            nickname: author.map(|u| u.nickname).unwrap_or_default(),
            content: entity.content,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            board_id: self.board_id,
            user_id: self.user_id,
            nickname: self.nickname,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Outcome of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub liked: bool,
    pub like_count: i32,
}

impl LikeToggle {
    pub fn into_dto(self) -> LikeToggleDto {
        LikeToggleDto {
            liked: self.liked,
            like_count: self.like_count,
        }
    }
}

/// Filters for the board list.
#[derive(Debug, Clone, Default)]
pub struct BoardSearchParams {
    pub skip: u64,
    pub limit: u64,
    /// Substring of the title.
    pub title: Option<String>,
    /// Substring of the author's nickname.
    pub nickname: Option<String>,
}

impl BoardSearchParams {
    /// Builds search parameters, clamping `limit` to `1..=MAX_PAGE_SIZE` and dropping
    /// blank filters.
    pub fn new(skip: u64, limit: u64, title: Option<String>, nickname: Option<String>) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            title: title.filter(|t| !t.trim().is_empty()),
            nickname: nickname.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBoardParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateBoardParams {
    pub fn from_dto(dto: UpdateBoardDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }
}

/// One file from a multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Bytes,
}
