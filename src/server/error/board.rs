use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum BoardError {
    /// Post does not exist or has been soft deleted.
    #[error("Board not found")]
    NotFound(i32),

    #[error("You are not allowed to modify this board")]
    Forbidden(i32),

    #[error("Comment not found")]
    CommentNotFound(i32),

    #[error("You are not allowed to modify this comment")]
    CommentForbidden(i32),
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "BOARD_NOT_FOUND"),
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, "BOARD_FORBIDDEN"),
            Self::CommentNotFound(_) => (StatusCode::NOT_FOUND, "COMMENT_NOT_FOUND"),
            Self::CommentForbidden(_) => (StatusCode::FORBIDDEN, "COMMENT_FORBIDDEN"),
        };

        error_response(status, code, self.to_string())
    }
}
