//! Community board: posts, images, likes and comments.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{board::BoardRepository, board_comment::BoardCommentRepository},
    error::{board::BoardError, AppError},
    model::{
        board::{
            Board, BoardDetail, BoardSearchParams, BoardSummary, Comment, CreateBoardParams,
            ImageUpload, LikeToggle, UpdateBoardParams,
        },
        user::User,
    },
    service::storage::ImageStorage,
    util::validate,
};

const TITLE_MAX: usize = 100;
const COMMENT_MAX: usize = 500;

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn list(&self, params: BoardSearchParams) -> Result<Vec<BoardSummary>, AppError> {
        let boards = BoardRepository::new(self.db).search(params).await?;

        Ok(boards)
    }

    /// Creates a post, uploading its images first.
    ///
    /// When an upload or the insert fails, images already stored for this post are removed
    /// again on a best-effort basis.
    ///
    /// # Returns
    /// - `Ok(Board)` - Created post
    /// - `Err(AppError::Validation)` - Title or content out of range
    /// - `Err(AppError::StorageErr)` - Image upload failed
    pub async fn create(
        &self,
        user: &User,
        title: String,
        content: String,
        images: Vec<ImageUpload>,
    ) -> Result<Board, AppError> {
        let title = title.trim().to_string();
        validate::length("title", &title, 1, TITLE_MAX)?;
        validate::not_blank("content", &content)?;

        let mut image_urls = Vec::with_capacity(images.len());
        for image in images {
            match self.storage.upload(&image.filename, image.bytes).await {
                Ok(url) => image_urls.push(url),
                Err(e) => {
                    self.remove_images(&image_urls).await;
                    return Err(e);
                }
            }
        }

        let result = BoardRepository::new(self.db)
            .create(CreateBoardParams {
                user_id: user.id,
                title,
                content,
                image_urls: image_urls.clone(),
            })
            .await;

        match result {
            Ok(board) => Ok(board),
            Err(e) => {
                self.remove_images(&image_urls).await;
                Err(e.into())
            }
        }
    }

    pub async fn get_detail(&self, board_id: i32) -> Result<BoardDetail, AppError> {
        let detail = BoardRepository::new(self.db)
            .get_detail(board_id)
            .await?
            .ok_or(BoardError::NotFound(board_id))?;

        Ok(detail)
    }

    /// Edits the title and/or content of the caller's post.
    ///
    /// # Returns
    /// - `Ok(Board)` - Updated post
    /// - `Err(BoardError::NotFound)` - Post missing or deleted
    /// - `Err(BoardError::Forbidden)` - Caller is not the author
    pub async fn update(
        &self,
        user: &User,
        board_id: i32,
        params: UpdateBoardParams,
    ) -> Result<Board, AppError> {
        self.require_owned(user, board_id).await?;

        if let Some(title) = &params.title {
            validate::length("title", title.trim(), 1, TITLE_MAX)?;
        }
        if let Some(content) = &params.content {
            validate::not_blank("content", content)?;
        }

        let params = UpdateBoardParams {
            title: params.title.map(|title| title.trim().to_string()),
            content: params.content,
        };

        let board = BoardRepository::new(self.db).update(board_id, params).await?;

        Ok(board)
    }

    /// Hides the caller's post and removes its images from storage.
    pub async fn delete(&self, user: &User, board_id: i32) -> Result<(), AppError> {
        self.require_owned(user, board_id).await?;

        let image_urls = BoardRepository::new(self.db).soft_delete(board_id).await?;
        self.remove_images(&image_urls).await;

        Ok(())
    }

    pub async fn toggle_like(&self, user: &User, board_id: i32) -> Result<LikeToggle, AppError> {
        self.require_visible(board_id).await?;

        let toggle = BoardRepository::new(self.db)
            .toggle_like(board_id, user.id)
            .await?;

        Ok(toggle)
    }

    pub async fn add_comment(
        &self,
        user: &User,
        board_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let content = content.trim().to_string();
        validate::length("comment", &content, 1, COMMENT_MAX)?;

        self.require_visible(board_id).await?;

        let comment = BoardCommentRepository::new(self.db)
            .create(board_id, user.id, content)
            .await?;

        Ok(comment)
    }

    pub async fn list_comments(&self, board_id: i32) -> Result<Vec<Comment>, AppError> {
        self.require_visible(board_id).await?;

        let comments = BoardCommentRepository::new(self.db)
            .get_visible_by_board(board_id)
            .await?;

        Ok(comments)
    }

    /// Hides one of the caller's comments.
    ///
    /// # Returns
    /// - `Ok(())` - Comment hidden
    /// - `Err(BoardError::CommentNotFound)` - Comment missing or already deleted
    /// - `Err(BoardError::CommentForbidden)` - Caller is not the author
    pub async fn delete_comment(&self, user: &User, comment_id: i32) -> Result<(), AppError> {
        let comment_repo = BoardCommentRepository::new(self.db);

        let comment = comment_repo
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.status)
            .ok_or(BoardError::CommentNotFound(comment_id))?;

        if comment.user_id != user.id {
            return Err(BoardError::CommentForbidden(comment_id).into());
        }

        comment_repo.soft_delete(comment_id).await?;

        Ok(())
    }

    async fn require_visible(&self, board_id: i32) -> Result<Board, AppError> {
        let board = BoardRepository::new(self.db)
            .find_visible_by_id(board_id)
            .await?
            .ok_or(BoardError::NotFound(board_id))?;

        Ok(board)
    }

    async fn require_owned(&self, user: &User, board_id: i32) -> Result<Board, AppError> {
        let board = self.require_visible(board_id).await?;

        if board.user_id != user.id {
            return Err(BoardError::Forbidden(board_id).into());
        }

        Ok(board)
    }

    async fn remove_images(&self, urls: &[String]) {
        for url in urls {
            if let Err(e) = self.storage.delete(url).await {
                tracing::warn!("Failed to delete image {}: {}", url, e);
            }
        }
    }
}
