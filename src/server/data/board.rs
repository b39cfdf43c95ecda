use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::board::{
    Board, BoardDetail, BoardSearchParams, BoardSummary, CreateBoardParams, LikeToggle,
    UpdateBoardParams,
};

pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a visible post together with its image rows in one transaction.
    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, DbErr> {
        let now = chrono::Utc::now();
        let txn = self.db.begin().await?;

        let board = entity::board::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            like_count: ActiveValue::Set(0),
            status: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for image_url in params.image_urls {
            entity::board_image::ActiveModel {
                board_id: ActiveValue::Set(board.id),
                image_url: ActiveValue::Set(image_url),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Board::from_entity(board))
    }

    /// Gets a post by ID unless it has been soft deleted.
    pub async fn find_visible_by_id(&self, id: i32) -> Result<Option<Board>, DbErr> {
        let board = entity::prelude::Board::find_by_id(id)
            .filter(entity::board::Column::Status.eq(true))
            .one(self.db)
            .await?;

        Ok(board.map(Board::from_entity))
    }

    /// Gets a visible post with the author's nickname and its images.
    pub async fn get_detail(&self, id: i32) -> Result<Option<BoardDetail>, DbErr> {
        let Some((board, author)) = entity::prelude::Board::find_by_id(id)
            .filter(entity::board::Column::Status.eq(true))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let images = entity::prelude::BoardImage::find()
            .filter(entity::board_image::Column::BoardId.eq(id))
            .order_by_asc(entity::board_image::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|image| image.image_url)
            .collect();

        Ok(Some(BoardDetail {
            board: Board::from_entity(board),
            nickname: author.map(|u| u.nickname).unwrap_or_default(),
            images,
        }))
    }

    /// Lists visible posts newest first, optionally filtered by title and author nickname.
    pub async fn search(&self, params: BoardSearchParams) -> Result<Vec<BoardSummary>, DbErr> {
        let mut query = entity::prelude::Board::find()
            .filter(entity::board::Column::Status.eq(true))
            .find_also_related(entity::prelude::User);

        if let Some(title) = params.title.as_deref() {
            query = query.filter(entity::board::Column::Title.contains(title));
        }
        if let Some(nickname) = params.nickname.as_deref() {
            query = query.filter(entity::user::Column::Nickname.contains(nickname));
        }

        let rows = query
            .order_by_desc(entity::board::Column::CreatedAt)
            .order_by_desc(entity::board::Column::Id)
            .offset(params.skip)
            .limit(params.limit)
            .all(self.db)
            .await?;

        let board_ids: Vec<i32> = rows.iter().map(|(board, _)| board.id).collect();

        // First image of each post, by upload order
        let mut thumbnails: HashMap<i32, String> = HashMap::new();
        if !board_ids.is_empty() {
            let images = entity::prelude::BoardImage::find()
                .filter(entity::board_image::Column::BoardId.is_in(board_ids))
                .order_by_asc(entity::board_image::Column::Id)
                .all(self.db)
                .await?;

            for image in images {
                thumbnails.entry(image.board_id).or_insert(image.image_url);
            }
        }

        Ok(rows
            .into_iter()
            .map(|(board, author)| BoardSummary {
                thumbnail: thumbnails.remove(&board.id),
                nickname: author.map(|u| u.nickname).unwrap_or_default(),
                board: Board::from_entity(board),
            })
            .collect())
    }

    /// Applies the provided fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Err(DbErr::RecordNotFound)` - No post with the given id
    pub async fn update(&self, id: i32, params: UpdateBoardParams) -> Result<Board, DbErr> {
        let board = entity::prelude::Board::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Board with id {} not found", id)))?;

        let mut active: entity::board::ActiveModel = board.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        active.updated_at = ActiveValue::Set(chrono::Utc::now());

        let board = active.update(self.db).await?;

        Ok(Board::from_entity(board))
    }

    /// Hides the post and detaches its images.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - URLs of the removed images, for storage cleanup
    /// - `Err(DbErr::RecordNotFound)` - No post with the given id
    pub async fn soft_delete(&self, id: i32) -> Result<Vec<String>, DbErr> {
        let txn = self.db.begin().await?;

        let board = entity::prelude::Board::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Board with id {} not found", id)))?;

        let images = entity::prelude::BoardImage::find()
            .filter(entity::board_image::Column::BoardId.eq(id))
            .all(&txn)
            .await?;

        entity::prelude::BoardImage::delete_many()
            .filter(entity::board_image::Column::BoardId.eq(id))
            .exec(&txn)
            .await?;

        let mut active: entity::board::ActiveModel = board.into();
        active.status = ActiveValue::Set(false);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());
        active.update(&txn).await?;

        txn.commit().await?;

        Ok(images.into_iter().map(|image| image.image_url).collect())
    }

    /// Adds or removes the user's like and adjusts `like_count` in one transaction.
    ///
    /// The count never drops below zero.
    ///
    /// # Returns
    /// - `Ok(LikeToggle)` - Whether the post is now liked and the new count
    /// - `Err(DbErr::RecordNotFound)` - No post with the given id
    pub async fn toggle_like(&self, board_id: i32, user_id: i32) -> Result<LikeToggle, DbErr> {
        let txn = self.db.begin().await?;

        let board = entity::prelude::Board::find_by_id(board_id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Board with id {} not found",
                board_id
            )))?;

        let existing = entity::prelude::BoardLike::find_by_id((board_id, user_id))
            .one(&txn)
            .await?;

        let toggle = match existing {
            Some(like) => {
                like.delete(&txn).await?;
                LikeToggle {
                    liked: false,
                    like_count: (board.like_count - 1).max(0),
                }
            }
            None => {
                entity::prelude::BoardLike::insert(entity::board_like::ActiveModel {
                    board_id: ActiveValue::Set(board_id),
                    user_id: ActiveValue::Set(user_id),
                    created_at: ActiveValue::Set(chrono::Utc::now()),
                })
                .exec_without_returning(&txn)
                .await?;
                LikeToggle {
                    liked: true,
                    like_count: board.like_count + 1,
                }
            }
        };

        let mut active: entity::board::ActiveModel = board.into();
        active.like_count = ActiveValue::Set(toggle.like_count);
        active.update(&txn).await?;

        txn.commit().await?;

        Ok(toggle)
    }
}
