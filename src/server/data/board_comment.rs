use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::board::Comment;

pub struct BoardCommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardCommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a visible comment and returns it with the author's nickname.
    pub async fn create(
        &self,
        board_id: i32,
        user_id: i32,
        content: String,
    ) -> Result<Comment, DbErr> {
        let comment = entity::board_comment::ActiveModel {
            board_id: ActiveValue::Set(board_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content),
            status: ActiveValue::Set(true),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(Comment::from_entity(comment, author))
    }

    /// Gets a comment by ID regardless of its visibility.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let comment = entity::prelude::BoardComment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(comment.map(|(comment, author)| Comment::from_entity(comment, author)))
    }

    /// Lists the visible comments of a post, oldest first.
    pub async fn get_visible_by_board(&self, board_id: i32) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::BoardComment::find()
            .filter(entity::board_comment::Column::BoardId.eq(board_id))
            .filter(entity::board_comment::Column::Status.eq(true))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::board_comment::Column::CreatedAt)
            .order_by_asc(entity::board_comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(comments
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author))
            .collect())
    }

    /// Hides a comment.
    ///
    /// # Returns
    /// - `Err(DbErr::RecordNotFound)` - No comment with the given id
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        let comment = entity::prelude::BoardComment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Comment with id {} not found", id)))?;

        let mut active: entity::board_comment::ActiveModel = comment.into();
        active.status = ActiveValue::Set(false);
        active.update(self.db).await?;

        Ok(())
    }
}
