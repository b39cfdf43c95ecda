use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub like_count: i32,
    pub status: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::board_image::Entity")]
    BoardImage,
    #[sea_orm(has_many = "super::board_comment::Entity")]
    BoardComment,
    #[sea_orm(has_many = "super::board_like::Entity")]
    BoardLike,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::board_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardImage.def()
    }
}

impl Related<super::board_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardComment.def()
    }
}

impl Related<super::board_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardLike.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
