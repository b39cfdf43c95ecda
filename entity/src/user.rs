use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Gender, SocialAuth, UserStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub name: String,
    #[sea_orm(unique)]
    pub nickname: String,
    pub birth: Date,
    pub gender: Option<Gender>,
    #[sea_orm(unique)]
    pub phone_num: Option<String>,
    pub social_auth: SocialAuth,
    pub social_id: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::board::Entity")]
    Board,
    #[sea_orm(has_many = "super::board_comment::Entity")]
    BoardComment,
    #[sea_orm(has_many = "super::board_like::Entity")]
    BoardLike,
    #[sea_orm(has_many = "super::ingredient::Entity")]
    Ingredient,
    #[sea_orm(has_many = "super::expiration_alert::Entity")]
    ExpirationAlert,
    #[sea_orm(has_many = "super::like_recipe::Entity")]
    LikeRecipe,
}

impl Related<super::board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Board.def()
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

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl Related<super::expiration_alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpirationAlert.def()
    }
}

impl Related<super::like_recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LikeRecipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
