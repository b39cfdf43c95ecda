use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub ingredient_name: String,
    pub category_id: i32,
    pub purchase_date: Date,
    pub expiration_date: Date,
    pub created_at: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::ingredient_category::Entity",
        from = "Column::CategoryId",
        to = "super::ingredient_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    IngredientCategory,
    #[sea_orm(has_many = "super::expiration_alert::Entity")]
    ExpirationAlert,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::ingredient_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IngredientCategory.def()
    }
}

impl Related<super::expiration_alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpirationAlert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
