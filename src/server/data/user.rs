use entity::sea_orm_active_enums::{SocialAuth, UserStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active user.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            name: ActiveValue::Set(params.name),
            nickname: ActiveValue::Set(params.nickname),
            birth: ActiveValue::Set(params.birth),
            gender: ActiveValue::Set(params.gender),
            phone_num: ActiveValue::Set(params.phone_digest),
            social_auth: ActiveValue::Set(params.social_auth),
            social_id: ActiveValue::Set(params.social_id),
            status: ActiveValue::Set(UserStatus::Active),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds the account linked to a provider account id.
    pub async fn find_by_social(
        &self,
        social_auth: SocialAuth,
        social_id: &str,
    ) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::SocialAuth.eq(social_auth))
            .filter(entity::user::Column::SocialId.eq(social_id))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds an active local account by its recovery identity.
    pub async fn find_by_identity(
        &self,
        name: &str,
        birth: chrono::NaiveDate,
        phone_digest: &str,
    ) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .filter(entity::user::Column::Birth.eq(birth))
            .filter(entity::user::Column::PhoneNum.eq(phone_digest))
            .filter(entity::user::Column::Status.eq(UserStatus::Active))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn nickname_exists(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn phone_exists(&self, phone_digest: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNum.eq(phone_digest))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the stored password hash.
    ///
    /// # Returns
    /// - `Err(DbErr::RecordNotFound)` - No user with the given id
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active: entity::user::ActiveModel = user.into();
        active.password = ActiveValue::Set(password_hash);
        active.update(self.db).await?;

        Ok(())
    }

    /// Sets the account status; withdrawal is a switch to `Inactive`.
    ///
    /// # Returns
    /// - `Err(DbErr::RecordNotFound)` - No user with the given id
    pub async fn set_status(&self, id: i32, status: UserStatus) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active: entity::user::ActiveModel = user.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await?;

        Ok(())
    }
}
