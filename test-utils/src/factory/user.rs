//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{Gender, SocialAuth, UserStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("cook@example.com")
///     .status(UserStatus::Inactive)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    name: String,
    nickname: String,
    birth: NaiveDate,
    gender: Option<Gender>,
    phone_num: Option<String>,
    social_auth: SocialAuth,
    social_id: Option<String>,
    status: UserStatus,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - password: `"not-a-hash"`, so password checks against it fail
    /// - name: `"User {id}"`, nickname: `"user{id}"`
    /// - birth: 2000-01-01, gender: `Male`
    /// - phone_num and social_id: `None`, social_auth: `None`
    /// - status: `Active`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            password: "not-a-hash".to_string(),
            name: format!("User {}", id),
            nickname: format!("user{}", id),
            birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            gender: Some(Gender::Male),
            phone_num: None,
            social_auth: SocialAuth::None,
            social_id: None,
            status: UserStatus::Active,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    ///
    /// # Arguments
    /// - `hash` - Already hashed password string
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password = hash.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn birth(mut self, birth: NaiveDate) -> Self {
        self.birth = birth;
        self
    }

    /// Sets the stored phone digest.
    pub fn phone_num(mut self, digest: impl Into<String>) -> Self {
        self.phone_num = Some(digest.into());
        self
    }

    /// Marks the user as linked to a social provider account.
    ///
    /// # Arguments
    /// - `provider` - Provider the account came from
    /// - `social_id` - Provider side account id
    pub fn social(mut self, provider: SocialAuth, social_id: impl Into<String>) -> Self {
        self.social_auth = provider;
        self.social_id = Some(social_id.into());
        self.gender = None;
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            name: ActiveValue::Set(self.name),
            nickname: ActiveValue::Set(self.nickname),
            birth: ActiveValue::Set(self.birth),
            gender: ActiveValue::Set(self.gender),
            phone_num: ActiveValue::Set(self.phone_num),
            social_auth: ActiveValue::Set(self.social_auth),
            social_id: ActiveValue::Set(self.social_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
