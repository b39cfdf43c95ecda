//! User domain models and parameters.
//!
//! Covers local accounts created through sign-up and accounts linked to a social provider.
//! Passwords and phone numbers only ever appear here in their hashed forms.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{Gender, SocialAuth, UserStatus};

use crate::model::user::{ChangePasswordDto, FindIdDto, GenderDto, SignUpDto, UserDto};

/// Stored user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub name: String,
    pub nickname: String,
    pub birth: NaiveDate,
    pub gender: Option<Gender>,
    /// Keyed digest of the phone number, `None` for social accounts.
    pub phone_digest: Option<String>,
    pub social_auth: SocialAuth,
    pub social_id: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password,
            name: entity.name,
            nickname: entity.nickname,
            birth: entity.birth,
            gender: entity.gender,
            phone_digest: entity.phone_num,
            social_auth: entity.social_auth,
            social_id: entity.social_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            nickname: self.nickname,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

impl From<GenderDto> for Gender {
    fn from(dto: GenderDto) -> Self {
        match dto {
            GenderDto::Male => Gender::Male,
            GenderDto::Female => Gender::Female,
        }
    }
}

/// Raw sign-up input, validated and hashed by `UserService::sign_up`.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub email: String,
    pub password: String,
    pub checked_password: String,
    pub name: String,
    pub nickname: String,
    pub birth: NaiveDate,
    pub gender: Gender,
    pub phone_num: String,
}

impl SignUpParams {
    /// Converts the request DTO, trimming surrounding whitespace from identity fields.
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
            checked_password: dto.checked_password,
            name: dto.name.trim().to_string(),
            nickname: dto.nickname.trim().to_string(),
            birth: dto.birth,
            gender: dto.gender.into(),
            phone_num: dto.phone_num.trim().to_string(),
        }
    }
}

/// Row values for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub nickname: String,
    pub birth: NaiveDate,
    pub gender: Option<Gender>,
    pub phone_digest: Option<String>,
    pub social_auth: SocialAuth,
    pub social_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordParams {
    pub fn from_dto(dto: ChangePasswordDto) -> Self {
        Self {
            current_password: dto.current_password,
            new_password: dto.new_password,
            confirm_password: dto.confirm_password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FindIdParams {
    pub name: String,
    pub birth: NaiveDate,
    pub phone_num: String,
}

impl FindIdParams {
    pub fn from_dto(dto: FindIdDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            birth: dto.birth,
            phone_num: dto.phone_num.trim().to_string(),
        }
    }
}
