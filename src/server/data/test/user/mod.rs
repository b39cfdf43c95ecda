use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Gender, SocialAuth, UserStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_identity;
mod find_by_social;
mod set_status;

fn local_user_params(email: &str, nickname: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Cook".to_string(),
        nickname: nickname.to_string(),
        birth: NaiveDate::from_ymd_opt(1995, 4, 2).unwrap(),
        gender: Some(Gender::Female),
        phone_digest: Some(format!("digest-{}", nickname)),
        social_auth: SocialAuth::None,
        social_id: None,
    }
}
