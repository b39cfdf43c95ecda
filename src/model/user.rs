use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenderDto {
    Male,
    Female,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SignUpDto {
    pub email: String,
    pub password: String,
    pub checked_password: String,
    pub name: String,
    pub nickname: String,
    pub birth: NaiveDate,
    pub gender: GenderDto,
    /// Phone number, digits only or separated by dashes.
    pub phone_num: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct LogInDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TokenDto {
    pub access_token: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub nickname: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct FindIdDto {
    pub name: String,
    pub birth: NaiveDate,
    pub phone_num: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct FoundIdDto {
    pub email: String,
}

/// Provider authorization URL the client should navigate to.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AuthUrlDto {
    pub auth_url: String,
}
