//! Social login providers and the normalized profile they produce.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Gender, SocialAuth};

use crate::server::error::social::SocialError;

/// Width of the user name column.
const NAME_MAX: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    Naver,
    Kakao,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Naver => "naver",
            Self::Kakao => "kakao",
        }
    }

    /// Prefix of generated nicknames, e.g. `g_1234`.
    pub fn nickname_prefix(&self) -> &'static str {
        match self {
            Self::Google => "g",
            Self::Naver => "n",
            Self::Kakao => "k",
        }
    }

    pub fn social_auth(&self) -> SocialAuth {
        match self {
            Self::Google => SocialAuth::Google,
            Self::Naver => SocialAuth::Naver,
            Self::Kakao => SocialAuth::Kakao,
        }
    }

    /// Scopes requested on the consent screen.
    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            Self::Google => &["openid", "email", "profile"],
            Self::Naver => &[],
            Self::Kakao => &["profile_nickname", "account_email"],
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialProvider {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "naver" => Ok(Self::Naver),
            "kakao" => Ok(Self::Kakao),
            other => Err(SocialError::UnknownProvider(other.to_string())),
        }
    }
}

/// Provider account details mapped onto our user fields.
///
/// Only `social_id` is guaranteed; everything else depends on the scopes the user granted.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialProfile {
    pub provider: SocialProvider,
    pub social_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub birth: Option<NaiveDate>,
}

impl SocialProfile {
    /// Email to store for the account, synthesized when the provider withholds it.
    pub fn account_email(&self) -> String {
        match &self.email {
            Some(email) if !email.trim().is_empty() => email.trim().to_string(),
            _ => format!("{}_{}@social.local", self.provider.as_str(), self.social_id),
        }
    }

    pub fn nickname(&self) -> String {
        format!("{}_{}", self.provider.nickname_prefix(), self.social_id)
    }

    /// Display name, falling back to the generated nickname, cut to the name column width.
    pub fn display_name(&self) -> String {
        let name = match &self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => self.nickname(),
        };

        name.chars().take(NAME_MAX).collect()
    }
}
