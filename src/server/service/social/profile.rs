//! Mapping of provider user-info payloads onto `SocialProfile`.
//!
//! Google answers `{id, email, name}`. Naver wraps its fields in `response` with gender
//! `M`/`F`, `birthyear` and `birthday` as `MM-DD`. Kakao nests everything under
//! `kakao_account`, uses `male`/`female` and sends `birthday` as `MMDD`.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::Gender;
use serde_json::Value;

use crate::server::{
    error::social::SocialError,
    model::social::{SocialProfile, SocialProvider},
};

/// Parses a user-info response body for `provider`.
///
/// # Returns
/// - `Ok(SocialProfile)` - Profile with at least a provider id
/// - `Err(SocialError::UserInfoError)` - Payload has no usable id
pub fn parse_profile(provider: SocialProvider, body: &Value) -> Result<SocialProfile, SocialError> {
    let profile = match provider {
        SocialProvider::Google => google(body),
        SocialProvider::Naver => naver(body),
        SocialProvider::Kakao => kakao(body),
    };

    profile.ok_or_else(|| {
        tracing::debug!("{} user info without id: {}", provider, body);
        SocialError::UserInfoError(format!("{} profile has no id", provider))
    })
}

fn google(body: &Value) -> Option<SocialProfile> {
    Some(SocialProfile {
        provider: SocialProvider::Google,
        social_id: id_of(body.get("id")?)?,
        email: text(body, "email"),
        name: text(body, "name"),
        gender: None,
        birth: None,
    })
}

fn naver(body: &Value) -> Option<SocialProfile> {
    let response = body.get("response")?;

    let gender = match text(response, "gender").as_deref() {
        Some("M") | Some("m") => Some(Gender::Male),
        Some("F") | Some("f") => Some(Gender::Female),
        _ => None,
    };

    let birth = match (text(response, "birthyear"), text(response, "birthday")) {
        (Some(year), Some(day)) => birth_date(&year, &day.replace('-', "")),
        _ => None,
    };

    Some(SocialProfile {
        provider: SocialProvider::Naver,
        social_id: id_of(response.get("id")?)?,
        email: text(response, "email"),
        name: text(response, "name"),
        gender,
        birth,
    })
}

fn kakao(body: &Value) -> Option<SocialProfile> {
    let social_id = id_of(body.get("id")?)?;
    let account = body.get("kakao_account").cloned().unwrap_or(Value::Null);

    let gender = match text(&account, "gender").as_deref() {
        Some("male") => Some(Gender::Male),
        Some("female") => Some(Gender::Female),
        _ => None,
    };

    let birth = match (text(&account, "birthyear"), text(&account, "birthday")) {
        (Some(year), Some(day)) => birth_date(&year, &day),
        _ => None,
    };

    let name = account
        .get("profile")
        .and_then(|profile| text(profile, "nickname"))
        .or_else(|| text(&account, "name"));

    Some(SocialProfile {
        provider: SocialProvider::Kakao,
        social_id,
        email: text(&account, "email"),
        name,
        gender,
        birth,
    })
}

/// Ids arrive as strings from Google and Naver and as numbers from Kakao.
fn id_of(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Builds a date from a `YYYY` year and an `MMDD` month-day.
fn birth_date(year: &str, month_day: &str) -> Option<NaiveDate> {
    if month_day.len() != 4 {
        return None;
    }

    let year = year.parse().ok()?;
    let month = month_day.get(0..2)?.parse().ok()?;
    let day = month_day.get(2..4)?.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
