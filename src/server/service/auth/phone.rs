use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::server::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Keyed digest stored in place of a phone number.
///
/// Separators are ignored so `010-1234-5678` and `01012345678` map to the same digest, which
/// keeps the unique constraint on `users.phone_num` meaningful.
///
/// # Returns
/// - `Ok(String)` - Lowercase hex HMAC-SHA256 of the digits
/// - `Err(AppError::InternalError)` - Pepper rejected as a key
pub fn phone_digest(pepper: &str, phone: &str) -> Result<String, AppError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut mac = HmacSha256::new_from_slice(pepper.as_bytes())
        .map_err(|e| AppError::InternalError(format!("Invalid phone pepper: {}", e)))?;
    mac.update(digits.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}
