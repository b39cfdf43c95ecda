//! Credential primitives: password hashing, phone digests and access tokens.

pub mod jwt;
pub mod password;
pub mod phone;
