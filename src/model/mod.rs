//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON bodies accepted and returned by the server. They derive
//! `ToSchema` so the OpenAPI document stays in sync with the handlers.

pub mod api;
pub mod board;
pub mod ingredient;
pub mod recipe;
pub mod user;
