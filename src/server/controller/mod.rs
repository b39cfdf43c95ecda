//! HTTP request handlers.
//!
//! Handlers authenticate the caller through `AuthGuard`, turn DTOs into parameter types,
//! call a service and convert the resulting domain model back into a DTO. Every handler
//! carries a `#[utoipa::path]` annotation collected by the OpenAPI document in `router`.

pub mod board;
pub mod health;
pub mod ingredient;
pub mod recipe;
pub mod social;
pub mod user;

#[cfg(test)]
mod test;
