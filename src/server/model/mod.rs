//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the validated
//! input of an operation from the controller down to the repositories.

pub mod board;
pub mod ingredient;
pub mod recipe;
pub mod social;
pub mod user;
