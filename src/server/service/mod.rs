//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input, enforce
//! ownership rules, coordinate several repositories and talk to the external integrations
//! (object storage, OAuth providers and the language model endpoints). They work with domain
//! models and leave DTO conversion to the controllers.

pub mod auth;
pub mod board;
pub mod ingredient;
pub mod recipe;
pub mod social;
pub mod storage;
pub mod user;
