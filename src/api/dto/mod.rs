//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Pagination cursors stay opaque: DTOs carry them as
//! plain strings.

pub mod batch;
pub mod health;
pub mod login;
pub mod measurement;
pub mod pagination;
pub mod sensor;
pub mod token;
pub mod user;
