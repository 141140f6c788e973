//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`pagination`] - Opaque-cursor pagination primitive
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits are implemented in
//! [`crate::infrastructure::persistence`] and business logic lives in
//! [`crate::application::services`].

pub mod entities;
pub mod pagination;
pub mod repositories;
