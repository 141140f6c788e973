//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User lookup and creation
//! - [`PgTokenRepository`] - Bearer token records
//! - [`PgBatchRepository`] - Batch range queries
//! - [`PgSensorRepository`] - Sensor range queries
//! - [`PgMeasurementRepository`] - Temperature readings

pub mod pg_batch_repository;
pub mod pg_measurement_repository;
pub mod pg_sensor_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_batch_repository::PgBatchRepository;
pub use pg_measurement_repository::PgMeasurementRepository;
pub use pg_sensor_repository::PgSensorRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
