//! Application layer services implementing business logic.
//!
//! Services consume repository traits from the domain layer and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Token issuance, verification, password login
//! - [`services::batch_service::BatchService`] - Batch queries
//! - [`services::sensor_service::SensorService`] - Sensor queries
//! - [`services::measurement_service::MeasurementService`] - Temperature readings

pub mod services;
