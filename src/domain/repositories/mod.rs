//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod batch_repository;
pub mod measurement_repository;
pub mod sensor_repository;
pub mod token_repository;
pub mod user_repository;

pub use batch_repository::BatchRepository;
pub use measurement_repository::{MeasurementFilter, MeasurementRepository};
pub use sensor_repository::SensorRepository;
pub use token_repository::TokenRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use batch_repository::MockBatchRepository;
#[cfg(test)]
pub use measurement_repository::MockMeasurementRepository;
#[cfg(test)]
pub use sensor_repository::MockSensorRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
