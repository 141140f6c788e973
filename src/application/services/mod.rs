//! Business logic services for the application layer.

pub mod auth_service;
pub mod batch_service;
pub mod measurement_service;
pub mod sensor_service;

pub use auth_service::{AuthService, AuthSession, IssuedToken, hash_password};
pub use batch_service::BatchService;
pub use measurement_service::{MeasurementService, RecordMeasurement};
pub use sensor_service::SensorService;
