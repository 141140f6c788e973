//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, mirroring the
//! database rows they are loaded from. Creation inputs use separate `New*`
//! structs so server-assigned columns (ids, timestamps) never appear in
//! insert paths.

pub mod auth_token;
pub mod batch;
pub mod measurement;
pub mod sensor;
pub mod user;

pub use auth_token::{AuthToken, NewAuthToken, Permission, TokenKind, TokenScope};
pub use batch::Batch;
pub use measurement::{NewTemperatureMeasurement, TemperatureMeasurement, TemperatureUnits};
pub use sensor::Sensor;
pub use user::{NewUser, User};
