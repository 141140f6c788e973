//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod batches;
pub mod health;
pub mod login;
pub mod me;
pub mod measurements;
pub mod sensors;
pub mod tokens;

pub use batches::{batch_get_handler, batch_list_handler};
pub use health::health_handler;
pub use login::login_handler;
pub use me::me_handler;
pub use measurements::{
    measurement_get_handler, measurement_list_handler, measurement_record_handler,
};
pub use sensors::{sensor_get_handler, sensor_list_handler};
pub use tokens::{create_token_handler, list_tokens_handler, revoke_token_handler};
