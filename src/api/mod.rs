//! REST client for OpenStack-compatible control planes

pub mod client;
pub mod error;
pub mod http;
pub mod security_groups;
pub mod volume_types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, LookupError};
