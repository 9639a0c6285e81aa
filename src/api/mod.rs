//! HTTP API Layer
//!
//! Typed client for the Baseline sleep analysis backend.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, DEFAULT_API_BASE};
pub use error::ApiError;
pub use types::*;
