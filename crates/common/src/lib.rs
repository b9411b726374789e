//! Shared configuration and error handling for the Timekeeper's Archive API
//!
//! This crate provides common functionality used across the application:
//! - Configuration management following 12-factor principles
//! - Error types and the response-mapping layer

pub mod config;
pub mod error;

pub use config::{Config, Environment};
pub use error::{Error, Result};
