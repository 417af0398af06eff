//! Error types for client configuration.
//!
//! This module contains the error type raised while building or validating
//! a [`TaobaoConfig`](crate::TaobaoConfig). Request-time errors live in
//! [`client::errors`](crate::client::errors).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use taobao_api::{AppKey, ConfigError};
//!
//! let result = AppKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App key cannot be empty.
    #[error("App key cannot be empty. Please provide a valid Taobao app key.")]
    EmptyAppKey,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid Taobao secret key.")]
    EmptySecretKey,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a gateway URL with scheme (e.g., 'https://eco.taobao.com/router/rest').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// One or more required fields are missing.
    #[error("[{}] not included in your configuration.", fields.join(", "))]
    MissingRequiredFields {
        /// The names of the missing fields.
        fields: Vec<&'static str>,
    },
}
