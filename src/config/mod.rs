//! Configuration types for the Taobao API client.
//!
//! This module provides the core configuration types used to initialize
//! a [`TaobaoClient`](crate::TaobaoClient) for API communication with the
//! Taobao Open Platform gateway.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TaobaoConfig`]: The main configuration struct holding all client settings
//! - [`TaobaoConfigBuilder`]: A builder for constructing [`TaobaoConfig`] instances
//! - [`AppKey`]: A validated app key newtype
//! - [`SecretKey`]: A validated secret key newtype with masked debug output
//! - [`Endpoint`]: A validated gateway endpoint URL
//!
//! # Example
//!
//! ```rust
//! use taobao_api::{TaobaoConfig, AppKey, SecretKey, Endpoint};
//!
//! let config = TaobaoConfig::builder()
//!     .app_key(AppKey::new("my-app-key").unwrap())
//!     .secret_key(SecretKey::new("my-secret").unwrap())
//!     .endpoint(Endpoint::new("https://eco.taobao.com/router/rest").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AppKey, Endpoint, SecretKey};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout, in seconds.
pub const REQUEST_TIMEOUT: u64 = 10;

/// Configuration for the Taobao API client.
///
/// This struct holds all settings needed for request signing and dispatch:
/// the app credentials, the gateway endpoint, and the per-request timeout.
/// It is immutable after construction; the client only reads it.
///
/// Loading the values from a file or the process environment is the
/// caller's responsibility. This crate only validates and carries them.
///
/// # Thread Safety
///
/// `TaobaoConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use taobao_api::{TaobaoConfig, AppKey, SecretKey, Endpoint};
///
/// let config = TaobaoConfig::builder()
///     .app_key(AppKey::new("my-app-key").unwrap())
///     .secret_key(SecretKey::new("my-secret").unwrap())
///     .endpoint(Endpoint::new("https://eco.taobao.com/router/rest").unwrap())
///     .pid("mm_12345678_0_0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.pid(), Some("mm_12345678_0_0"));
/// ```
#[derive(Clone, Debug)]
pub struct TaobaoConfig {
    app_key: AppKey,
    secret_key: SecretKey,
    endpoint: Endpoint,
    pid: Option<String>,
    timeout: Duration,
}

impl TaobaoConfig {
    /// Creates a new builder for constructing a `TaobaoConfig`.
    #[must_use]
    pub fn builder() -> TaobaoConfigBuilder {
        TaobaoConfigBuilder::new()
    }

    /// Returns the app key.
    #[must_use]
    pub const fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the gateway endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the Taobaoke affiliate pid, if configured.
    #[must_use]
    pub fn pid(&self) -> Option<&str> {
        self.pid.as_deref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Verify TaobaoConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TaobaoConfig>();
};

/// Builder for constructing [`TaobaoConfig`] instances.
///
/// Required fields are `app_key`, `secret_key`, and `endpoint`. When any of
/// them is missing, [`build`](Self::build) fails with a single error naming
/// every absent field, so misconfiguration can be fixed in one pass.
///
/// # Defaults
///
/// - `timeout`: 10 seconds
/// - `pid`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use taobao_api::{TaobaoConfig, AppKey, SecretKey, Endpoint};
///
/// let config = TaobaoConfig::builder()
///     .app_key(AppKey::new("key").unwrap())
///     .secret_key(SecretKey::new("secret").unwrap())
///     .endpoint(Endpoint::new("https://eco.taobao.com/router/rest").unwrap())
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct TaobaoConfigBuilder {
    app_key: Option<AppKey>,
    secret_key: Option<SecretKey>,
    endpoint: Option<Endpoint>,
    pid: Option<String>,
    timeout: Option<Duration>,
}

impl TaobaoConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app key (required).
    #[must_use]
    pub fn app_key(mut self, key: AppKey) -> Self {
        self.app_key = Some(key);
        self
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the gateway endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the Taobaoke affiliate pid.
    ///
    /// Kept for compatibility with affiliate (Taobaoke) API calls; the pid
    /// is not sent automatically and must be supplied as a business
    /// parameter by callers that need it.
    #[must_use]
    pub fn pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = Some(pid.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TaobaoConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredFields`] naming every required
    /// field that was not set.
    pub fn build(self) -> Result<TaobaoConfig, ConfigError> {
        match (self.app_key, self.secret_key, self.endpoint) {
            (Some(app_key), Some(secret_key), Some(endpoint)) => Ok(TaobaoConfig {
                app_key,
                secret_key,
                endpoint,
                pid: self.pid,
                timeout: self.timeout.unwrap_or(Duration::from_secs(REQUEST_TIMEOUT)),
            }),
            (app_key, secret_key, endpoint) => {
                let mut fields = Vec::new();
                if app_key.is_none() {
                    fields.push("app_key");
                }
                if secret_key.is_none() {
                    fields.push("secret_key");
                }
                if endpoint.is_none() {
                    fields.push("endpoint");
                }
                Err(ConfigError::MissingRequiredFields { fields })
            }
        }
    }
}
