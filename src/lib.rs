//! # Taobao API Rust client
//!
//! A Rust client for the Taobao Open Platform (TOP) API, providing
//! type-safe configuration, shared-secret request signing, and HTTP
//! dispatch with normalized error handling.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TaobaoConfig`] and [`TaobaoConfigBuilder`]
//! - Validated newtypes for credentials and the gateway endpoint
//! - Canonical parameter serialization and MD5 request signing via [`request`]
//! - Async GET/POST dispatch with soft and strict response surfaces via
//!   [`TaobaoClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use taobao_api::{TaobaoConfig, TaobaoClient, AppKey, SecretKey, Endpoint};
//!
//! // Create configuration using the builder pattern
//! let config = TaobaoConfig::builder()
//!     .app_key(AppKey::new("your-app-key").unwrap())
//!     .secret_key(SecretKey::new("your-secret-key").unwrap())
//!     .endpoint(Endpoint::new("https://eco.taobao.com/router/rest").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = TaobaoClient::new(config);
//! ```
//!
//! ## Making API Requests
//!
//! Every call takes a [`RequestParams`] set of business parameters. The
//! client adds the system parameters the platform requires (`timestamp`,
//! `v`, `format`, `sign_method`, `app_key`), computes the `sign` parameter
//! from the shared secret, and dispatches:
//!
//! ```rust,ignore
//! use taobao_api::{Error, RequestParams};
//!
//! let mut params = RequestParams::new();
//! params.insert("method", "taobao.user.get");
//! params.insert("fields", "user_id,nick");
//! params.insert("nick", "example");
//!
//! // Soft surface: the decoded JSON is returned verbatim, even when it
//! // carries an error_response envelope.
//! let raw = client.get(params.clone()).await?;
//!
//! // Strict surface: an error_response envelope becomes Error::Api.
//! match client.get_strict(params).await {
//!     Ok(payload) => println!("{payload}"),
//!     Err(Error::Api(e)) => eprintln!("gateway rejected the call: {e}"),
//!     Err(other) => return Err(other),
//! }
//! ```
//!
//! ## Error Handling
//!
//! All request-time failures surface through the [`Error`] enum:
//! configuration, transport, JSON decoding, and gateway-reported errors
//! are distinct variants. The client never retries and never recovers
//! internally; reacting to a failure is the caller's decision.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Fail fast, no hidden recovery**: no retries, no backoff, no fallback

pub mod client;
pub mod config;
pub mod error;
pub mod request;

// Re-export public types at crate root for convenience
pub use client::{ApiResponseError, Error, Method, TaobaoClient};
pub use config::{AppKey, Endpoint, SecretKey, TaobaoConfig, TaobaoConfigBuilder};
pub use error::ConfigError;
pub use request::{ParamValue, RequestParams};
