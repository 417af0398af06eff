//! Request-time error types and response classification.
//!
//! The client distinguishes three failure kinds at runtime: the transport
//! call itself failing, the response body not being JSON, and the gateway
//! reporting an application-level error through the `error_response`
//! envelope. None of them are retried or recovered internally; every error
//! surfaces to the immediate caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use taobao_api::Error;
//!
//! match client.get_strict(params).await {
//!     Ok(response) => println!("payload: {response}"),
//!     Err(Error::Api(e)) => println!("gateway error: {e}"),
//!     Err(Error::Transport(e)) => println!("transport error: {e}"),
//!     Err(Error::Decode(e)) => println!("bad response body: {e}"),
//!     Err(Error::Config(e)) => println!("configuration error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when the gateway reports an application-level failure.
///
/// The message carries the serialized `error_response` object exactly as
/// the gateway returned it, so callers can inspect `code`, `msg`,
/// `sub_code`, and `sub_msg` without this crate imposing a taxonomy.
///
/// # Example
///
/// ```rust
/// use taobao_api::ApiResponseError;
///
/// let error = ApiResponseError {
///     message: r#"{"code":15,"msg":"Remote service error"}"#.to_string(),
/// };
/// assert!(error.to_string().contains("Remote service error"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiResponseError {
    /// Serialized `error_response` content in JSON format.
    pub message: String,
}

/// Unified error type for all client operations.
///
/// Use pattern matching to distinguish transport failures from
/// application-level errors; the two are never conflated.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration was invalid or incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP call itself failed (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The gateway returned an `error_response` envelope (strict surface only).
    #[error(transparent)]
    Api(#[from] ApiResponseError),
}

/// Classifies a decoded response as payload or platform error.
///
/// A JSON object containing the key `error_response` fails with
/// [`ApiResponseError`] carrying the serialized nested object; anything
/// else passes through verbatim. Presence of the key is the only
/// discriminator.
///
/// # Errors
///
/// Returns [`ApiResponseError`] when the `error_response` key is present.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use taobao_api::client::classify;
///
/// let ok = classify(json!({"result": {"ok": true}}));
/// assert!(ok.is_ok());
///
/// let err = classify(json!({"error_response": {"code": 15, "msg": "bad"}}));
/// assert!(err.is_err());
/// ```
pub fn classify(response: Value) -> Result<Value, ApiResponseError> {
    match response.get("error_response") {
        Some(error) => Err(ApiResponseError {
            message: error.to_string(),
        }),
        None => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_passes_through_normal_payload() {
        let payload = json!({"user_get_response": {"user": {"nick": "hello"}}});
        let result = classify(payload.clone()).unwrap();
        assert_eq!(result, payload);
    }

    #[test]
    fn test_classify_fails_on_error_envelope() {
        let error = classify(json!({
            "error_response": {"code": 15, "msg": "Remote service error"}
        }))
        .unwrap_err();

        assert!(error.message.contains("15"));
        assert!(error.message.contains("Remote service error"));
    }

    #[test]
    fn test_classify_serializes_nested_object_only() {
        let error = classify(json!({"error_response": {"code": 15, "msg": "bad"}}))
            .unwrap_err();

        let parsed: Value = serde_json::from_str(&error.message).unwrap();
        assert_eq!(parsed, json!({"code": 15, "msg": "bad"}));
    }

    #[test]
    fn test_classify_keys_on_presence_not_shape() {
        // Any value under the key counts as an error envelope
        let error = classify(json!({"error_response": null})).unwrap_err();
        assert_eq!(error.message, "null");
    }

    #[test]
    fn test_error_variants_wrap_sources() {
        let decode_error: Error = serde_json::from_str::<Value>("not json").unwrap_err().into();
        assert!(matches!(decode_error, Error::Decode(_)));

        let api_error: Error = ApiResponseError {
            message: "{}".to_string(),
        }
        .into();
        assert!(matches!(api_error, Error::Api(_)));

        let config_error: Error = ConfigError::EmptyAppKey.into();
        assert!(matches!(config_error, Error::Config(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &ApiResponseError {
            message: "test".to_string(),
        };
        let _ = error;
    }
}
