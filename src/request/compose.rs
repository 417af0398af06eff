//! System-parameter composition and request finalization.
//!
//! Every call to the gateway carries five system parameters in addition to
//! the caller's business parameters. Composition lays down the system
//! defaults first and overlays the caller's set on top, so a caller-supplied
//! key always wins on collision. Signing happens strictly after composition;
//! a signature computed over the bare business parameters would not match
//! what the gateway verifies.

use chrono::{DateTime, Local};

use crate::config::TaobaoConfig;
use crate::request::params::RequestParams;
use crate::request::sign::sign;

/// The platform API version sent as `v`.
pub const API_VERSION: &str = "2.0";

/// The response format sent as `format`. Only JSON is supported.
pub const RESPONSE_FORMAT: &str = "json";

/// The signing method sent as `sign_method`. Only MD5 is supported.
pub const SIGN_METHOD: &str = "md5";

/// The `timestamp` rendering, local time to the second.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Merges caller parameters with the required system parameters.
///
/// The system defaults are `timestamp` (formatted `now`), `v`, `format`,
/// `sign_method`, and `app_key` from the configuration. Caller parameters
/// are overlaid on top: a caller that explicitly supplies one of the system
/// keys overrides the default. The merge is flat and single-level.
///
/// # Example
///
/// ```rust
/// use chrono::Local;
/// use taobao_api::{AppKey, Endpoint, RequestParams, SecretKey, TaobaoConfig};
/// use taobao_api::request::compose;
///
/// let config = TaobaoConfig::builder()
///     .app_key(AppKey::new("my-key").unwrap())
///     .secret_key(SecretKey::new("my-secret").unwrap())
///     .endpoint(Endpoint::new("https://eco.taobao.com/router/rest").unwrap())
///     .build()
///     .unwrap();
///
/// let params: RequestParams = [("method", "taobao.user.get")].into_iter().collect();
/// let composed = compose(params, &config, Local::now());
///
/// assert_eq!(composed.get("format").unwrap().to_string(), "json");
/// assert_eq!(composed.get("app_key").unwrap().to_string(), "my-key");
/// ```
#[must_use]
pub fn compose(
    caller: RequestParams,
    config: &TaobaoConfig,
    now: DateTime<Local>,
) -> RequestParams {
    let mut composed = RequestParams::new();
    composed.insert("timestamp", now.format(TIMESTAMP_FORMAT).to_string());
    composed.insert("v", API_VERSION);
    composed.insert("format", RESPONSE_FORMAT);
    composed.insert("sign_method", SIGN_METHOD);
    composed.insert("app_key", config.app_key().as_ref());
    composed.extend(caller);
    composed
}

/// Composes the full parameter set and attaches its signature.
///
/// The returned set is final: system parameters, caller parameters, and the
/// `sign` key, ready for serialization as a query string or POST body.
#[must_use]
pub fn signed_params(
    caller: RequestParams,
    config: &TaobaoConfig,
    now: DateTime<Local>,
) -> RequestParams {
    let mut composed = compose(caller, config, now);
    let signature = sign(&composed, config.secret_key().as_ref());
    composed.insert("sign", signature);
    composed
}
