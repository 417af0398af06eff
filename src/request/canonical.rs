//! Canonical parameter serialization.
//!
//! Two renderings of a parameter set exist: the sign string fed into the
//! digest, and the query string sent on the wire. They follow different
//! ordering rules and must not be conflated.

use crate::request::params::RequestParams;

/// Renders the canonical string that is signed.
///
/// Each parameter is rendered as `key + value` with no separator, the
/// resulting strings are sorted ascending byte-wise, and the sorted list is
/// concatenated. The sort key is the full `key + value` concatenation, not
/// the key alone; the gateway computes the same string on its side, so this
/// ordering must be reproduced exactly.
///
/// # Example
///
/// ```rust
/// use taobao_api::RequestParams;
/// use taobao_api::request::sign_string;
///
/// let params: RequestParams = [("b", "2"), ("a", "10")].into_iter().collect();
/// // "a10" sorts before "b2"
/// assert_eq!(sign_string(&params), "a10b2");
/// ```
#[must_use]
pub fn sign_string(params: &RequestParams) -> String {
    let mut pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}{v}")).collect();
    pairs.sort_unstable();
    pairs.concat()
}

/// Renders the form-urlencoded query string.
///
/// Parameters appear in insertion order as `key=value` joined by `&`, with
/// values percent-encoded. Only the sign string is sorted; the query string
/// is not.
///
/// # Example
///
/// ```rust
/// use taobao_api::RequestParams;
/// use taobao_api::request::query_string;
///
/// let params: RequestParams = [("q", "a b&c"), ("page", "2")].into_iter().collect();
/// assert_eq!(query_string(&params), "q=a%20b%26c&page=2");
/// ```
#[must_use]
pub fn query_string(params: &RequestParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v.to_string())))
        .collect::<Vec<_>>()
        .join("&")
}
