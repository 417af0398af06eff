//! Shared-secret MD5 request signing.

use md5::{Digest, Md5};

use crate::request::canonical::sign_string;
use crate::request::params::RequestParams;

/// Computes the request signature for a parameter set.
///
/// The canonical [`sign_string`] is wrapped with the secret key on both
/// sides, digested with MD5, and rendered as uppercase hex (32 characters).
/// The function is pure; identical inputs always produce identical output.
///
/// The `sign` parameter itself must not be present in `params` when this is
/// called. [`signed_params`](crate::request::signed_params) attaches it only
/// after computing the signature.
///
/// # Example
///
/// ```rust
/// use taobao_api::RequestParams;
/// use taobao_api::request::sign;
///
/// let params: RequestParams = [("b", "2"), ("a", "10")].into_iter().collect();
/// let signature = sign(&params, "secret");
/// assert_eq!(signature.len(), 32);
/// assert!(signature.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
/// ```
#[must_use]
pub fn sign(params: &RequestParams, secret: &str) -> String {
    let wrapped = format!("{secret}{}{secret}", sign_string(params));
    hex::encode(Md5::digest(wrapped.as_bytes())).to_uppercase()
}
