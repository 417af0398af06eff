//! HTTP client for Taobao Open Platform gateway communication.
//!
//! This module provides the [`TaobaoClient`] type for dispatching signed
//! GET and POST requests and normalizing the JSON responses.

pub mod errors;

pub use errors::{classify, ApiResponseError, Error};

use chrono::Local;
use serde_json::Value;

use crate::config::TaobaoConfig;
use crate::request::{query_string, signed_params, RequestParams};

/// The HTTP method used for a gateway call.
///
/// The gateway accepts the same signed parameter set either as a GET query
/// string or as a form-urlencoded POST body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Send parameters as a query string.
    Get,
    /// Send parameters as a form-urlencoded body.
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => f.write_str("get"),
            Self::Post => f.write_str("post"),
        }
    }
}

/// HTTP client for making signed requests to the Taobao gateway.
///
/// The client owns its configuration and a single `reqwest::Client` with
/// the configured timeout applied. Construct it once and share it; it is
/// `Send + Sync` and safe for concurrent calls, each of which is
/// independent (no ordering guarantee, no cross-request state).
///
/// Two call surfaces exist per method:
///
/// - soft ([`get`](Self::get), [`post`](Self::post)): returns the decoded
///   JSON verbatim, including an `error_response` envelope if the gateway
///   sent one, leaving interpretation to the caller.
/// - strict ([`get_strict`](Self::get_strict),
///   [`post_strict`](Self::post_strict)): fails with [`Error::Api`] when
///   the response carries `error_response`.
///
/// The client performs no retries and no backoff; transport failures
/// propagate unmodified as [`Error::Transport`].
///
/// # Example
///
/// ```rust,ignore
/// use taobao_api::{AppKey, Endpoint, RequestParams, SecretKey, TaobaoClient, TaobaoConfig};
///
/// let config = TaobaoConfig::builder()
///     .app_key(AppKey::new("my-key")?)
///     .secret_key(SecretKey::new("my-secret")?)
///     .endpoint(Endpoint::new("https://eco.taobao.com/router/rest")?)
///     .build()?;
///
/// let client = TaobaoClient::new(config);
///
/// let mut params = RequestParams::new();
/// params.insert("method", "taobao.user.get");
/// params.insert("nick", "hello");
///
/// let response = client.get_strict(params).await?;
/// println!("{response}");
/// ```
#[derive(Debug)]
pub struct TaobaoClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    config: TaobaoConfig,
}

// Verify TaobaoClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TaobaoClient>();
};

impl TaobaoClient {
    /// Creates a new client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: TaobaoConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Returns the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &TaobaoConfig {
        &self.config
    }

    /// Returns the full signed GET URL for a parameter set.
    ///
    /// Useful for debugging a request or handing the URL to another
    /// fetcher. The signature embeds the current timestamp, so the URL is
    /// only valid for a short window.
    #[must_use]
    pub fn url(&self, params: RequestParams) -> String {
        format!("{}?{}", self.config.endpoint(), self.query(params))
    }

    /// Issues a GET request and returns the decoded JSON verbatim.
    ///
    /// The response may itself contain an `error_response` key; use
    /// [`get_strict`](Self::get_strict) to have that surfaced as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP call fails and
    /// [`Error::Decode`] if the body is not valid JSON.
    pub async fn get(&self, params: RequestParams) -> Result<Value, Error> {
        let url = self.url(params);
        tracing::debug!(endpoint = %self.config.endpoint(), "dispatching GET request");

        let body = self.client.get(&url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Issues a POST request and returns the decoded JSON verbatim.
    ///
    /// The signed parameter set is sent as an
    /// `application/x-www-form-urlencoded` body to the endpoint's root path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP call fails and
    /// [`Error::Decode`] if the body is not valid JSON.
    pub async fn post(&self, params: RequestParams) -> Result<Value, Error> {
        let body = self.query(params);
        tracing::debug!(endpoint = %self.config.endpoint(), "dispatching POST request");

        let response = self
            .client
            .post(self.config.endpoint().as_ref())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Issues a GET request and fails if the gateway reported an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the decoded response contains an
    /// `error_response` envelope, in addition to the failure modes of
    /// [`get`](Self::get).
    pub async fn get_strict(&self, params: RequestParams) -> Result<Value, Error> {
        let response = self.get(params).await?;
        Ok(Self::strict(response)?)
    }

    /// Issues a POST request and fails if the gateway reported an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the decoded response contains an
    /// `error_response` envelope, in addition to the failure modes of
    /// [`post`](Self::post).
    pub async fn post_strict(&self, params: RequestParams) -> Result<Value, Error> {
        let response = self.post(params).await?;
        Ok(Self::strict(response)?)
    }

    /// Dispatches via the given method, returning the decoded JSON verbatim.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get`](Self::get) and [`post`](Self::post).
    pub async fn request(&self, method: Method, params: RequestParams) -> Result<Value, Error> {
        match method {
            Method::Get => self.get(params).await,
            Method::Post => self.post(params).await,
        }
    }

    /// Dispatches via the given method, failing on an `error_response`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_strict`](Self::get_strict) and
    /// [`post_strict`](Self::post_strict).
    pub async fn request_strict(
        &self,
        method: Method,
        params: RequestParams,
    ) -> Result<Value, Error> {
        match method {
            Method::Get => self.get_strict(params).await,
            Method::Post => self.post_strict(params).await,
        }
    }

    /// Composes, signs, and serializes a parameter set.
    fn query(&self, params: RequestParams) -> String {
        query_string(&signed_params(params, &self.config, Local::now()))
    }

    fn strict(response: Value) -> Result<Value, ApiResponseError> {
        classify(response).map_err(|error| {
            tracing::warn!(%error, "gateway returned error_response");
            error
        })
    }
}
