//! Integration tests for request dispatch and response classification.
//!
//! These tests run the client against a wiremock endpoint to verify the
//! wire contract, the soft/strict call surfaces, and the separation of
//! transport, decode, and gateway error kinds.

use std::time::Duration;

use serde_json::json;
use taobao_api::{
    AppKey, Endpoint, Error, Method, RequestParams, SecretKey, TaobaoClient, TaobaoConfig,
};
use wiremock::matchers::{body_string_contains, header, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(endpoint: &str, timeout: Duration) -> TaobaoClient {
    let config = TaobaoConfig::builder()
        .app_key(AppKey::new("test-key").unwrap())
        .secret_key(SecretKey::new("test-secret").unwrap())
        .endpoint(Endpoint::new(endpoint).unwrap())
        .timeout(timeout)
        .build()
        .unwrap();
    TaobaoClient::new(config)
}

fn user_params() -> RequestParams {
    [("method", "taobao.user.get"), ("nick", "hello")]
        .into_iter()
        .collect()
}

#[tokio::test]
async fn test_get_sends_signed_query_and_returns_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("method", "taobao.user.get"))
        .and(query_param("format", "json"))
        .and(query_param("sign_method", "md5"))
        .and(query_param("app_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_get_response": {"user": {"nick": "hello"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let response = client.get(user_params()).await.unwrap();

    assert_eq!(
        response["user_get_response"]["user"]["nick"],
        json!("hello")
    );

    // The sign parameter is attached on the wire: 32 uppercase hex chars
    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap().to_string();
    let sign = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("sign="))
        .unwrap();
    assert_eq!(sign.len(), 32);
    assert!(sign
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    assert!(query.contains("timestamp="));
}

#[tokio::test]
async fn test_post_sends_form_urlencoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("method=taobao.user.get"))
        .and(body_string_contains("sign="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_get_response": {"user": {"nick": "hello"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let response = client.post(user_params()).await.unwrap();

    assert_eq!(
        response["user_get_response"]["user"]["nick"],
        json!("hello")
    );
}

#[tokio::test]
async fn test_soft_surface_returns_error_envelope_as_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_response": {"code": 15, "msg": "Remote service error"}
        })))
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let response = client.get(user_params()).await.unwrap();

    // Soft surface leaves interpretation to the caller
    assert_eq!(response["error_response"]["code"], json!(15));
}

#[tokio::test]
async fn test_strict_surface_raises_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_response": {"code": 15, "msg": "bad"}
        })))
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let error = client.get_strict(user_params()).await.unwrap_err();

    match error {
        Error::Api(api) => {
            assert!(api.message.contains("15"));
            assert!(api.message.contains("bad"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_strict_surface_passes_clean_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": {"ok": true}})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let response = client.post_strict(user_params()).await.unwrap();

    assert_eq!(response, json!({"result": {"ok": true}}));
}

#[tokio::test]
async fn test_invalid_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let error = client.get(user_params()).await.unwrap_err();

    assert!(matches!(error, Error::Decode(_)));
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": {}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    // Client timeout well below the mock delay
    let client = create_client(&server.uri(), Duration::from_millis(200));
    let error = client.get_strict(user_params()).await.unwrap_err();

    // Transport failure kind, never Api or Decode
    assert!(matches!(error, Error::Transport(_)));
}

#[tokio::test]
async fn test_request_dispatches_by_method() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"via": "get"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"via": "post"})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));

    let get = client.request(Method::Get, user_params()).await.unwrap();
    assert_eq!(get, json!({"via": "get"}));

    let post = client.request(Method::Post, user_params()).await.unwrap();
    assert_eq!(post, json!({"via": "post"}));
}

#[tokio::test]
async fn test_request_strict_classifies_both_methods() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_response": {"code": 40, "msg": "Missing required arguments"}
        })))
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let error = client
        .request_strict(Method::Post, user_params())
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Api(_)));
    assert!(error.to_string().contains("Missing required arguments"));
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(create_client(&server.uri(), Duration::from_secs(10)));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_strict(user_params()).await })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response, json!({"ok": true}));
    }
}

#[tokio::test]
async fn test_caller_override_reaches_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("v", "custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), Duration::from_secs(10));
    let params: RequestParams = [("method", "taobao.time.get"), ("v", "custom")]
        .into_iter()
        .collect();

    client.get(params).await.unwrap();
}
