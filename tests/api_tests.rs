use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use domain_roaster::{
    api::{router, AppState},
    Config, DomainAnalyzer, RandomSource, RegistrationInfo, RegistrationLookup, RoastError,
    WindowedRateLimiter,
};
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;

struct Stub;

#[async_trait]
impl RegistrationLookup for Stub {
    async fn lookup(&self, _hostname: &str) -> Result<RegistrationInfo, RoastError> {
        Ok(RegistrationInfo {
            registrar: Some("Cloudflare, Inc.".to_string()),
            created: Some(Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap()),
            expires: None,
        })
    }

    fn source(&self) -> &'static str {
        "stub"
    }
}

struct First;

impl RandomSource for First {
    fn index(&self, _len: usize) -> usize {
        0
    }
}

fn app(rate_limit: u32) -> Router {
    router(AppState {
        analyzer: Arc::new(DomainAnalyzer::new(Arc::new(Stub), Arc::new(First))),
        rate_limiter: Arc::new(WindowedRateLimiter::new(rate_limit, Duration::from_secs(60))),
        config: Arc::new(Config::load().unwrap()),
    })
}

fn post(body: &str, client: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/roast-domain")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_returns_report_envelope() {
    let response = app(20)
        .oneshot(post(r#"{"domain":"example.com"}"#, "10.0.0.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, s-maxage=300, stale-while-revalidate=600"
    );

    let body = json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
    assert_eq!(body["data"]["domain"], "example.com");
    assert_eq!(body["data"]["registrar"], "Cloudflare, Inc.");
    assert_eq!(body["data"]["hasHttps"], json!(true));
    // 50 + 20 (age 11) + 15 (.com tier) + 10 (popular) + 15 (Cloudflare), clamped
    assert_eq!(body["data"]["score"], json!(100));
}

#[tokio::test]
async fn test_post_rejects_short_and_long_domains() {
    let app = app(20);

    let response = app.clone().oneshot(post(r#"{"domain":"ab"}"#, "10.0.0.2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Invalid domain", "details": "Domain too short"})
    );

    let long = json!({ "domain": "a".repeat(254) }).to_string();
    let response = app.oneshot(post(&long, "10.0.0.2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["details"], "Domain too long");
}

#[tokio::test]
async fn test_post_rejects_malformed_body() {
    let response = app(20).oneshot(post("not json", "10.0.0.3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Invalid domain");
}

#[tokio::test]
async fn test_post_accepts_json_under_form_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/roast-domain")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(r#"{"domain":"google.com"}"#))
        .unwrap();

    let response = app(20).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["data"]["domain"], "google.com");
}

#[tokio::test]
async fn test_post_without_content_type_still_decodes() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/roast-domain")
        .body(Body::from(r#"{"domain":"example.io"}"#))
        .unwrap();

    let response = app(20).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["data"]["tld"], ".io");
}

#[tokio::test]
async fn test_post_unparseable_domain_is_bad_request() {
    let response = app(20)
        .oneshot(post(r#"{"domain":"http://"}"#, "10.0.0.4"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_is_rate_limited_per_client() {
    let app = app(2);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post(r#"{"domain":"example.com"}"#, "10.0.0.5, 172.16.0.1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(post(r#"{"domain":"example.com"}"#, "10.0.0.5"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        json_body(response).await,
        json!({
            "error": "Too many requests!",
            "message": "Slow down! Even domains need a break. Try again in a minute."
        })
    );

    let response = app
        .oneshot(post(r#"{"domain":"example.com"}"#, "10.0.0.6"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_without_domain_returns_usage() {
    let response = app(20).oneshot(get("/api/roast-domain")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Domain Roaster API 🔥");
    assert!(body["endpoints"]["POST"].is_string());
    assert!(body["endpoints"]["GET"].is_string());
}

#[tokio::test]
async fn test_get_with_domain_is_quick_analysis() {
    let app = app(1);

    // GET is not rate limited
    for _ in 0..3 {
        let response = app.clone().oneshot(get("/api/roast-domain?domain=example.dev")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["tld"], ".dev");
        assert!(body.get("timestamp").is_none());
    }
}

#[tokio::test]
async fn test_get_with_bad_domain_suggests_post() {
    let response = app(20).oneshot(get("/api/roast-domain?domain=http://")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Use POST for full analysis");
}

#[tokio::test]
async fn test_index_serves_page() {
    let response = app(20).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("/api/roast-domain"));
}

#[tokio::test]
async fn test_health_check() {
    let response = app(20).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
}
