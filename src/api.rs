//! HTTP surface: the browser page, the roast API, health and metrics.

use crate::{
    analyzer::DomainAnalyzer,
    config::Config,
    errors::RoastError,
    metrics,
    rate_limit::{RateDecision, RateLimiter},
    report::DomainReport,
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{sync::Arc, time::Instant};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};

const INDEX_HTML: &str = include_str!("../static/index.html");
const ROAST_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";
const MIN_DOMAIN_LEN: usize = 3;
const MAX_DOMAIN_LEN: usize = 253;
const ANONYMOUS_CLIENT: &str = "anonymous";

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<DomainAnalyzer>,
    pub rate_limiter: Arc<dyn RateLimiter>,
    pub config: Arc<Config>,
}

#[derive(Debug, Deserialize)]
pub struct RoastRequest {
    domain: String,
}

#[derive(Debug, Deserialize)]
pub struct RoastQuery {
    domain: Option<String>,
}

#[derive(Serialize)]
struct RoastResponse {
    success: bool,
    data: DomainReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
}

/// A domain string that passed the length checks of the POST endpoint.
#[derive(Debug, Clone)]
pub struct ValidatedDomain(pub String);

impl ValidatedDomain {
    pub fn validate(domain: String) -> Result<Self, RoastError> {
        let len = domain.chars().count();
        if len < MIN_DOMAIN_LEN {
            return Err(RoastError::InvalidInput("Domain too short".to_string()));
        }
        if len > MAX_DOMAIN_LEN {
            return Err(RoastError::InvalidInput("Domain too long".to_string()));
        }
        Ok(ValidatedDomain(domain))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/roast-domain", get(roast_domain_get).post(roast_domain_post))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// First `x-forwarded-for` entry, then `x-real-ip`, then a shared anonymous bucket.
pub fn client_id(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string()
}

async fn roast_domain_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RoastError> {
    let start_time = Instant::now();
    let client = client_id(&headers);

    match state.rate_limiter.check(&client).await {
        RateDecision::Allowed { remaining } => {
            debug!("Client {} has {} requests left in this window", client, remaining);
        }
        RateDecision::Limited => {
            info!("Rate limited client {}", client);
            metrics::increment_rate_limited();
            return Err(RoastError::RateLimited);
        }
    }

    // JSON under any content type, including the form type `curl -d` sends
    let request: RoastRequest = serde_json::from_slice(&body).map_err(|e| {
        metrics::increment_errors("invalid_body");
        RoastError::InvalidInput(e.to_string())
    })?;

    let domain = ValidatedDomain::validate(request.domain).inspect_err(|e| {
        metrics::increment_errors(e.kind());
    })?;

    let report = analyze(&state, &domain.0).await?;
    metrics::record_request(start_time.elapsed().as_millis() as u64, report.score);

    let body = RoastResponse {
        success: true,
        data: report,
        timestamp: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    };

    Ok((
        StatusCode::OK,
        [(header::CACHE_CONTROL, ROAST_CACHE_CONTROL)],
        Json(body),
    )
        .into_response())
}

async fn roast_domain_get(
    State(state): State<AppState>,
    Query(params): Query<RoastQuery>,
) -> Response {
    let Some(domain) = params.domain.filter(|d| !d.is_empty()) else {
        return Json(usage()).into_response();
    };

    match analyze(&state, &domain).await {
        Ok(report) => Json(RoastResponse {
            success: true,
            data: report,
            timestamp: None,
        })
        .into_response(),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Use POST for full analysis",
                "message": "For complete roasting, use POST method with JSON body",
            })),
        )
            .into_response(),
    }
}

async fn analyze(state: &AppState, domain: &str) -> Result<DomainReport, RoastError> {
    match state.analyzer.analyze(domain).await {
        Ok(report) => {
            metrics::increment_requests(&report.tld);
            Ok(report)
        }
        Err(e) => {
            metrics::increment_errors(e.kind());
            Err(e)
        }
    }
}

fn usage() -> serde_json::Value {
    json!({
        "message": "Domain Roaster API 🔥",
        "usage": "POST /api/roast-domain with { \"domain\": \"example.com\" }",
        "example": "curl -X POST https://yourdomain.com/api/roast-domain -d '{\"domain\":\"google.com\"}'",
        "endpoints": {
            "POST": "/api/roast-domain - Analyze and roast a domain",
            "GET": "/api/roast-domain?domain=example.com - Quick test",
        },
    })
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.config.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_id_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(" 10.0.0.1 , 172.16.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("192.168.1.1"));
        assert_eq!(client_id(&headers), "10.0.0.1");
    }

    #[test]
    fn test_client_id_falls_back() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_id(&headers), "anonymous");

        headers.insert("x-real-ip", HeaderValue::from_static("192.168.1.1"));
        assert_eq!(client_id(&headers), "192.168.1.1");
    }

    #[test]
    fn test_domain_length_bounds() {
        assert!(ValidatedDomain::validate("a.b".to_string()).is_ok());
        assert!(ValidatedDomain::validate("x".repeat(253)).is_ok());

        match ValidatedDomain::validate("ab".to_string()) {
            Err(RoastError::InvalidInput(msg)) => assert_eq!(msg, "Domain too short"),
            other => panic!("unexpected: {:?}", other.map(|d| d.0)),
        }
        match ValidatedDomain::validate("x".repeat(254)) {
            Err(RoastError::InvalidInput(msg)) => assert_eq!(msg, "Domain too long"),
            other => panic!("unexpected: {:?}", other.map(|d| d.0)),
        }
    }
}
