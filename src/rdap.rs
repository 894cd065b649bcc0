//! RDAP (Registration Data Access Protocol) lookup.
//!
//! Structured JSON successor to WHOIS (RFC 7480-7484). Queries go to a
//! bootstrap-aware base URL (`https://rdap.org/` by default) which redirects
//! to the authoritative registry server.

use crate::{
    config::Config,
    errors::RoastError,
    lookup::{parse_registry_date, RegistrationInfo, RegistrationLookup},
};
use async_trait::async_trait;
use serde::Deserialize;
use std::{sync::Arc, time::Duration};
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
struct RdapDomainResponse {
    events: Option<Vec<RdapEvent>>,
    entities: Option<Vec<RdapEntity>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: Option<String>,
    #[serde(rename = "eventDate")]
    event_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RdapEntity {
    roles: Option<Vec<String>>,
    #[serde(rename = "vcardArray")]
    vcard_array: Option<serde_json::Value>,
}

pub struct RdapLookup {
    client: reqwest::Client,
    base_url: Url,
}

impl RdapLookup {
    pub fn new(config: Arc<Config>) -> Result<Self, RoastError> {
        let mut base_url = Url::parse(&config.rdap_base_url).map_err(|e| {
            RoastError::Internal(format!("Invalid RDAP base URL '{}': {}", config.rdap_base_url, e))
        })?;
        // Url::join drops the last path segment unless the base ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.whois_timeout_seconds))
            .user_agent(concat!("domain-roaster/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl RegistrationLookup for RdapLookup {
    async fn lookup(&self, hostname: &str) -> Result<RegistrationInfo, RoastError> {
        let url = self
            .base_url
            .join(&format!("domain/{}", hostname))
            .map_err(|e| RoastError::Internal(format!("Failed to construct RDAP URL: {}", e)))?;

        debug!("Querying RDAP server: {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/rdap+json, application/json")
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RoastError::NoRegistrationData(hostname.to_string()));
        }
        if !response.status().is_success() {
            return Err(RoastError::Internal(format!(
                "RDAP query failed with status: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        debug!("RDAP response length: {} bytes", body.len());

        let info = parse_rdap_response(&body)?;
        if info.is_empty() {
            return Err(RoastError::NoRegistrationData(hostname.to_string()));
        }
        Ok(info)
    }

    fn source(&self) -> &'static str {
        "rdap"
    }
}

/// Extract registration/expiration events and the registrar's name.
pub fn parse_rdap_response(body: &str) -> Result<RegistrationInfo, RoastError> {
    let rdap: RdapDomainResponse = serde_json::from_str(body)
        .map_err(|e| RoastError::Internal(format!("Failed to parse RDAP JSON: {}", e)))?;

    let mut info = RegistrationInfo::default();

    for event in rdap.events.iter().flatten() {
        let (Some(action), Some(date)) = (&event.event_action, &event.event_date) else {
            continue;
        };
        match action.as_str() {
            "registration" => info.created = info.created.or_else(|| parse_registry_date(date)),
            "expiration" => info.expires = info.expires.or_else(|| parse_registry_date(date)),
            _ => {}
        }
    }

    info.registrar = rdap
        .entities
        .iter()
        .flatten()
        .find(|entity| {
            entity
                .roles
                .as_ref()
                .is_some_and(|roles| roles.iter().any(|r| r == "registrar"))
        })
        .and_then(|entity| entity.vcard_array.as_ref())
        .and_then(vcard_full_name);

    Ok(info)
}

/// The `fn` property of a jCard: `["vcard", [["fn", {}, "text", "Name"], ...]]`.
fn vcard_full_name(vcard: &serde_json::Value) -> Option<String> {
    vcard
        .get(1)?
        .as_array()?
        .iter()
        .filter_map(|prop| prop.as_array())
        .find(|prop| prop.first().and_then(|name| name.as_str()) == Some("fn"))
        .and_then(|prop| prop.get(3))
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
