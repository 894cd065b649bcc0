//! Registration-data lookup seam.
//!
//! The analyzer only sees [`RegistrationLookup`]; WHOIS, RDAP, caching and
//! chaining are all implementations of it.

use crate::errors::RoastError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub const UNKNOWN_REGISTRAR: &str = "Unknown";

/// Registration metadata for a domain; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    pub registrar: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub expires: Option<DateTime<Utc>>,
}

impl RegistrationInfo {
    pub fn registrar_name(&self) -> &str {
        self.registrar.as_deref().unwrap_or(UNKNOWN_REGISTRAR)
    }

    pub fn is_empty(&self) -> bool {
        self.registrar.is_none() && self.created.is_none() && self.expires.is_none()
    }

    /// Fill gaps in `self` from `other`.
    pub fn or(self, other: RegistrationInfo) -> RegistrationInfo {
        RegistrationInfo {
            registrar: self.registrar.or(other.registrar),
            created: self.created.or(other.created),
            expires: self.expires.or(other.expires),
        }
    }
}

#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Look up registration data for a hostname.
    ///
    /// Returns [`RoastError::NoRegistrationData`] when the source answered
    /// but nothing usable came back.
    async fn lookup(&self, hostname: &str) -> Result<RegistrationInfo, RoastError>;

    /// Name used in logs.
    fn source(&self) -> &'static str;
}

/// Tries each source in order and returns the first success.
pub struct LookupChain {
    sources: Vec<Arc<dyn RegistrationLookup>>,
}

impl LookupChain {
    pub fn new(sources: Vec<Arc<dyn RegistrationLookup>>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl RegistrationLookup for LookupChain {
    async fn lookup(&self, hostname: &str) -> Result<RegistrationInfo, RoastError> {
        let mut last_error = RoastError::Internal("No lookup sources configured".to_string());

        for source in &self.sources {
            match source.lookup(hostname).await {
                Ok(info) => {
                    debug!("{} answered for {}", source.source(), hostname);
                    return Ok(info);
                }
                Err(e) => {
                    debug!("{} failed for {}: {}", source.source(), hostname, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    fn source(&self) -> &'static str {
        "chain"
    }
}

/// Parse the date formats registries actually use.
pub fn parse_registry_date(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let zoned_formats = [
        "%Y-%m-%dT%H:%M:%S%z",  // 2025-05-18T13:36:06+0000
        "%Y-%m-%d %H:%M:%S%z",  // 2025-05-18 13:36:06+0000
        "%Y-%m-%d %H:%M:%S %z", // 2025-05-18 13:36:06 +0000
    ];
    for format in &zoned_formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive_formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ", // 2025-05-18T13:36:06.0Z
        "%Y-%m-%dT%H:%M:%S",     // 2025-05-18T13:36:06
        "%Y-%m-%d %H:%M:%S",     // 2025-05-18 13:36:06
        "%Y.%m.%d %H:%M:%S",     // 2025.05.18 13:36:06
        "%d-%b-%Y %H:%M:%S",     // 18-May-2025 13:36:06
    ];
    for format in &naive_formats {
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(DateTime::from_naive_utc_and_offset(naive_dt, Utc));
        }
    }

    let date_only_formats = [
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d %b %Y",
        "%Y/%m/%d",
        "%Y.%m.%d",
        "%m/%d/%Y",
        "%d.%m.%Y",
    ];
    for format in &date_only_formats {
        if let Ok(naive_date) = NaiveDate::parse_from_str(date_str, format) {
            if let Some(naive_dt) = naive_date.and_hms_opt(0, 0, 0) {
                return Some(DateTime::from_naive_utc_and_offset(naive_dt, Utc));
            }
        }
    }

    debug!("Failed to parse date: {}", date_str);
    None
}
