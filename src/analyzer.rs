use crate::{
    cache::CachedLookup,
    commentary::{RandomSource, ThreadRandom},
    config::Config,
    errors::RoastError,
    facts::DomainFacts,
    lookup::{LookupChain, RegistrationLookup},
    rdap::RdapLookup,
    report::{self, DomainReport},
    whois::WhoisLookup,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs one domain through extraction, lookup, scoring and commentary.
///
/// Holds no per-request state; share it freely behind an `Arc`.
#[derive(Clone)]
pub struct DomainAnalyzer {
    lookup: Arc<dyn RegistrationLookup>,
    rng: Arc<dyn RandomSource>,
}

impl DomainAnalyzer {
    pub fn new(lookup: Arc<dyn RegistrationLookup>, rng: Arc<dyn RandomSource>) -> Self {
        Self { lookup, rng }
    }

    /// WHOIS first, then RDAP when enabled, behind a cache; random text from the thread RNG.
    pub fn from_config(config: Arc<Config>) -> Result<Self, RoastError> {
        let mut sources: Vec<Arc<dyn RegistrationLookup>> =
            vec![Arc::new(WhoisLookup::new(config.clone()))];
        if config.rdap_enabled {
            sources.push(Arc::new(RdapLookup::new(config.clone())?));
        }

        let lookup = CachedLookup::new(Arc::new(LookupChain::new(sources)), &config);
        Ok(Self::new(Arc::new(lookup), Arc::new(ThreadRandom)))
    }

    /// Analyze `input` as of now.
    pub async fn analyze(&self, input: &str) -> Result<DomainReport, RoastError> {
        self.analyze_at(input, Utc::now()).await
    }

    /// Analyze `input` with ages and expiry measured from `now`.
    ///
    /// Only unparseable input is an error. A failed lookup still yields a
    /// report, built from random placeholders.
    pub async fn analyze_at(&self, input: &str, now: DateTime<Utc>) -> Result<DomainReport, RoastError> {
        let facts = DomainFacts::extract(input)?;

        match self.lookup.lookup(&facts.hostname).await {
            Ok(info) => {
                debug!("Registration data for {}: {:?}", facts.hostname, info);
                Ok(report::assemble(&facts, &info, now, self.rng.as_ref()))
            }
            Err(e) => {
                warn!("Lookup failed for {}, using fallback report: {}", facts.hostname, e);
                #[cfg(feature = "server")]
                crate::metrics::increment_lookup_fallbacks(e.kind());
                Ok(report::fallback(input, self.rng.as_ref()))
            }
        }
    }
}
