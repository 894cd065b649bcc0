use crate::{
    config::Config,
    errors::RoastError,
    lookup::{RegistrationInfo, RegistrationLookup},
};
use async_trait::async_trait;
use moka::future::Cache;
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Caches successful lookups of the wrapped source; failures are never cached.
pub struct CachedLookup {
    inner: Arc<dyn RegistrationLookup>,
    cache: Cache<String, RegistrationInfo>,
}

impl CachedLookup {
    pub fn new(inner: Arc<dyn RegistrationLookup>, config: &Config) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_max_entries)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Self { inner, cache }
    }

    fn normalize_domain(domain: &str) -> String {
        let normalized = domain.trim().to_lowercase();

        // Remove trailing dot if present (common in DNS contexts)
        match normalized.strip_suffix('.') {
            Some(stripped) => stripped.to_string(),
            None => normalized,
        }
    }
}

#[async_trait]
impl RegistrationLookup for CachedLookup {
    async fn lookup(&self, hostname: &str) -> Result<RegistrationInfo, RoastError> {
        let key = Self::normalize_domain(hostname);

        if let Some(info) = self.cache.get(&key).await {
            debug!("Cache hit for domain: {}", key);
            return Ok(info);
        }
        debug!("Cache miss for domain: {}", key);

        let info = self.inner.lookup(&key).await?;
        self.cache.insert(key, info.clone()).await;
        Ok(info)
    }

    fn source(&self) -> &'static str {
        self.inner.source()
    }
}
