//! Per-client request limiting consulted by the HTTP layer before analysis.

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};
use std::time::Duration;

const MAX_TRACKED_CLIENTS: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited,
}

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Count one request from `client_id` and decide whether it may proceed.
    async fn check(&self, client_id: &str) -> RateDecision;
}

/// Fixed window per client, starting at the client's first request.
///
/// Counters live in a cache whose time-to-live is the window length, so a
/// client's entry (and its count) disappears once the window has passed.
pub struct WindowedRateLimiter {
    limit: u32,
    counters: Cache<String, Arc<AtomicU32>>,
}

impl WindowedRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        let counters = Cache::builder()
            .max_capacity(MAX_TRACKED_CLIENTS)
            .time_to_live(window)
            .build();

        Self { limit, counters }
    }
}

#[async_trait]
impl RateLimiter for WindowedRateLimiter {
    async fn check(&self, client_id: &str) -> RateDecision {
        let counter = self
            .counters
            .get_with(client_id.to_string(), async { Arc::new(AtomicU32::new(0)) })
            .await;

        let seen = counter.fetch_add(1, Ordering::SeqCst);
        if seen >= self.limit {
            RateDecision::Limited
        } else {
            RateDecision::Allowed {
                remaining: self.limit - seen - 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_limit_is_per_client() {
        let limiter = WindowedRateLimiter::new(2, Duration::from_secs(60));

        assert_eq!(limiter.check("1.2.3.4").await, RateDecision::Allowed { remaining: 1 });
        assert_eq!(limiter.check("1.2.3.4").await, RateDecision::Allowed { remaining: 0 });
        assert_eq!(limiter.check("1.2.3.4").await, RateDecision::Limited);
        assert_eq!(limiter.check("5.6.7.8").await, RateDecision::Allowed { remaining: 1 });
    }

    #[tokio::test]
    async fn test_window_expiry_resets_count() {
        let limiter = WindowedRateLimiter::new(1, Duration::from_millis(100));

        assert!(matches!(limiter.check("anonymous").await, RateDecision::Allowed { .. }));
        assert_eq!(limiter.check("anonymous").await, RateDecision::Limited);

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(matches!(limiter.check("anonymous").await, RateDecision::Allowed { .. }));
    }
}
