//! # Domain Roaster Library
//!
//! Looks up a domain's registration data and turns it into a score and a
//! handful of tongue-in-cheek remarks.
//!
//! ## Features
//!
//! - Hostname facts (TLD, HTTPS, `www`, subdomain depth) from free-form input
//! - Registration lookup over WHOIS with RDAP as a second source
//! - Cached lookups with smart domain normalization
//! - 0-100 scoring, age buckets and expiry warnings
//! - Randomised roasts, compliments and suggestions
//! - A placeholder report whenever the registry can't be reached
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_roaster::{Config, DomainAnalyzer};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = DomainAnalyzer::from_config(Arc::new(Config::load()?))?;
//!     let report = analyzer.analyze("google.com").await?;
//!
//!     println!("{} scored {}/100", report.domain, report.score);
//!     for roast in &report.roasts {
//!         println!("🔥 {}", roast);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod cache;
pub mod commentary;
pub mod config;
pub mod errors;
pub mod facts;
pub mod lookup;
pub mod rate_limit;
pub mod rdap;
pub mod report;
pub mod roasts;
pub mod scoring;
pub mod whois;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod metrics;

// Re-export main types for easy access
pub use analyzer::DomainAnalyzer;
pub use cache::CachedLookup;
pub use commentary::{RandomSource, ThreadRandom};
pub use config::Config;
pub use errors::RoastError;
pub use facts::DomainFacts;
pub use lookup::{LookupChain, RegistrationInfo, RegistrationLookup};
pub use rate_limit::{RateDecision, RateLimiter, WindowedRateLimiter};
pub use rdap::RdapLookup;
pub use report::DomainReport;
pub use whois::WhoisLookup;
