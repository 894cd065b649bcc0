//! Turns whatever the user typed (a bare hostname or a full URL) into the
//! normalized facts the scorer and the commentary work from.

use crate::errors::RoastError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";
const WWW_PREFIX: &str = "www.";

// RFC 3986 scheme at the very start; `://` later in a path or query doesn't count
static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").expect("scheme pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFacts {
    /// Hostname with any leading `www.` removed
    pub hostname: String,
    /// Lower-cased, dot-prefixed last label (e.g. `.com`)
    pub tld: String,
    pub has_https: bool,
    pub has_www: bool,
    /// Labels beyond the registrable pair; negative for single-label hosts
    pub subdomain_count: i32,
}

impl DomainFacts {
    /// Parse a raw domain or URL.
    ///
    /// Input without a scheme is parsed as `https://<input>`, so a bare
    /// hostname always reports `has_https = true`; only an explicit non-https
    /// scheme (e.g. `http://`) reports `false`.
    pub fn extract(input: &str) -> Result<Self, RoastError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RoastError::InvalidInput("Empty domain".to_string()));
        }

        let url = if SCHEME_PREFIX.is_match(input) {
            Url::parse(input)
        } else {
            Url::parse(&format!("{}{}", DEFAULT_SCHEME_PREFIX, input))
        }
        .map_err(|e| RoastError::InvalidInput(format!("{}: {}", input, e)))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| RoastError::InvalidInput(format!("No hostname in {}", input)))?
            .to_lowercase();

        let has_https = url.scheme() == "https";
        let has_www = host.starts_with(WWW_PREFIX);
        let hostname = match host.strip_prefix(WWW_PREFIX) {
            Some(rest) => rest.to_string(),
            None => host,
        };

        let tld = tld_of(&hostname);
        let subdomain_count = hostname.split('.').count() as i32 - 2;

        Ok(Self {
            hostname,
            tld,
            has_https,
            has_www,
            subdomain_count,
        })
    }
}

/// Dot-prefixed, lower-cased text after the last `.`; the whole name when there is no dot.
pub fn tld_of(name: &str) -> String {
    let last = name.rsplit('.').next().unwrap_or(name);
    format!(".{}", last.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_err;

    #[test]
    fn test_explicit_http_subdomain() {
        let facts = DomainFacts::extract("http://sub.example.net").unwrap();
        assert!(!facts.has_https);
        assert!(!facts.has_www);
        assert_eq!(facts.tld, ".net");
        assert_eq!(facts.hostname, "sub.example.net");
        assert_eq!(facts.subdomain_count, 1);
    }

    #[test]
    fn test_schemeless_www_defaults_to_https() {
        let facts = DomainFacts::extract("www.example.org").unwrap();
        assert!(facts.has_https);
        assert!(facts.has_www);
        assert_eq!(facts.hostname, "example.org");
        assert_eq!(facts.tld, ".org");
        assert_eq!(facts.subdomain_count, 0);
    }

    #[test]
    fn test_url_with_path_and_port() {
        let facts = DomainFacts::extract("https://WWW.Example.IO:8443/some/path?q=1").unwrap();
        assert!(facts.has_https);
        assert!(facts.has_www);
        assert_eq!(facts.hostname, "example.io");
        assert_eq!(facts.tld, ".io");
    }

    #[test]
    fn test_url_in_query_is_not_a_scheme() {
        let facts = DomainFacts::extract("example.com/?next=https://other.io").unwrap();
        assert!(facts.has_https);
        assert_eq!(facts.hostname, "example.com");
        assert_eq!(facts.tld, ".com");

        let facts = DomainFacts::extract("www.example.net/redirect/http://other.io").unwrap();
        assert!(facts.has_www);
        assert_eq!(facts.hostname, "example.net");
    }

    #[test]
    fn test_single_label_host_goes_negative() {
        let facts = DomainFacts::extract("localhost").unwrap();
        assert_eq!(facts.tld, ".localhost");
        assert_eq!(facts.subdomain_count, -1);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let facts = DomainFacts::extract("  google.com \n").unwrap();
        assert_eq!(facts.hostname, "google.com");
    }

    #[test]
    fn test_unparseable_input_is_rejected() {
        assert_err!(DomainFacts::extract(""));
        assert_err!(DomainFacts::extract("   "));
        assert_err!(DomainFacts::extract("exa mple.com"));
        assert_err!(DomainFacts::extract("https://"));
        assert!(matches!(
            DomainFacts::extract("http://[::1"),
            Err(RoastError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reparsing_hostname_is_stable() {
        for input in ["http://a.b.example.co", "www.example.dev", "shop.example.xyz"] {
            let first = DomainFacts::extract(input).unwrap();
            let second = DomainFacts::extract(&first.hostname).unwrap();
            assert_eq!(first.tld, second.tld);
            assert_eq!(first.hostname, second.hostname);
            assert!(!second.has_www);
        }
    }

    #[test]
    fn test_tld_of() {
        assert_eq!(tld_of("example.COM"), ".com");
        assert_eq!(tld_of("a.b.c.co.uk"), ".uk");
        assert_eq!(tld_of("nodots"), ".nodots");
    }
}
