use crate::commentary::{self, RandomSource};
use crate::facts::DomainFacts;
use crate::lookup::RegistrationInfo;
use crate::roasts;
use crate::scoring;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_DATE: &str = "Unknown";

const FALLBACK_POPULAR_TLDS: [&str; 4] = [".com", ".org", ".net", ".io"];

/// The joke report returned for every analyzed domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub domain: String,
    pub tld: String,
    pub age: u32,
    pub registrar: String,
    pub created_date: String,
    pub expires_date: String,
    pub is_popular_tld: bool,
    pub is_new: bool,
    pub is_expiring_soon: bool,
    pub has_https: bool,
    pub has_www: bool,
    pub subdomain_count: i32,
    pub score: u8,
    pub roasts: Vec<String>,
    pub compliments: Vec<String>,
    pub suggestions: Vec<String>,
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Merge extracted facts and registration data into a report.
pub fn assemble(
    facts: &DomainFacts,
    info: &RegistrationInfo,
    now: DateTime<Utc>,
    rng: &dyn RandomSource,
) -> DomainReport {
    let registrar = info.registrar_name();
    let class = scoring::classify(&facts.tld, registrar, info.created, info.expires, now);
    let commentary = commentary::select(rng, facts, registrar, &class);

    DomainReport {
        domain: facts.hostname.clone(),
        tld: facts.tld.clone(),
        age: class.age,
        registrar: registrar.to_string(),
        created_date: format_date(info.created),
        expires_date: format_date(info.expires),
        is_popular_tld: class.is_popular_tld,
        is_new: class.is_new,
        is_expiring_soon: class.is_expiring_soon,
        has_https: facts.has_https,
        has_www: facts.has_www,
        subdomain_count: facts.subdomain_count,
        score: class.score,
        roasts: commentary.roasts,
        compliments: commentary.compliments,
        suggestions: commentary.suggestions,
    }
}

/// Report used when the registration lookup fails.
///
/// Age and score are random, so it reads like a real analysis; only the
/// registrar name and the fixed lines give it away.
pub fn fallback(input: &str, rng: &dyn RandomSource) -> DomainReport {
    // Raw text after the last dot, case kept
    let tld = format!(".{}", input.rsplit('.').next().unwrap_or(input));

    DomainReport {
        domain: input.to_string(),
        is_popular_tld: FALLBACK_POPULAR_TLDS.contains(&tld.as_str()),
        tld,
        age: 1 + rng.index(15) as u32,
        registrar: roasts::FALLBACK_REGISTRAR.to_string(),
        created_date: UNKNOWN_DATE.to_string(),
        expires_date: UNKNOWN_DATE.to_string(),
        is_new: false,
        is_expiring_soon: false,
        has_https: input.starts_with("https://"),
        has_www: input.contains("www."),
        subdomain_count: 0,
        score: 20 + rng.index(60) as u8,
        roasts: roasts::FALLBACK_ROASTS.iter().map(|s| s.to_string()).collect(),
        compliments: roasts::FALLBACK_COMPLIMENTS.iter().map(|s| s.to_string()).collect(),
        suggestions: roasts::FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
