//! Picks the roasts, compliments and suggestions for a classified domain.

use crate::facts::DomainFacts;
use crate::roasts::{self, Lines};
use crate::scoring::{AgeBucket, Classification};
use rand::Rng;

/// Source of uniform random indices.
///
/// Production uses [`ThreadRandom`]; tests substitute a fixed sequence to get
/// exact, reproducible text.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn index(&self, len: usize) -> usize;
}

/// Unseeded thread-local RNG; every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Uniform pick from a non-empty list.
pub fn pick(rng: &dyn RandomSource, lines: &[&'static str]) -> &'static str {
    match lines.len() {
        0 => "",
        len => lines[rng.index(len).min(len - 1)],
    }
}

/// Registrar families recognised by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrarBrand {
    GoDaddy,
    Namecheap,
    GoogleOrSquarespace,
    NameDotCom,
    Cloudflare,
    Porkbun,
    Other,
}

impl RegistrarBrand {
    /// First match wins, checked in this order. Squarespace shares Google's
    /// entry since it took over Google Domains customers.
    pub fn detect(registrar: &str) -> Self {
        let registrar = registrar.to_lowercase();

        if registrar.contains("godaddy") {
            RegistrarBrand::GoDaddy
        } else if registrar.contains("namecheap") {
            RegistrarBrand::Namecheap
        } else if registrar.contains("google") || registrar.contains("squarespace") {
            RegistrarBrand::GoogleOrSquarespace
        } else if registrar.contains("name.com") {
            RegistrarBrand::NameDotCom
        } else if registrar.contains("cloudflare") {
            RegistrarBrand::Cloudflare
        } else if registrar.contains("porkbun") {
            RegistrarBrand::Porkbun
        } else {
            RegistrarBrand::Other
        }
    }

    /// Table keys to try in order, then a last-resort line.
    fn roast_chain(self) -> (&'static [&'static str], Lines) {
        match self {
            RegistrarBrand::GoDaddy => (&["GoDaddy"], &[]),
            RegistrarBrand::Namecheap => (&["Namecheap"], &[]),
            RegistrarBrand::GoogleOrSquarespace => (
                &["Google Domains", "Squarespace Domains"],
                &["Google refugee? 🏃"],
            ),
            RegistrarBrand::NameDotCom => (&["Name.com"], &[]),
            RegistrarBrand::Cloudflare => (&["Cloudflare Registrar"], &["Too good for markups! 😇"]),
            RegistrarBrand::Porkbun => (&["Porkbun"], &["Oink oink, savings! 🐷"]),
            RegistrarBrand::Other => (&[], &[]),
        }
    }
}

pub fn tld_roast(rng: &dyn RandomSource, tld: &str) -> String {
    match roasts::TLD_ROASTS.get(tld) {
        Some(lines) => pick(rng, lines).to_string(),
        None => pick(rng, &roasts::GENERIC_TLD_ROASTS).replace("{tld}", tld),
    }
}

pub fn tld_compliment(rng: &dyn RandomSource, tld: &str) -> Option<String> {
    roasts::TLD_COMPLIMENTS
        .get(tld)
        .map(|lines| pick(rng, lines).to_string())
}

pub fn age_roast(rng: &dyn RandomSource, age: f64) -> String {
    let bucket = AgeBucket::for_age(age);
    roasts::AGE_ROASTS
        .get(&bucket)
        .map(|lines| pick(rng, lines).to_string())
        .unwrap_or_default()
}

pub fn registrar_roast(rng: &dyn RandomSource, registrar: &str) -> String {
    let brand = RegistrarBrand::detect(registrar);
    let (keys, last_resort) = brand.roast_chain();

    let lines = keys
        .iter()
        .find_map(|key| roasts::REGISTRAR_ROASTS.get(key).copied())
        .unwrap_or(last_resort);

    if lines.is_empty() {
        pick(rng, &roasts::GENERIC_REGISTRAR_ROASTS).replace("{registrar}", registrar)
    } else {
        pick(rng, lines).to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commentary {
    pub roasts: Vec<String>,
    pub compliments: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Build the ordered commentary for a domain.
///
/// Random picks happen in a fixed order (TLD roast, TLD compliment, age,
/// registrar); everything after that is rule-based.
pub fn select(
    rng: &dyn RandomSource,
    facts: &DomainFacts,
    registrar: &str,
    class: &Classification,
) -> Commentary {
    let mut out = Commentary::default();

    out.roasts.push(tld_roast(rng, &facts.tld));
    if let Some(compliment) = tld_compliment(rng, &facts.tld) {
        out.compliments.push(compliment);
    }
    out.roasts.push(age_roast(rng, class.age as f64));
    out.roasts.push(registrar_roast(rng, registrar));

    if facts.has_https {
        out.compliments.push(roasts::HTTPS_COMPLIMENT.to_string());
    } else {
        out.roasts.push(roasts::NO_HTTPS_ROAST.to_string());
        out.suggestions.push(roasts::NO_HTTPS_SUGGESTION.to_string());
    }

    if facts.has_www {
        out.roasts.push(roasts::WWW_ROAST.to_string());
        out.suggestions.push(roasts::WWW_SUGGESTION.to_string());
    }

    if class.is_new {
        out.roasts.push(roasts::NEW_DOMAIN_ROAST.to_string());
    }

    if class.is_expiring_soon {
        out.roasts.push(roasts::EXPIRING_ROAST.to_string());
        out.suggestions.push(roasts::EXPIRING_SUGGESTION.to_string());
    }

    if class.score < 30 {
        out.roasts.push(roasts::LOW_SCORE_ROAST.to_string());
    } else if class.score > 80 {
        out.compliments.push(roasts::ELITE_SCORE_COMPLIMENT.to_string());
    } else if class.score > 60 {
        out.compliments.push(roasts::SOLID_SCORE_COMPLIMENT.to_string());
    }

    out.suggestions
        .extend(roasts::GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()));

    out
}
