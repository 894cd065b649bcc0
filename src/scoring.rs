//! Score and classification rules.
//!
//! Everything here is a pure function of its inputs: the same age, TLD,
//! registrar and popularity flag always produce the same score.

use chrono::{DateTime, Utc};

pub const BASE_SCORE: i32 = 50;
pub const POPULAR_TLD_BONUS: i32 = 10;
pub const EXPIRY_WARNING_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const MILLIS_PER_YEAR: f64 = MILLIS_PER_DAY as f64 * 365.25;

pub const POPULAR_TLDS: [&str; 16] = [
    ".com", ".org", ".net", ".io", ".dev", ".co", ".ai", ".info", ".biz", ".club", ".fun",
    ".online", ".tech", ".app", ".shop", ".me",
];

pub fn is_popular_tld(tld: &str) -> bool {
    POPULAR_TLDS.contains(&tld)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TldTier {
    Premium,
    Established,
    Alternative,
    Other,
}

impl TldTier {
    pub fn of(tld: &str) -> Self {
        match tld {
            ".com" | ".io" | ".dev" => TldTier::Premium,
            ".org" | ".co" | ".ai" => TldTier::Established,
            ".net" | ".me" => TldTier::Alternative,
            _ => TldTier::Other,
        }
    }

    pub fn bonus(self) -> i32 {
        match self {
            TldTier::Premium => 15,
            TldTier::Established => 10,
            TldTier::Alternative => 5,
            TldTier::Other => 0,
        }
    }
}

/// Age groups used to pick an age roast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBucket {
    BrandNew,
    Baby,
    Toddler,
    Kid,
    Teen,
    Ancient,
}

impl AgeBucket {
    pub fn for_age(age: f64) -> Self {
        if age == 0.0 {
            AgeBucket::BrandNew
        } else if age < 1.0 {
            AgeBucket::Baby
        } else if age < 3.0 {
            AgeBucket::Toddler
        } else if age < 5.0 {
            AgeBucket::Kid
        } else if age < 10.0 {
            AgeBucket::Teen
        } else {
            AgeBucket::Ancient
        }
    }
}

fn age_bonus(age: u32) -> i32 {
    if age > 5 && age < 15 {
        20
    } else if age >= 15 {
        10
    } else if age > 1 {
        5
    } else {
        0
    }
}

/// Registrar adjustments; every matching brand applies.
fn registrar_adjustment(registrar: &str) -> i32 {
    let registrar = registrar.to_lowercase();
    let mut adjustment = 0;

    if registrar.contains("godaddy") {
        adjustment -= 5;
    }
    if registrar.contains("google") || registrar.contains("squarespace") {
        adjustment += 10;
    }
    if registrar.contains("cloudflare") {
        adjustment += 15;
    }
    if registrar.contains("porkbun") {
        adjustment += 12;
    }

    adjustment
}

/// Compute the 0-100 domain score.
///
/// The popular-TLD bonus stacks with the tier bonus, so `.com`, `.io` and
/// `.dev` collect both.
pub fn calculate_score(age: u32, tld: &str, registrar: &str, is_popular_tld: bool) -> u8 {
    let mut score = BASE_SCORE;

    score += age_bonus(age);
    score += TldTier::of(tld).bonus();
    if is_popular_tld {
        score += POPULAR_TLD_BONUS;
    }
    score += registrar_adjustment(registrar);

    score.clamp(0, 100) as u8
}

/// Whole years between `created` and `now`, never negative.
pub fn age_in_years(created: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let millis = (now - created).num_milliseconds() as f64;
    (millis / MILLIS_PER_YEAR).floor().max(0.0) as u32
}

/// Whole days from `now` until `expires`; negative once expired.
pub fn days_until(expires: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expires - now).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub age: u32,
    pub is_new: bool,
    pub is_expiring_soon: bool,
    pub is_popular_tld: bool,
    pub score: u8,
}

/// Derive age, flags and score from the registration dates.
pub fn classify(
    tld: &str,
    registrar: &str,
    created: Option<DateTime<Utc>>,
    expires: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Classification {
    let age = created.map(|c| age_in_years(c, now)).unwrap_or(0);
    let is_expiring_soon = expires
        .map(|e| (0..=EXPIRY_WARNING_DAYS).contains(&days_until(e, now)))
        .unwrap_or(false);
    let is_popular_tld = is_popular_tld(tld);

    Classification {
        age,
        is_new: age < 1,
        is_expiring_soon,
        is_popular_tld,
        score: calculate_score(age, tld, registrar, is_popular_tld),
    }
}
