//! Field extraction — best-effort structured fields from plain document text.
//!
//! Every extractor is a first-match regex scan over the same input text, and
//! none of them ever fails: an absent field is `None`, never an error. The
//! patterns are known-loose heuristics kept loose on purpose; which span wins
//! on a real resume is part of the observable contract.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extract::skills::SkillVocabulary;

pub const NAME_NOT_FOUND: &str = "Name not found";
pub const EMAIL_NOT_FOUND: &str = "Email not found";
pub const PHONE_NOT_FOUND: &str = "Phone number not found";
pub const EXPERIENCE_NOT_MENTIONED: &str = "Experience not mentioned";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+\s[A-Z][a-z]+)\b").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

// Loose: also matches bare 3-4 digit splits without a country or area code.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\+?\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}\b").unwrap()
});

static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s+years\s+of\s+experience").unwrap());

/// Structured fields pulled from one document's text.
/// Immutable once produced; a pure function of the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<u32>,
    /// Recognized vocabulary skills, in vocabulary order, deduplicated.
    pub skills: Vec<String>,
}

/// Runs all field extractors plus the skill scan over the same text.
/// The extractors are independent; none depends on another's result.
pub fn extract_profile(text: &str, vocab: &SkillVocabulary) -> ExtractedProfile {
    ExtractedProfile {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        experience_years: extract_experience(text),
        skills: vocab.extract_skills(text),
    }
}

/// First "Capitalized Capitalized" word pair. A heuristic with known false
/// positives (any title-cased phrase wins), not authoritative identity.
pub fn extract_name(text: &str) -> Option<String> {
    NAME_RE.find(text).map(|m| m.as_str().to_string())
}

/// First substring shaped like an email address.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First substring matching the loose phone pattern: optional country code,
/// optional area code, then a 3-4 digit split with -, . or space separators.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// The count in the first "<N> years of experience" phrase, case-insensitive.
pub fn extract_experience(text: &str) -> Option<u32> {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
}

/// Presentation form of the experience field: "<N> years" or the sentinel.
pub fn experience_label(years: Option<u32>) -> String {
    match years {
        Some(n) => format!("{n} years"),
        None => EXPERIENCE_NOT_MENTIONED.to_string(),
    }
}
