//! Experience signal extractor: relevant years from parseable date ranges,
//! ownership strength and leadership phrases from description text, and a
//! responsibility-alignment label against the JD's requirement keywords.
//!
//! Dates arrive as free-form strings. Anything unparseable contributes zero
//! duration and never raises; the upstream parser's warnings list is the
//! only place that distinguishes "no experience" from "unreadable dates".
//! Open-ended ranges ("Present") are treated the same way — the engine
//! consults no clock, so results stay fully determined by their inputs.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::config::AlignmentBuckets;
use crate::models::{
    ExperienceEntry, ExperienceSignals, OwnershipStrength, ParsedJobDescription,
};

/// Ownership-signal keyword set. Matches are collected verbatim (lowercased)
/// into `leadership_signals` in order of first appearance.
const OWNERSHIP_SIGNALS: &[&str] = &[
    "led",
    "owned",
    "managed",
    "architected",
    "founded",
    "spearheaded",
    "launched",
    "headed",
    "directed",
    "oversaw",
    "mentored",
    "drove",
];

static OWNERSHIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b({})\b", OWNERSHIP_SIGNALS.join("|"));
    Regex::new(&pattern).unwrap()
});

static YMD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap());
static YM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})[-/](\d{1,2})$").unwrap());
static MY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{1,2})[-/](\d{4})$").unwrap());
static MONTH_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]{3,9})\.?,?\s+(\d{4})$").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})$").unwrap());

/// Extracts career signals from the experience section, aligned against the
/// job description's requirement keywords.
pub fn extract_signals(
    experience: &[ExperienceEntry],
    jd: &ParsedJobDescription,
    alignment: &AlignmentBuckets,
) -> ExperienceSignals {
    let relevant_years = total_relevant_years(experience);
    let (ownership_strength, leadership_signals) = ownership(experience);
    let responsibility_alignment = responsibility_alignment(experience, jd, alignment);

    debug!(
        relevant_years,
        ownership = %ownership_strength,
        alignment = %responsibility_alignment,
        "experience signals extracted"
    );

    ExperienceSignals {
        relevant_years,
        ownership_strength,
        leadership_signals,
        responsibility_alignment,
    }
}

/// Sum of date-range durations over entries where both dates parse.
/// Rounded to a tenth of a year for stable presentation.
fn total_relevant_years(experience: &[ExperienceEntry]) -> f64 {
    let total: f64 = experience
        .iter()
        .filter_map(|entry| {
            let start = parse_date(entry.start_date.as_deref()?)?;
            let end = parse_date(entry.end_date.as_deref()?)?;
            let days = (end - start).num_days();
            (days > 0).then_some(days as f64 / 365.25)
        })
        .sum();
    (total * 10.0).round() / 10.0
}

/// Lenient resume-date parsing. Accepted forms: `2021`, `2021-03`,
/// `2021/03`, `03/2021`, `2021-03-15`, `March 2021`, `Mar 2021`.
/// Year-only dates resolve to January 1st.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = YMD_RE.captures(trimmed) {
        return NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }
    if let Some(caps) = YM_RE.captures(trimmed) {
        return NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, 1);
    }
    if let Some(caps) = MY_RE.captures(trimmed) {
        return NaiveDate::from_ymd_opt(caps[2].parse().ok()?, caps[1].parse().ok()?, 1);
    }
    if let Some(caps) = MONTH_NAME_RE.captures(trimmed) {
        let month = month_number(&caps[1])?;
        return NaiveDate::from_ymd_opt(caps[2].parse().ok()?, month, 1);
    }
    if let Some(caps) = YEAR_RE.captures(trimmed) {
        return NaiveDate::from_ymd_opt(caps[1].parse().ok()?, 1, 1);
    }
    None
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let month = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Ownership classification: High for two or more distinct signal keywords
/// across all entries, Medium for one, Low for none despite description
/// text, Unknown when there is no description text at all.
fn ownership(experience: &[ExperienceEntry]) -> (OwnershipStrength, Vec<String>) {
    let mut signals: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut any_text = false;

    for entry in experience {
        let text = entry_text(entry);
        if !text.trim().is_empty() {
            any_text = true;
        }
        for found in OWNERSHIP_RE.find_iter(&text) {
            let keyword = found.as_str().to_lowercase();
            if seen.insert(keyword.clone()) {
                signals.push(keyword);
            }
        }
    }

    let strength = match (signals.len(), any_text) {
        (n, _) if n >= 2 => OwnershipStrength::High,
        (1, _) => OwnershipStrength::Medium,
        (0, true) => OwnershipStrength::Low,
        (0, false) => OwnershipStrength::Unknown,
        _ => unreachable!(),
    };

    (strength, signals)
}

fn entry_text(entry: &ExperienceEntry) -> String {
    let mut text = entry.description.clone();
    for responsibility in &entry.responsibilities {
        text.push(' ');
        text.push_str(responsibility);
    }
    text
}

/// Coverage of the JD requirement keyword set by responsibility tokens,
/// bucketed at the configured breakpoints. "unknown" when either side has
/// nothing to compare.
fn responsibility_alignment(
    experience: &[ExperienceEntry],
    jd: &ParsedJobDescription,
    buckets: &AlignmentBuckets,
) -> String {
    let keywords = jd_keywords(jd);
    let tokens: HashSet<String> = experience
        .iter()
        .flat_map(|e| tokenize(&entry_text(e)))
        .collect();

    if keywords.is_empty() || tokens.is_empty() {
        return "unknown".to_string();
    }

    let covered = keywords
        .iter()
        .filter(|keyword| {
            let parts = tokenize(keyword);
            !parts.is_empty() && parts.iter().all(|p| tokens.contains(p))
        })
        .count();
    let ratio = covered as f64 / keywords.len() as f64;

    if ratio >= buckets.strong {
        "strong".to_string()
    } else if ratio >= buckets.partial {
        "partial".to_string()
    } else {
        "limited".to_string()
    }
}

/// The JD's requirement keyword set: per-requirement skill lists plus the
/// derived required/optional sets, lowercased and deduplicated.
fn jd_keywords(jd: &ParsedJobDescription) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    let all = jd
        .requirements
        .iter()
        .flat_map(|r| r.skills.iter())
        .chain(jd.required_skills.iter())
        .chain(jd.optional_skills.iter());
    for keyword in all {
        let lower = keyword.trim().to_lowercase();
        if !lower.is_empty() && seen.insert(lower.clone()) {
            keywords.push(lower);
        }
    }
    keywords
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
