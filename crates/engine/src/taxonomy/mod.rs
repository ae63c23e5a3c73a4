//! Skill taxonomy and normalizer.
//!
//! Canonicalizes free-text skill strings to a stable name + category using
//! the static reference dictionary in [`data`]. Lookup never fails: a skill
//! the taxonomy does not recognize keeps its cleaned form as its own
//! canonical name under category `other` with low confidence.
//!
//! The taxonomy is the only long-lived object in the engine: built once at
//! first use, read-only thereafter, shared by reference.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::normalized_damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

use crate::config::MatchThresholds;
use crate::models::{ConfidenceLevel, SkillCategory};

/// Outcome of normalizing one raw skill string.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub canonical_name: String,
    pub category: SkillCategory,
    pub confidence: ConfidenceLevel,
}

struct Entry {
    canonical: &'static str,
    category: SkillCategory,
    /// Compact lookup forms of the canonical name and every alias.
    variants: Vec<String>,
}

/// Immutable skill reference dictionary with exact and fuzzy lookup.
pub struct Taxonomy {
    entries: Vec<Entry>,
    exact: HashMap<String, usize>,
}

static SHARED: LazyLock<Taxonomy> = LazyLock::new(Taxonomy::builtin);

/// The process-wide shared taxonomy, built on first access.
pub fn shared() -> &'static Taxonomy {
    &SHARED
}

impl Taxonomy {
    fn builtin() -> Self {
        let mut entries = Vec::with_capacity(data::ENTRIES.len());
        let mut exact = HashMap::new();

        for raw in data::ENTRIES {
            let idx = entries.len();
            let mut variants = Vec::with_capacity(raw.aliases.len() + 1);
            for form in std::iter::once(raw.canonical).chain(raw.aliases.iter().copied()) {
                let key = compact_key(form);
                if key.is_empty() {
                    continue;
                }
                // First claim wins, keeping lookup deterministic if two
                // entries ever list the same alias.
                exact.entry(key.clone()).or_insert(idx);
                variants.push(key);
            }
            entries.push(Entry {
                canonical: raw.canonical,
                category: raw.category,
                variants,
            });
        }

        Self { entries, exact }
    }

    /// Normalizes one raw skill string.
    ///
    /// Exact dictionary hit ⇒ high confidence. Otherwise the best fuzzy
    /// similarity over every dictionary variant decides: at or above the
    /// high threshold ⇒ medium, at or above the low threshold ⇒ low, below
    /// ⇒ the cleaned input is kept as its own canonical form under `other`.
    pub fn normalize(&self, raw: &str, thresholds: &MatchThresholds) -> Normalized {
        let cleaned = nfkc_lower_trim(raw);
        let compact = compact_key(&cleaned);

        if let Some(&idx) = self.exact.get(&compact) {
            let entry = &self.entries[idx];
            return Normalized {
                canonical_name: entry.canonical.to_string(),
                category: entry.category,
                confidence: ConfidenceLevel::High,
            };
        }

        if let Some((idx, sim)) = self.best_fuzzy(&compact) {
            if sim >= thresholds.low {
                let entry = &self.entries[idx];
                let confidence = if sim >= thresholds.high {
                    ConfidenceLevel::Medium
                } else {
                    ConfidenceLevel::Low
                };
                return Normalized {
                    canonical_name: entry.canonical.to_string(),
                    category: entry.category,
                    confidence,
                };
            }
        }

        Normalized {
            canonical_name: cleaned,
            category: SkillCategory::Other,
            confidence: ConfidenceLevel::Low,
        }
    }

    /// Convenience batch form of [`normalize`](Self::normalize).
    pub fn normalize_all(&self, raw: &[String], thresholds: &MatchThresholds) -> Vec<Normalized> {
        raw.iter().map(|s| self.normalize(s, thresholds)).collect()
    }

    /// Category of an already-canonical name; `other` if unknown.
    pub fn category_of(&self, canonical: &str) -> SkillCategory {
        self.exact
            .get(&compact_key(canonical))
            .map(|&idx| self.entries[idx].category)
            .unwrap_or(SkillCategory::Other)
    }

    /// Best fuzzy candidate over every dictionary variant. Ties among
    /// equally similar variants are broken by shorter variant string, then
    /// lexicographic order, so the result is deterministic.
    fn best_fuzzy(&self, compact: &str) -> Option<(usize, f64)> {
        if compact.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f64, &str)> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            for variant in &entry.variants {
                let sim = normalized_damerau_levenshtein(compact, variant);
                let better = match &best {
                    None => true,
                    Some((_, best_sim, best_variant)) => {
                        sim > *best_sim
                            || (sim == *best_sim
                                && (variant.len(), variant.as_str())
                                    < (best_variant.len(), best_variant))
                    }
                };
                if better {
                    best = Some((idx, sim, variant));
                }
            }
        }
        best.map(|(idx, sim, _)| (idx, sim))
    }
}

/// Pairwise similarity between two skill strings, on their compact forms.
/// Used by the matcher with the same thresholds as normalization.
pub fn similarity(a: &str, b: &str) -> f64 {
    let ka = compact_key(a);
    let kb = compact_key(b);
    if ka.is_empty() || kb.is_empty() {
        return if ka == kb { 1.0 } else { 0.0 };
    }
    normalized_damerau_levenshtein(&ka, &kb)
}

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

/// Lookup key: NFKC-folded, lowercased, separator punctuation stripped.
/// `+` and `#` survive so "C++" and "C#" stay distinct from "C".
fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{3000}' | '.' | '-' | '_' | '/' | ','))
        .collect()
}
