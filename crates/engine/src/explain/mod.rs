//! Explanation and suggestion generation.
//!
//! Everything here is templated prose over the structured result — the same
//! breakdown, matches, and signals always produce the same strings, so the
//! output is as deterministic as the numbers it describes.

pub mod suggestions;
pub mod templates;

use std::fmt::Write;

use crate::models::{
    ExperienceSignals, ImprovementSuggestion, MatchType, ParsedResume, ScoreBreakdown, SkillMatch,
    SkillPriority,
};
use crate::EngineConfig;
use templates::{EVIDENCE_SNIPPET_MAX, GLYPH_MATCHED, GLYPH_MISSING, GLYPH_PARTIAL};

/// Produces the prose explanation and the ordered improvement plan.
pub fn explain(
    job_fit_score: u8,
    breakdown: &ScoreBreakdown,
    matches: &[SkillMatch],
    signals: &ExperienceSignals,
    resume: &ParsedResume,
    config: &EngineConfig,
) -> (String, Vec<ImprovementSuggestion>) {
    let explanation = explanation(job_fit_score, breakdown, matches);
    let suggestions = suggestions::generate(matches, signals, resume, breakdown, config);
    (explanation, suggestions)
}

fn explanation(score: u8, breakdown: &ScoreBreakdown, matches: &[SkillMatch]) -> String {
    let mut text = String::new();

    let matched = count(matches, MatchType::Matched);
    let partial = count(matches, MatchType::Partial);
    let missing = count(matches, MatchType::Missing);

    let _ = write!(
        text,
        "Job fit: {score}/100 ({label}). The candidate's profile {phrase} this role's \
         stated requirements: {matched} of {total} skills matched, {partial} partially \
         matched, {missing} missing.",
        label = templates::score_label(score),
        phrase = templates::alignment_phrase(score),
        total = matches.len(),
    );

    if let Some((gap_name, shortfall)) = largest_gap(breakdown) {
        let _ = write!(
            text,
            " The largest gap is in {gap_name} (weighted shortfall {shortfall:.2})."
        );
    }

    for penalty in &breakdown.penalties_applied {
        let _ = write!(text, " Penalty applied: {penalty}.");
    }

    let mut detail: Vec<&SkillMatch> = matches.iter().collect();
    detail.sort_by_key(|m| (m.jd_priority != SkillPriority::Required, m.skill_name.clone()));
    for m in detail {
        let glyph = match m.match_type {
            MatchType::Matched => GLYPH_MATCHED,
            MatchType::Partial => GLYPH_PARTIAL,
            MatchType::Missing => GLYPH_MISSING,
        };
        let tier = match m.jd_priority {
            SkillPriority::Required => "required",
            SkillPriority::Optional => "optional",
        };
        let _ = write!(text, "\n{glyph} {} ({tier})", m.skill_name);
        if let Some(evidence) = &m.evidence {
            let _ = write!(text, " — \"{}\"", truncate(evidence, EVIDENCE_SNIPPET_MAX));
        }
    }

    text
}

/// The component with the largest weighted shortfall `(1 − score) × weight`.
/// `None` when every present component scored 1.0.
fn largest_gap(breakdown: &ScoreBreakdown) -> Option<(&'static str, f64)> {
    let components = [
        ("required skills", breakdown.required_skills_score, "required_skills"),
        ("optional skills", breakdown.optional_skills_score, "optional_skills"),
        ("experience depth", breakdown.experience_depth_score, "experience_depth"),
        ("education match", breakdown.education_match_score, "education_match"),
    ];

    let mut best: Option<(&'static str, f64)> = None;
    for (label, score, key) in components {
        let weight = breakdown.weights_applied.get(key).copied().unwrap_or(0.0);
        let shortfall = (1.0 - score) * weight;
        if shortfall > 0.0 && best.map_or(true, |(_, b)| shortfall > b) {
            best = Some((label, shortfall));
        }
    }
    best
}

fn count(matches: &[SkillMatch], match_type: MatchType) -> usize {
    matches.iter().filter(|m| m.match_type == match_type).count()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}
