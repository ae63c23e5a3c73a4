//! Improvement-suggestion generation.
//!
//! Buckets are scanned in fixed priority order: missing required skills
//! (1), partial required skills (2), missing optional skills (3),
//! experience shortfalls (4), education shortfall (5). Within a bucket,
//! suggestions sort by their first affected skill, then category, so the
//! same gaps always yield the same ordered plan.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{
    ExperienceSignals, ImprovementSuggestion, MatchType, ParsedResume, ScoreBreakdown, SkillMatch,
    SkillPriority,
};
use crate::EngineConfig;

static METRICS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*(?:%|percent|x\b)|\d+[km]?\+?\s*(?:users|customers|requests|qps|rps)")
        .unwrap()
});

pub fn generate(
    matches: &[SkillMatch],
    signals: &ExperienceSignals,
    resume: &ParsedResume,
    breakdown: &ScoreBreakdown,
    config: &EngineConfig,
) -> Vec<ImprovementSuggestion> {
    let mut out = Vec::new();

    for m in filtered(matches, SkillPriority::Required, MatchType::Missing) {
        out.push(ImprovementSuggestion {
            category: "Missing Required Skill".to_string(),
            priority: 1,
            suggestion: format!(
                "Add evidence of {} to the resume, or gain hands-on exposure; the job \
                 description lists it as required.",
                m.skill_name
            ),
            evidence_gap: Some(format!("No mention of {} found in the resume.", m.skill_name)),
            affected_skills: vec![m.skill_name.clone()],
        });
    }

    for m in filtered(matches, SkillPriority::Required, MatchType::Partial) {
        out.push(ImprovementSuggestion {
            category: "Strengthen Evidence".to_string(),
            priority: 2,
            suggestion: format!(
                "Strengthen the evidence for {}: name the projects or responsibilities \
                 where it was used directly.",
                m.skill_name
            ),
            evidence_gap: m.evidence.as_ref().map(|e| {
                format!("Closest resume evidence is indirect: \"{e}\"")
            }),
            affected_skills: vec![m.skill_name.clone()],
        });
    }

    for m in filtered(matches, SkillPriority::Optional, MatchType::Missing) {
        out.push(ImprovementSuggestion {
            category: "Nice to Have".to_string(),
            priority: 3,
            suggestion: format!(
                "Consider adding {} if there is real exposure to it; the job description \
                 lists it as a plus.",
                m.skill_name
            ),
            evidence_gap: None,
            affected_skills: vec![m.skill_name.clone()],
        });
    }

    if breakdown.experience_depth_score < 1.0 {
        out.push(ImprovementSuggestion {
            category: "Experience Depth".to_string(),
            priority: 4,
            suggestion: format!(
                "Highlight the most relevant roles and make their date ranges explicit; \
                 only {:.1} years of relevant experience could be established.",
                signals.relevant_years
            ),
            evidence_gap: None,
            affected_skills: vec![],
        });
    }

    if !resume.experience.is_empty() && !has_metrics(resume) {
        out.push(ImprovementSuggestion {
            category: "Quantify Impact".to_string(),
            priority: 4,
            suggestion: "Quantify accomplishments with concrete figures (throughput, \
                         user counts, percentage improvements) instead of task lists."
                .to_string(),
            evidence_gap: Some(
                "No quantified outcomes found in the experience descriptions.".to_string(),
            ),
            affected_skills: vec![],
        });
    }

    if breakdown.education_match_score < 1.0 {
        out.push(ImprovementSuggestion {
            category: "Education".to_string(),
            priority: 5,
            suggestion: "List the highest completed degree with its field of study; the \
                         stated education requirement could not be fully matched."
                .to_string(),
            evidence_gap: None,
            affected_skills: vec![],
        });
    }

    out.sort_by(|a, b| {
        let ka = (a.priority, a.affected_skills.first().cloned().unwrap_or_default());
        let kb = (b.priority, b.affected_skills.first().cloned().unwrap_or_default());
        ka.cmp(&kb).then_with(|| a.category.cmp(&b.category))
    });
    out.truncate(config.max_suggestions);
    out
}

fn filtered<'a>(
    matches: &'a [SkillMatch],
    priority: SkillPriority,
    match_type: MatchType,
) -> impl Iterator<Item = &'a SkillMatch> {
    matches
        .iter()
        .filter(move |m| m.jd_priority == priority && m.match_type == match_type)
}

/// Whether any experience description quantifies an outcome (percentages,
/// multipliers, user or traffic counts).
fn has_metrics(resume: &ParsedResume) -> bool {
    resume.experience.iter().any(|e| {
        METRICS_RE.is_match(&e.description.to_lowercase())
            || e.responsibilities
                .iter()
                .any(|r| METRICS_RE.is_match(&r.to_lowercase()))
    })
}
