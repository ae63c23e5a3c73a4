//! Score composition: four component scores in [0,1], combined under the
//! configured weights into the 0-100 job-fit score.
//!
//! A component with nothing to measure (a JD with no optional skills, say)
//! is excluded rather than scored as zero: its weight is redistributed
//! proportionally across the remaining components, so the published
//! `weights_applied` always sums to 1.0 and candidates are never punished
//! for requirements the JD does not state.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{
    ConfidenceLevel, ExperienceSignals, MatchType, ParsedJobDescription, ParsedResume,
    ScoreBreakdown, SkillMatch, SkillPriority,
};

static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b").unwrap());
static MONTHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3})\s*\+?\s*months?\b").unwrap());

/// Composite score plus its published breakdown.
#[derive(Debug, Clone)]
pub struct ComposedScore {
    pub job_fit_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Composes the final score from skill matches, experience signals, and the
/// resume's education section.
pub fn compose(
    matches: &[SkillMatch],
    signals: &ExperienceSignals,
    resume: &ParsedResume,
    jd: &ParsedJobDescription,
    config: &EngineConfig,
) -> ComposedScore {
    let required = skill_component(matches, SkillPriority::Required);
    let optional = skill_component(matches, SkillPriority::Optional);
    let experience = experience_score(signals, jd, config);
    let education = education_score(resume, jd, config);

    let components = [
        ("required_skills", required, config.weights.required_skills),
        ("optional_skills", optional, config.weights.optional_skills),
        ("experience_depth", Some(experience), config.weights.experience_depth),
        ("education_match", Some(education), config.weights.education_match),
    ];

    let weights_applied = redistribute(&components);

    let mut composite = 0.0;
    for (name, score, _) in &components {
        composite += score.unwrap_or(0.0) * weights_applied[*name];
    }

    let mut penalties = Vec::new();
    if all_required_missing(matches) {
        composite -= config.missing_required_penalty;
        penalties.push(format!(
            "all required skills missing (-{:.2})",
            config.missing_required_penalty
        ));
    }

    let clamped = composite.clamp(0.0, 1.0);
    let job_fit_score = (clamped * 100.0).round() as u8;

    debug!(
        job_fit_score,
        required = ?required,
        optional = ?optional,
        experience,
        education,
        "score composed"
    );

    ComposedScore {
        job_fit_score,
        breakdown: ScoreBreakdown {
            required_skills_score: required.unwrap_or(0.0),
            optional_skills_score: optional.unwrap_or(0.0),
            experience_depth_score: experience,
            education_match_score: education,
            weights_applied,
            penalties_applied: penalties,
        },
    }
}

/// Overall confidence: the proportion of skill matches decided at high
/// confidence. With no JD skills at all there is nothing to be confident
/// about either way, so the label stays at medium.
pub fn confidence_level(matches: &[SkillMatch]) -> ConfidenceLevel {
    if matches.is_empty() {
        return ConfidenceLevel::Medium;
    }
    let high = matches
        .iter()
        .filter(|m| m.confidence == ConfidenceLevel::High)
        .count();
    let ratio = high as f64 / matches.len() as f64;
    if ratio > 2.0 / 3.0 {
        ConfidenceLevel::High
    } else if ratio >= 1.0 / 3.0 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Mean match credit over the JD skills of one priority tier; `None` when
/// the JD lists no skills in that tier.
fn skill_component(matches: &[SkillMatch], priority: SkillPriority) -> Option<f64> {
    let tier: Vec<_> = matches.iter().filter(|m| m.jd_priority == priority).collect();
    if tier.is_empty() {
        return None;
    }
    let total: f64 = tier.iter().map(|m| credit(m.match_type)).sum();
    Some(total / tier.len() as f64)
}

fn credit(match_type: MatchType) -> f64 {
    match match_type {
        MatchType::Matched => 1.0,
        MatchType::Partial => 0.5,
        MatchType::Missing => 0.0,
    }
}

fn all_required_missing(matches: &[SkillMatch]) -> bool {
    let mut any = false;
    for m in matches.iter().filter(|m| m.jd_priority == SkillPriority::Required) {
        if m.match_type != MatchType::Missing {
            return false;
        }
        any = true;
    }
    any
}

/// Linear ramp from zero relevant years to the JD's stated requirement, or
/// the configured floor when the JD states none.
fn experience_score(
    signals: &ExperienceSignals,
    jd: &ParsedJobDescription,
    config: &EngineConfig,
) -> f64 {
    let floor = required_years(jd).unwrap_or(config.experience_floor_years);
    if floor <= 0.0 {
        return 1.0;
    }
    (signals.relevant_years / floor).clamp(0.0, 1.0)
}

/// First "N years"/"N+ years" (or "N months") figure in the JD's
/// experience requirement.
pub(crate) fn required_years(jd: &ParsedJobDescription) -> Option<f64> {
    let text = jd.experience_requirements.as_deref()?.to_lowercase();
    if let Some(caps) = YEARS_RE.captures(&text) {
        return caps[1].parse().ok();
    }
    let caps = MONTHS_RE.captures(&text)?;
    caps[1].parse::<f64>().ok().map(|m| m / 12.0)
}

/// Degree-level ladder. A JD with no parseable education requirement awards
/// full credit; a stated requirement the resume cannot meet awards zero,
/// except one level short which earns the configured partial credit.
fn education_score(resume: &ParsedResume, jd: &ParsedJobDescription, config: &EngineConfig) -> f64 {
    let Some(required) = jd
        .education_requirements
        .as_deref()
        .and_then(education_level)
    else {
        return 1.0;
    };

    let best = resume
        .education
        .iter()
        .filter_map(|e| {
            let mut text = e.degree.clone();
            if let Some(field) = &e.field_of_study {
                text.push(' ');
                text.push_str(field);
            }
            education_level(&text)
        })
        .max();

    match best {
        Some(level) if level >= required => 1.0,
        Some(level) if level + 1 == required => config.education_partial_credit,
        _ => 0.0,
    }
}

/// Maps free-text degree wording to a rung on the degree ladder.
pub(crate) fn education_level(text: &str) -> Option<u8> {
    let lower = text.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has(&["phd", "ph.d", "doctorate", "doctoral"]) {
        Some(5)
    } else if has(&["master", "msc", "m.sc", "m.s.", "mba", "m.tech", "meng", "m.eng"]) {
        Some(4)
    } else if has(&["bachelor", "bsc", "b.sc", "b.s.", "b.tech", "b.e.", "beng", "b.eng", "undergraduate degree"]) {
        Some(3)
    } else if has(&["associate"]) {
        Some(2)
    } else if has(&["diploma", "certificate"]) {
        Some(1)
    } else {
        None
    }
}

/// Proportional redistribution of the weights of absent components over the
/// present ones. The returned map always carries all four component names.
fn redistribute(components: &[(&'static str, Option<f64>, f64); 4]) -> BTreeMap<String, f64> {
    let present_sum: f64 = components
        .iter()
        .filter(|(_, score, _)| score.is_some())
        .map(|(_, _, weight)| weight)
        .sum();

    let mut applied = BTreeMap::new();
    for (name, score, weight) in components {
        let value = if score.is_some() && present_sum > 0.0 {
            weight / present_sum
        } else {
            0.0
        };
        applied.insert((*name).to_string(), value);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WEIGHT_SUM_TOLERANCE;
    use crate::models::OwnershipStrength;

    fn skill(
        name: &str,
        match_type: MatchType,
        confidence: ConfidenceLevel,
        priority: SkillPriority,
    ) -> SkillMatch {
        SkillMatch {
            skill_name: name.to_string(),
            canonical_name: name.to_string(),
            match_type,
            confidence,
            jd_priority: priority,
            evidence: None,
            line_number: None,
            match_score: match match_type {
                MatchType::Matched => 1.0,
                MatchType::Partial => 0.8,
                MatchType::Missing => 0.0,
            },
        }
    }

    fn signals(years: f64) -> ExperienceSignals {
        ExperienceSignals {
            relevant_years: years,
            ownership_strength: OwnershipStrength::Unknown,
            leadership_signals: vec![],
            responsibility_alignment: "unknown".to_string(),
        }
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_weights_applied_sum_to_one_after_redistribution() {
        // No optional skills in the JD: its 0.20 spreads over the rest.
        let matches = vec![skill(
            "Python",
            MatchType::Matched,
            ConfidenceLevel::High,
            SkillPriority::Required,
        )];
        let composed = compose(
            &matches,
            &signals(0.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &config(),
        );
        let w = &composed.breakdown.weights_applied;
        assert_eq!(w["optional_skills"], 0.0);
        assert!((w["required_skills"] - 0.5).abs() < 1e-9);
        assert!((w["experience_depth"] - 0.3125).abs() < 1e-9);
        assert!((w["education_match"] - 0.1875).abs() < 1e-9);
        assert!((w.values().sum::<f64>() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_no_redistribution_when_all_components_present() {
        let matches = vec![
            skill("Python", MatchType::Matched, ConfidenceLevel::High, SkillPriority::Required),
            skill("Docker", MatchType::Partial, ConfidenceLevel::Medium, SkillPriority::Optional),
        ];
        let composed = compose(
            &matches,
            &signals(2.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &config(),
        );
        let w = &composed.breakdown.weights_applied;
        assert_eq!(w["required_skills"], 0.40);
        assert_eq!(w["optional_skills"], 0.20);
        assert_eq!(w["experience_depth"], 0.25);
        assert_eq!(w["education_match"], 0.15);
    }

    #[test]
    fn test_skill_component_credit_ladder() {
        let matches = vec![
            skill("A", MatchType::Matched, ConfidenceLevel::High, SkillPriority::Required),
            skill("B", MatchType::Partial, ConfidenceLevel::Medium, SkillPriority::Required),
            skill("C", MatchType::Missing, ConfidenceLevel::Low, SkillPriority::Required),
            skill("D", MatchType::Missing, ConfidenceLevel::Low, SkillPriority::Required),
        ];
        let composed = compose(
            &matches,
            &signals(0.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &config(),
        );
        // (1.0 + 0.5 + 0 + 0) / 4
        assert!((composed.breakdown.required_skills_score - 0.375).abs() < 1e-9);
    }

    #[test]
    fn test_all_required_missing_applies_penalty() {
        let matches = vec![
            skill("Kafka", MatchType::Missing, ConfidenceLevel::Low, SkillPriority::Required),
            skill("Spark", MatchType::Missing, ConfidenceLevel::Low, SkillPriority::Required),
            skill("Docker", MatchType::Matched, ConfidenceLevel::High, SkillPriority::Optional),
        ];
        let cfg = config();
        let with_penalty = compose(
            &matches,
            &signals(10.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &cfg,
        );
        assert_eq!(with_penalty.breakdown.penalties_applied.len(), 1);
        assert!(with_penalty.breakdown.penalties_applied[0].contains("required"));

        // Same inputs but one required skill matched: no penalty, higher score.
        let mut recovered = matches.clone();
        recovered[0].match_type = MatchType::Matched;
        let without = compose(
            &recovered,
            &signals(10.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &cfg,
        );
        assert!(without.breakdown.penalties_applied.is_empty());
        assert!(without.job_fit_score > with_penalty.job_fit_score);
    }

    #[test]
    fn test_penalty_never_pushes_below_zero() {
        let matches = vec![skill(
            "Kafka",
            MatchType::Missing,
            ConfidenceLevel::Low,
            SkillPriority::Required,
        )];
        let composed = compose(
            &matches,
            &signals(0.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &config(),
        );
        assert_eq!(composed.job_fit_score, 0);
    }

    #[test]
    fn test_experience_ramp_against_stated_requirement() {
        let jd = ParsedJobDescription {
            experience_requirements: Some("5+ years of backend work".to_string()),
            ..Default::default()
        };
        let half = compose(&[], &signals(2.5), &ParsedResume::default(), &jd, &config());
        assert!((half.breakdown.experience_depth_score - 0.5).abs() < 1e-9);

        let over = compose(&[], &signals(12.0), &ParsedResume::default(), &jd, &config());
        assert_eq!(over.breakdown.experience_depth_score, 1.0);
    }

    #[test]
    fn test_experience_floor_used_when_jd_is_silent() {
        let composed = compose(
            &[],
            &signals(5.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &config(),
        );
        assert_eq!(composed.breakdown.experience_depth_score, 1.0);
    }

    #[test]
    fn test_required_years_parsing() {
        for (text, expected) in [
            ("5+ years", Some(5.0)),
            ("minimum 3 years experience", Some(3.0)),
            ("at least 7 yrs", Some(7.0)),
            ("18 months in a similar role", Some(1.5)),
            ("senior-level background", None),
        ] {
            let jd = ParsedJobDescription {
                experience_requirements: Some(text.to_string()),
                ..Default::default()
            };
            assert_eq!(required_years(&jd), expected, "text={text}");
        }
    }

    #[test]
    fn test_education_ladder() {
        assert_eq!(education_level("PhD in Physics"), Some(5));
        assert_eq!(education_level("Master of Science"), Some(4));
        assert_eq!(education_level("B.Tech, Computer Science"), Some(3));
        assert_eq!(education_level("Associate degree"), Some(2));
        assert_eq!(education_level("Diploma in welding"), Some(1));
        assert_eq!(education_level("School of Hard Knocks"), None);
    }

    fn resume_with_degree(degree: &str) -> ParsedResume {
        ParsedResume {
            education: vec![crate::models::EducationEntry {
                institution: "State University".to_string(),
                degree: degree.to_string(),
                field_of_study: None,
                start_date: None,
                end_date: None,
                gpa: None,
                source_text: degree.to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_education_match_meets_exceeds_and_misses() {
        let jd = ParsedJobDescription {
            education_requirements: Some("Bachelor's degree in CS".to_string()),
            ..Default::default()
        };
        let cfg = config();

        let meets = compose(&[], &signals(0.0), &resume_with_degree("BSc Computer Science"), &jd, &cfg);
        assert_eq!(meets.breakdown.education_match_score, 1.0);

        let exceeds = compose(&[], &signals(0.0), &resume_with_degree("Master of Engineering"), &jd, &cfg);
        assert_eq!(exceeds.breakdown.education_match_score, 1.0);

        let one_short = compose(&[], &signals(0.0), &resume_with_degree("Associate degree"), &jd, &cfg);
        assert_eq!(one_short.breakdown.education_match_score, cfg.education_partial_credit);

        let far_short = compose(&[], &signals(0.0), &resume_with_degree("Diploma"), &jd, &cfg);
        assert_eq!(far_short.breakdown.education_match_score, 0.0);

        let absent = compose(&[], &signals(0.0), &ParsedResume::default(), &jd, &cfg);
        assert_eq!(absent.breakdown.education_match_score, 0.0);
    }

    #[test]
    fn test_unstated_education_requirement_gives_full_credit() {
        let composed = compose(
            &[],
            &signals(0.0),
            &ParsedResume::default(),
            &ParsedJobDescription::default(),
            &config(),
        );
        assert_eq!(composed.breakdown.education_match_score, 1.0);
    }

    #[test]
    fn test_confidence_bands() {
        let m = |c| skill("X", MatchType::Matched, c, SkillPriority::Required);
        assert_eq!(confidence_level(&[]), ConfidenceLevel::Medium);
        assert_eq!(
            confidence_level(&[m(ConfidenceLevel::High), m(ConfidenceLevel::High), m(ConfidenceLevel::High)]),
            ConfidenceLevel::High
        );
        assert_eq!(
            confidence_level(&[m(ConfidenceLevel::High), m(ConfidenceLevel::Medium), m(ConfidenceLevel::Low)]),
            ConfidenceLevel::Medium
        );
        assert_eq!(
            confidence_level(&[m(ConfidenceLevel::Low), m(ConfidenceLevel::Low), m(ConfidenceLevel::Medium)]),
            ConfidenceLevel::Low
        );
    }

    #[test]
    fn test_score_is_bounded() {
        let matches = vec![
            skill("A", MatchType::Matched, ConfidenceLevel::High, SkillPriority::Required),
            skill("B", MatchType::Matched, ConfidenceLevel::High, SkillPriority::Optional),
        ];
        let composed = compose(
            &matches,
            &signals(40.0),
            &resume_with_degree("PhD"),
            &ParsedJobDescription::default(),
            &config(),
        );
        assert_eq!(composed.job_fit_score, 100);
    }
}
