//! Skill matcher: classifies every JD skill against the candidate's skill
//! set as matched, partial, or missing, with resume evidence attached.
//!
//! The matcher is the primary source of scoring input and must never panic
//! on absent fields; a resume skill without a line number simply yields
//! evidence without a position.

use std::collections::HashSet;

use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{
    ConfidenceLevel, ExtractedSkill, MatchType, ParsedJobDescription, SkillCategory, SkillMatch,
    SkillPriority,
};
use crate::taxonomy::{similarity, Taxonomy};

/// A resume skill after re-normalization against the taxonomy.
struct ResumeSkill<'a> {
    canonical: String,
    category: SkillCategory,
    raw: &'a ExtractedSkill,
}

/// Matches the candidate's skills against the JD's required and optional
/// skill sets. Produces exactly one entry per unique canonicalized skill in
/// the union of the two sets; a skill listed as both required and optional
/// counts as required.
pub fn match_skills(
    resume_skills: &[ExtractedSkill],
    jd: &ParsedJobDescription,
    taxonomy: &Taxonomy,
    config: &EngineConfig,
) -> Vec<SkillMatch> {
    let thresholds = &config.thresholds;

    let candidates: Vec<ResumeSkill<'_>> = resume_skills
        .iter()
        .map(|skill| {
            let normalized = taxonomy.normalize(&skill.name, thresholds);
            ResumeSkill {
                canonical: normalized.canonical_name,
                category: normalized.category,
                raw: skill,
            }
        })
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut matches = Vec::new();

    let jd_skills = jd
        .required_skills
        .iter()
        .map(|s| (s, SkillPriority::Required))
        .chain(jd.optional_skills.iter().map(|s| (s, SkillPriority::Optional)));

    for (raw_skill, priority) in jd_skills {
        let normalized = taxonomy.normalize(raw_skill, thresholds);
        if !seen.insert(normalized.canonical_name.to_lowercase()) {
            continue;
        }
        matches.push(match_one(
            raw_skill,
            &normalized.canonical_name,
            normalized.category,
            priority,
            &candidates,
            config,
        ));
    }

    debug!(
        total = matches.len(),
        matched = matches.iter().filter(|m| m.match_type == MatchType::Matched).count(),
        "skill matching complete"
    );

    matches
}

fn match_one(
    raw_skill: &str,
    jd_canonical: &str,
    jd_category: SkillCategory,
    priority: SkillPriority,
    candidates: &[ResumeSkill<'_>],
    config: &EngineConfig,
) -> SkillMatch {
    // Canonical-name equality first.
    let exact = best_candidate(
        candidates
            .iter()
            .filter(|c| c.canonical.eq_ignore_ascii_case(jd_canonical)),
    );
    if let Some(found) = exact {
        return build_match(
            raw_skill,
            jd_canonical,
            MatchType::Matched,
            ConfidenceLevel::High,
            priority,
            1.0,
            Some(found.raw),
        );
    }

    // Fuzzy fallback: the same similarity procedure as normalization,
    // applied skill-to-skill on canonical names. Unlike the normalizer,
    // which reserves high confidence for exact dictionary hits, a fuzzy
    // similarity at or above the high threshold grades high here: both
    // sides name the same skill with evidence on the resume, and the
    // variance is spelling, not substance.
    let fuzzy = candidates
        .iter()
        .map(|c| (similarity(jd_canonical, &c.canonical), c))
        .filter(|(sim, _)| *sim >= config.thresholds.low)
        .max_by(|a, b| compare_scored(a, b));
    if let Some((sim, found)) = fuzzy {
        let (match_type, confidence) = if sim >= config.thresholds.high {
            (MatchType::Matched, ConfidenceLevel::High)
        } else {
            (MatchType::Partial, ConfidenceLevel::Medium)
        };
        return build_match(
            raw_skill,
            jd_canonical,
            match_type,
            confidence,
            priority,
            sim,
            Some(found.raw),
        );
    }

    // Category-level fallback: same taxonomy category (never `other`),
    // different canonical name, supporting evidence on the resume side, and
    // at least a floor of lexical similarity.
    if jd_category != SkillCategory::Other {
        let related = candidates
            .iter()
            .filter(|c| c.category == jd_category && !c.raw.source_text.trim().is_empty())
            .map(|c| (similarity(jd_canonical, &c.canonical), c))
            .filter(|(sim, _)| *sim >= config.category_similarity_floor)
            .max_by(|a, b| compare_scored(a, b));
        if let Some((sim, found)) = related {
            return build_match(
                raw_skill,
                jd_canonical,
                MatchType::Partial,
                ConfidenceLevel::Low,
                priority,
                sim,
                Some(found.raw),
            );
        }
    }

    build_match(
        raw_skill,
        jd_canonical,
        MatchType::Missing,
        ConfidenceLevel::Low,
        priority,
        0.0,
        None,
    )
}

/// Total order over (similarity, candidate): higher similarity wins, then
/// higher extraction confidence, then earliest line number (absent sorts
/// last), then alphabetical name. `max_by` with this comparator is therefore
/// deterministic for any input ordering.
fn compare_scored(
    a: &(f64, &ResumeSkill<'_>),
    b: &(f64, &ResumeSkill<'_>),
) -> std::cmp::Ordering {
    let key = |(sim, c): &(f64, &ResumeSkill<'_>)| {
        (
            *sim,
            c.raw.confidence,
            std::cmp::Reverse(c.raw.line_number.unwrap_or(u32::MAX)),
            std::cmp::Reverse(c.raw.name.clone()),
        )
    };
    key(a)
        .partial_cmp(&key(b))
        .unwrap_or(std::cmp::Ordering::Equal)
}

/// Best candidate among equals (used when several resume skills share the
/// JD skill's canonical name): higher confidence, then earliest line number,
/// then alphabetical name.
fn best_candidate<'a, 'b, I>(iter: I) -> Option<&'a ResumeSkill<'b>>
where
    I: Iterator<Item = &'a ResumeSkill<'b>>,
{
    iter.max_by_key(|c| {
        (
            c.raw.confidence,
            std::cmp::Reverse(c.raw.line_number.unwrap_or(u32::MAX)),
            std::cmp::Reverse(c.raw.name.clone()),
        )
    })
}

fn build_match(
    raw_skill: &str,
    canonical: &str,
    match_type: MatchType,
    confidence: ConfidenceLevel,
    priority: SkillPriority,
    score: f64,
    found: Option<&ExtractedSkill>,
) -> SkillMatch {
    let evidence = found.and_then(|s| {
        let text = s.source_text.trim();
        (!text.is_empty()).then(|| text.to_string())
    });
    SkillMatch {
        skill_name: raw_skill.to_string(),
        canonical_name: canonical.to_string(),
        match_type,
        confidence,
        jd_priority: priority,
        line_number: found.and_then(|s| s.line_number),
        evidence,
        match_score: score,
    }
}
