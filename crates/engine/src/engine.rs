//! Engine facade: validated configuration plus the shared taxonomy, exposing
//! one pure evaluation call.

use tracing::debug;

use crate::config::EngineConfig;
use crate::errors::ConfigError;
use crate::explain;
use crate::explain::templates::ADVISORY_NOTICE;
use crate::matching::match_skills;
use crate::models::{EvaluationResult, MatchType, ParsedJobDescription, ParsedResume};
use crate::scoring;
use crate::signals::extract_signals;
use crate::taxonomy::{self, Taxonomy};

/// Fit-scoring engine. Construction validates the configuration once; after
/// that, [`evaluate`](Engine::evaluate) is a pure function of its inputs —
/// no clocks, no randomness, no I/O — so the same resume and job
/// description always produce an identical result, and one engine may serve
/// arbitrarily many concurrent evaluations.
pub struct Engine {
    config: EngineConfig,
    taxonomy: &'static Taxonomy,
}

impl Engine {
    /// Builds an engine with the given configuration. A weights table that
    /// does not sum to 1.0, or any constant out of range, is rejected here
    /// rather than repaired.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            taxonomy: taxonomy::shared(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores one resume against one job description.
    ///
    /// Empty collections on either side are valid, scoreable input: the
    /// affected component scores zero (or has its weight redistributed,
    /// for empty JD skill tiers), never an error.
    pub fn evaluate(
        &self,
        resume: &ParsedResume,
        jd: &ParsedJobDescription,
    ) -> EvaluationResult {
        debug!(
            resume_skills = resume.skills.len(),
            required = jd.required_skills.len(),
            optional = jd.optional_skills.len(),
            "evaluating resume against job description"
        );

        let skill_matches = match_skills(&resume.skills, jd, self.taxonomy, &self.config);
        let signals = extract_signals(&resume.experience, jd, &self.config.alignment);
        let composed = scoring::compose(&skill_matches, &signals, resume, jd, &self.config);
        let confidence_level = scoring::confidence_level(&skill_matches);

        let (explanation, improvement_suggestions) = explain::explain(
            composed.job_fit_score,
            &composed.breakdown,
            &skill_matches,
            &signals,
            resume,
            &self.config,
        );

        let count = |t: MatchType| skill_matches.iter().filter(|m| m.match_type == t).count();
        let matched_count = count(MatchType::Matched);
        let partial_count = count(MatchType::Partial);
        let missing_count = count(MatchType::Missing);

        EvaluationResult {
            job_fit_score: composed.job_fit_score,
            confidence_level,
            score_breakdown: composed.breakdown,
            matched_count,
            partial_count,
            missing_count,
            skill_matches,
            explanation,
            experience_signals: Some(signals),
            improvement_suggestions,
            advisory_notice: ADVISORY_NOTICE.to_string(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        // The default configuration is statically valid.
        Self {
            config: EngineConfig::default(),
            taxonomy: taxonomy::shared(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WEIGHT_SUM_TOLERANCE;
    use crate::models::{
        ConfidenceLevel, EducationEntry, ExperienceEntry, ExtractedSkill, SkillCategory,
        SkillPriority,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn extracted(name: &str, source: &str, line: u32) -> ExtractedSkill {
        ExtractedSkill {
            name: name.to_string(),
            canonical_name: name.to_string(),
            category: SkillCategory::Other,
            confidence: ConfidenceLevel::Medium,
            source_text: source.to_string(),
            line_number: Some(line),
        }
    }

    fn scenario_resume() -> ParsedResume {
        ParsedResume {
            skills: vec![
                extracted("Python", "Python, MySQL", 10),
                extracted("MySQL", "Python, MySQL", 10),
            ],
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                title: "Backend Engineer".to_string(),
                start_date: Some("2019-01".to_string()),
                end_date: Some("2023-01".to_string()),
                description: "Led migration of Python services; cut costs by 30%".to_string(),
                responsibilities: vec!["Owned the billing pipeline".to_string()],
                source_text: String::new(),
            }],
            education: vec![EducationEntry {
                institution: "State University".to_string(),
                degree: "B.Sc. Computer Science".to_string(),
                field_of_study: None,
                start_date: None,
                end_date: None,
                gpa: None,
                source_text: String::new(),
            }],
            ..Default::default()
        }
    }

    fn scenario_jd() -> ParsedJobDescription {
        ParsedJobDescription {
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            optional_skills: vec!["AWS".to_string()],
            experience_requirements: Some("3+ years".to_string()),
            education_requirements: Some("Bachelor's degree".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let mut config = EngineConfig::default();
        config.weights.required_skills = 0.9;
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn test_scenario_classifications_and_required_score() {
        init_tracing();
        let engine = Engine::default();
        let result = engine.evaluate(&scenario_resume(), &scenario_jd());

        let by_name = |name: &str| {
            result
                .skill_matches
                .iter()
                .find(|m| m.skill_name == name)
                .unwrap()
        };
        assert_eq!(by_name("Python").match_type, MatchType::Matched);
        assert_eq!(by_name("SQL").match_type, MatchType::Missing);
        assert_eq!(by_name("AWS").match_type, MatchType::Missing);
        assert_eq!(result.score_breakdown.required_skills_score, 0.5);
        assert_eq!(by_name("AWS").jd_priority, SkillPriority::Optional);
    }

    #[test]
    fn test_counts_partition_the_matches() {
        let engine = Engine::default();
        let result = engine.evaluate(&scenario_resume(), &scenario_jd());
        assert_eq!(
            result.matched_count + result.partial_count + result.missing_count,
            result.skill_matches.len()
        );
        assert_eq!(result.skill_matches.len(), 3);
    }

    #[test]
    fn test_score_and_components_are_bounded() {
        let engine = Engine::default();
        let result = engine.evaluate(&scenario_resume(), &scenario_jd());
        assert!(result.job_fit_score <= 100);
        let b = &result.score_breakdown;
        for score in [
            b.required_skills_score,
            b.optional_skills_score,
            b.experience_depth_score,
            b.education_match_score,
        ] {
            assert!((0.0..=1.0).contains(&score), "component {score}");
        }
        assert!(
            (b.weights_applied.values().sum::<f64>() - 1.0).abs() < WEIGHT_SUM_TOLERANCE
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let engine = Engine::default();
        let resume = scenario_resume();
        let jd = scenario_jd();
        let a = serde_json::to_string(&engine.evaluate(&resume, &jd)).unwrap();
        let b = serde_json::to_string(&engine.evaluate(&resume, &jd)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_required_missing_penalizes_score() {
        let engine = Engine::default();
        let resume = ParsedResume {
            skills: vec![extracted("Haskell", "Haskell enthusiast", 3)],
            ..scenario_resume()
        };
        let jd = scenario_jd();
        let penalized = engine.evaluate(&resume, &jd);
        assert!(!penalized.score_breakdown.penalties_applied.is_empty());

        let mut lenient_config = EngineConfig::default();
        lenient_config.missing_required_penalty = 0.0;
        let lenient = Engine::new(lenient_config).unwrap().evaluate(&resume, &jd);
        assert!(penalized.job_fit_score < lenient.job_fit_score);
    }

    #[test]
    fn test_empty_optional_tier_redistributes_weight() {
        let engine = Engine::default();
        let jd = ParsedJobDescription {
            optional_skills: vec![],
            ..scenario_jd()
        };
        let result = engine.evaluate(&scenario_resume(), &jd);
        let w = &result.score_breakdown.weights_applied;
        assert_eq!(w["optional_skills"], 0.0);
        assert!(w["required_skills"] > 0.40);
        assert!(w["experience_depth"] > 0.25);
        assert!(w["education_match"] > 0.15);
        assert!((w.values().sum::<f64>() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_fully_empty_inputs_are_scoreable() {
        let engine = Engine::default();
        let result = engine.evaluate(&ParsedResume::default(), &ParsedJobDescription::default());
        assert!(result.job_fit_score <= 100);
        assert!(result.skill_matches.is_empty());
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
        assert!(!result.advisory_notice.is_empty());
    }

    #[test]
    fn test_result_carries_experience_signals_and_advisory() {
        let engine = Engine::default();
        let result = engine.evaluate(&scenario_resume(), &scenario_jd());
        let signals = result.experience_signals.unwrap();
        assert!(signals.relevant_years > 3.9 && signals.relevant_years < 4.1);
        assert!(!signals.leadership_signals.is_empty());
        assert_eq!(result.advisory_notice, ADVISORY_NOTICE);
    }

    #[test]
    fn test_suggestions_are_ordered_and_capped() {
        let mut config = EngineConfig::default();
        config.max_suggestions = 2;
        let engine = Engine::new(config).unwrap();
        let resume = ParsedResume::default();
        let jd = ParsedJobDescription {
            required_skills: vec!["Kafka".to_string(), "Airflow".to_string(), "Spark".to_string()],
            ..Default::default()
        };
        let result = engine.evaluate(&resume, &jd);
        assert_eq!(result.improvement_suggestions.len(), 2);
        assert_eq!(result.improvement_suggestions[0].affected_skills[0], "Airflow");
        assert_eq!(result.improvement_suggestions[1].affected_skills[0], "Kafka");
    }
}
