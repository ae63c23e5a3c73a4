//! Evaluation output models.
//!
//! Closed enums (not open strings) for match types, confidence levels, and
//! skill categories, so exhaustive matches catch unhandled cases at compile
//! time. Maps use `BTreeMap` so serialized output is byte-identical across
//! runs of the same input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::job::SkillPriority;

/// Classification of a JD skill against the candidate's skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Matched,
    Partial,
    Missing,
}

/// Qualitative strength of a normalization or match decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "high"),
            ConfidenceLevel::Medium => write!(f, "medium"),
            ConfidenceLevel::Low => write!(f, "low"),
        }
    }
}

/// Skill category, taken from the taxonomy reference dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    ProgrammingLanguages,
    Frameworks,
    Databases,
    Tools,
    Cloud,
    SoftSkills,
    Other,
}

/// Individual skill match result with evidence from the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    /// The skill as it appeared in the job description.
    pub skill_name: String,
    pub canonical_name: String,
    pub match_type: MatchType,
    pub confidence: ConfidenceLevel,
    pub jd_priority: SkillPriority,
    /// Resume snippet showing the skill; absent for missing skills.
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    /// Similarity value used for the decision; 1.0 for exact canonical match.
    pub match_score: f64,
}

/// Breakdown of how the composite score was calculated. Component scores are
/// in [0,1]; `weights_applied` sums to 1.0 after any redistribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub required_skills_score: f64,
    pub optional_skills_score: f64,
    pub experience_depth_score: f64,
    pub education_match_score: f64,
    pub weights_applied: BTreeMap<String, f64>,
    #[serde(default)]
    pub penalties_applied: Vec<String>,
}

/// Ownership classification derived from experience descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnershipStrength {
    High,
    Medium,
    Low,
    Unknown,
}

impl fmt::Display for OwnershipStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnershipStrength::High => write!(f, "High"),
            OwnershipStrength::Medium => write!(f, "Medium"),
            OwnershipStrength::Low => write!(f, "Low"),
            OwnershipStrength::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Career signals extracted from the experience section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceSignals {
    pub relevant_years: f64,
    pub ownership_strength: OwnershipStrength,
    /// Literal matched keyword phrases, deduplicated, in order of first appearance.
    #[serde(default)]
    pub leadership_signals: Vec<String>,
    pub responsibility_alignment: String,
}

/// Single improvement suggestion. Priority is the numeric 1 (highest) to
/// 5 (lowest) scale; the string band mapping lives at the explanation
/// boundary, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub category: String,
    pub priority: u8,
    pub suggestion: String,
    #[serde(default)]
    pub evidence_gap: Option<String>,
    #[serde(default)]
    pub affected_skills: Vec<String>,
}

/// Complete evaluation result returned to the API layer and report generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub job_fit_score: u8,
    pub confidence_level: ConfidenceLevel,
    pub score_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub skill_matches: Vec<SkillMatch>,
    pub matched_count: usize,
    pub partial_count: usize,
    pub missing_count: usize,
    pub explanation: String,
    #[serde(default)]
    pub experience_signals: Option<ExperienceSignals>,
    #[serde(default)]
    pub improvement_suggestions: Vec<ImprovementSuggestion>,
    pub advisory_notice: String,
}
