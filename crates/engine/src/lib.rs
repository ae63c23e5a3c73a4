//! Deterministic resume-to-job-description fit scoring.
//!
//! The engine takes a [`ParsedResume`] and a [`ParsedJobDescription`] (both
//! produced by an upstream parsing service) and returns an
//! [`EvaluationResult`]: a 0-100 job-fit score with a full component
//! breakdown, per-skill match classifications with resume evidence,
//! extracted experience signals, a prose explanation, and an ordered
//! improvement plan.
//!
//! The pipeline is a chain of pure functions over a read-only skill
//! taxonomy loaded once per process:
//!
//! ```text
//! ParsedResume + ParsedJobDescription
//!     → taxonomy (normalize) → matching → signals
//!     → scoring → explain → EvaluationResult
//! ```
//!
//! Nothing in the pipeline reads a clock, draws randomness, or performs
//! I/O, so identical inputs always serialize to identical output and one
//! [`Engine`] can serve any number of concurrent evaluations.
//!
//! ```
//! use jobfit_engine::{Engine, ParsedJobDescription, ParsedResume};
//!
//! let engine = Engine::default();
//! let result = engine.evaluate(&ParsedResume::default(), &ParsedJobDescription::default());
//! assert!(result.job_fit_score <= 100);
//! ```

mod config;
mod engine;
mod errors;
pub mod explain;
pub mod matching;
mod models;
pub mod scoring;
pub mod signals;
pub mod taxonomy;

pub use config::{AlignmentBuckets, EngineConfig, MatchThresholds, Weights};
pub use engine::Engine;
pub use errors::ConfigError;
pub use models::{
    CertificationEntry, ConfidenceLevel, EducationEntry, EvaluationResult, ExperienceEntry,
    ExperienceSignals, ExtractedSkill, ImprovementSuggestion, JDRequirement, MatchType,
    OwnershipStrength, ParsedJobDescription, ParsedResume, ProjectEntry, ScoreBreakdown,
    SkillCategory, SkillMatch, SkillPriority,
};
