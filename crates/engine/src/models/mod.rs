//! Input/output data models exchanged with the parsing and API collaborators.
//!
//! Everything here is plain data: created once per evaluation, never mutated
//! after construction. All types derive `Serialize`/`Deserialize` so the API
//! layer can pass them through without conversion glue.

pub mod evaluation;
pub mod job;
pub mod resume;

pub use evaluation::{
    ConfidenceLevel, EvaluationResult, ExperienceSignals, ImprovementSuggestion, MatchType,
    OwnershipStrength, ScoreBreakdown, SkillCategory, SkillMatch,
};
pub use job::{JDRequirement, ParsedJobDescription, SkillPriority};
pub use resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, ExtractedSkill, ParsedResume,
    ProjectEntry,
};
