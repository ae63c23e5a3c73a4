use serde::{Deserialize, Serialize};

/// Whether a JD skill is a hard requirement or a nice-to-have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillPriority {
    #[default]
    Required,
    Optional,
}

/// A single requirement line extracted from the job description, with the
/// skill names the JD parser pulled out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JDRequirement {
    pub text: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub priority: SkillPriority,
}

/// Parsed job description structure, as delivered by the JD parsing
/// collaborator. `required_skills`/`optional_skills` are the derived,
/// deduplicated skill sets; `experience_requirements` and
/// `education_requirements` are free-text (e.g. "5+ years", "Bachelor's in CS").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedJobDescription {
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub requirements: Vec<JDRequirement>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub optional_skills: Vec<String>,
    #[serde(default)]
    pub experience_requirements: Option<String>,
    #[serde(default)]
    pub education_requirements: Option<String>,
}
