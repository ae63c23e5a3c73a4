use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::evaluation::{ConfidenceLevel, SkillCategory};

/// Education section entry as produced by the resume parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    /// Original text from the resume.
    pub source_text: String,
}

/// Work experience section entry. Dates stay as raw strings — the parser
/// makes no format guarantee, so the signal extractor parses them leniently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    pub source_text: String,
}

/// Project section entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub source_text: String,
}

/// Certification/credential entry. Carried on the input contract but not
/// scored by any component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub source_text: String,
}

/// A skill the parser extracted from the resume, with the evidence of where
/// it was found. `canonical_name` is the parser's best guess — the matcher
/// re-normalizes `name` against the taxonomy rather than trusting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub canonical_name: String,
    pub category: SkillCategory,
    pub confidence: ConfidenceLevel,
    /// Text where the skill was found.
    pub source_text: String,
    #[serde(default)]
    pub line_number: Option<u32>,
}

/// Complete parsed resume structure, as delivered by the parsing collaborator.
/// Every collection may legitimately be empty; the engine scores empty input
/// as 0 for the corresponding component, never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub skills: Vec<ExtractedSkill>,
    #[serde(default)]
    pub contact_info: BTreeMap<String, String>,
    #[serde(default)]
    pub parsing_warnings: Vec<String>,
}
