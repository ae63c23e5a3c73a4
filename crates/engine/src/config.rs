//! Engine configuration: score weights, fuzzy-match thresholds, and the
//! named scoring constants. Loaded once at process start; a malformed
//! weights table is a fatal error, not something the engine repairs.

use anyhow::Result;

use crate::errors::ConfigError;

/// Tolerance for the weights-sum-to-one check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Component weights for score composition. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub required_skills: f64,
    pub optional_skills: f64,
    pub experience_depth: f64,
    pub education_match: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.required_skills + self.optional_skills + self.experience_depth + self.education_match
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            required_skills: 0.40,
            optional_skills: 0.20,
            experience_depth: 0.25,
            education_match: 0.15,
        }
    }
}

/// Fuzzy-similarity boundaries in [0,1].
///
/// `high` and above is a confident match; between `low` and `high` is a
/// partial/low-confidence match; below `low` is no match. Defaults mirror
/// the 90/75 (out of 100) ratios the scoring rules were tuned against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    pub high: f64,
    pub low: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            high: 0.90,
            low: 0.75,
        }
    }
}

/// Coverage-ratio breakpoints for the responsibility-alignment label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentBuckets {
    /// Coverage at or above this ratio reads as "strong".
    pub strong: f64,
    /// Coverage at or above this ratio (but below `strong`) reads as "partial".
    pub partial: f64,
}

impl Default for AlignmentBuckets {
    fn default() -> Self {
        Self {
            strong: 0.6,
            partial: 0.3,
        }
    }
}

/// Full engine configuration with documented defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub weights: Weights,
    pub thresholds: MatchThresholds,
    /// Years of relevant experience that earn a full experience-depth score
    /// when the JD states no numeric requirement of its own.
    pub experience_floor_years: f64,
    /// Similarity floor for category-level partial matches (same taxonomy
    /// category, different canonical name).
    pub category_similarity_floor: f64,
    /// Credit granted when the resume's highest degree sits one level below
    /// the JD's stated requirement.
    pub education_partial_credit: f64,
    /// Composite deduction applied when every required skill is missing.
    pub missing_required_penalty: f64,
    pub alignment: AlignmentBuckets,
    /// Cap on improvement suggestions, applied after deterministic ordering.
    pub max_suggestions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            thresholds: MatchThresholds::default(),
            experience_floor_years: 5.0,
            category_similarity_floor: 0.50,
            education_partial_credit: 0.5,
            missing_required_penalty: 0.15,
            alignment: AlignmentBuckets::default(),
            max_suggestions: 5,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from the environment, falling back to documented
    /// defaults. Recognized variables (all optional):
    ///
    /// - `JOBFIT_WEIGHT_REQUIRED`, `JOBFIT_WEIGHT_OPTIONAL`,
    ///   `JOBFIT_WEIGHT_EXPERIENCE`, `JOBFIT_WEIGHT_EDUCATION`
    /// - `JOBFIT_THRESHOLD_HIGH`, `JOBFIT_THRESHOLD_LOW`
    /// - `JOBFIT_EXPERIENCE_FLOOR_YEARS`
    /// - `JOBFIT_MISSING_REQUIRED_PENALTY`
    /// - `JOBFIT_MAX_SUGGESTIONS`
    ///
    /// The result is validated; a weights table that does not sum to 1.0 is
    /// a fatal error here, at process start.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut config = Self::default();
        config.weights.required_skills =
            env_f64("JOBFIT_WEIGHT_REQUIRED", config.weights.required_skills)?;
        config.weights.optional_skills =
            env_f64("JOBFIT_WEIGHT_OPTIONAL", config.weights.optional_skills)?;
        config.weights.experience_depth =
            env_f64("JOBFIT_WEIGHT_EXPERIENCE", config.weights.experience_depth)?;
        config.weights.education_match =
            env_f64("JOBFIT_WEIGHT_EDUCATION", config.weights.education_match)?;
        config.thresholds.high = env_f64("JOBFIT_THRESHOLD_HIGH", config.thresholds.high)?;
        config.thresholds.low = env_f64("JOBFIT_THRESHOLD_LOW", config.thresholds.low)?;
        config.experience_floor_years = env_f64(
            "JOBFIT_EXPERIENCE_FLOOR_YEARS",
            config.experience_floor_years,
        )?;
        config.missing_required_penalty = env_f64(
            "JOBFIT_MISSING_REQUIRED_PENALTY",
            config.missing_required_penalty,
        )?;
        if let Ok(raw) = std::env::var("JOBFIT_MAX_SUGGESTIONS") {
            config.max_suggestions =
                raw.parse()
                    .map_err(|_| ConfigError::BadEnvValue {
                        key: "JOBFIT_MAX_SUGGESTIONS".to_string(),
                        value: raw,
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration. Called once at engine construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("required_skills", self.weights.required_skills),
            ("optional_skills", self.weights.optional_skills),
            ("experience_depth", self.weights.experience_depth),
            ("education_match", self.weights.education_match),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }

        let MatchThresholds { high, low } = self.thresholds;
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
            return Err(ConfigError::InvalidThresholds { low, high });
        }

        check_range(
            "category_similarity_floor",
            self.category_similarity_floor,
            0.0,
            1.0,
        )?;
        check_range(
            "education_partial_credit",
            self.education_partial_credit,
            0.0,
            1.0,
        )?;
        check_range(
            "missing_required_penalty",
            self.missing_required_penalty,
            0.0,
            1.0,
        )?;
        check_range("experience_floor_years", self.experience_floor_years, 0.0, 60.0)?;
        check_range("alignment.strong", self.alignment.strong, 0.0, 1.0)?;
        check_range("alignment.partial", self.alignment.partial, 0.0, 1.0)?;

        Ok(())
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn env_f64(key: &str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::BadEnvValue {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
