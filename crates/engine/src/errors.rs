use thiserror::Error;

/// Fatal configuration errors, raised once at engine construction.
/// The engine refuses to run with an invalid configuration rather than
/// silently normalizing it; evaluation itself is infallible.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("score weights must sum to 1.0, got {sum:.6}")]
    WeightSum { sum: f64 },

    #[error("weight '{name}' must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },

    #[error("match thresholds must satisfy 0.0 <= low <= high <= 1.0 (low={low}, high={high})")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("'{name}' must be within {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("environment variable '{key}' has unparseable value '{value}'")]
    BadEnvValue { key: String, value: String },
}
