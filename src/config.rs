use thiserror::Error;

/// Number of rules accumulated per chunk during generation, to avoid
/// resizing one monolithic slice while the rule count is unknown.
pub const RULE_CHUNK_SIZE: usize = 10_000;

/// Progress spinner tick interval (tick every N transactions).
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Threshold options governing a mining run.
#[derive(Debug, Clone, Copy)]
pub struct MiningOptions {
    /// Floor on itemset support, in `[0, 1]`.
    pub min_support: f64,
    /// Floor on rule confidence, in `[0, 1]`.
    pub min_confidence: f64,
    /// Floor on rule lift, in `[1, inf)`.
    pub min_lift: f64,
}

/// Validation failures for [`MiningOptions`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--min-support must be in the range [0, 1]")]
    MinSupportOutOfRange,

    #[error("--min-confidence must be in the range [0, 1]")]
    MinConfidenceOutOfRange,

    #[error("--min-lift must be at least 1")]
    MinLiftOutOfRange,
}

impl MiningOptions {
    /// Checks every threshold before any work begins. NaN fails the same
    /// check its value would.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(ConfigError::MinSupportOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::MinConfidenceOutOfRange);
        }
        if !(self.min_lift >= 1.0) {
            return Err(ConfigError::MinLiftOutOfRange);
        }
        Ok(())
    }
}
