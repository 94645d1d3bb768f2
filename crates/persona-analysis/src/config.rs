use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Maximum number of recommendations returned by default.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 8;

/// How slider values outside their axis domain are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Clamp into the domain before bucket lookup and persona rules
    #[default]
    Clamp,
    /// Leave the value as-is; it matches no bucket
    Skip,
}

/// Analyzer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Out-of-range slider handling
    #[serde(default)]
    pub range_policy: RangePolicy,

    /// Recommendation list cap
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

fn default_max_recommendations() -> usize {
    DEFAULT_MAX_RECOMMENDATIONS
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            range_policy: RangePolicy::Clamp,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn with_max_recommendations(mut self, max: usize) -> Self {
        self.max_recommendations = max;
        self
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.max_recommendations == 0 {
            return Err(ProfileError::InvalidConfig {
                message: "max_recommendations must be at least 1".into(),
            });
        }
        Ok(())
    }
}
