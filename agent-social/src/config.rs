//! Ranking configuration.

use std::fmt::{self, Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{SocialError, SocialResult};

/// What to do with candidates whose similarity could not be computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    /// Keep the candidate and sort it after every scored candidate.
    #[default]
    KeepLast,
    /// Leave the candidate out of the suggestions.
    Drop,
}

impl NanPolicy {
    /// Returns a stable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KeepLast => "keep-last",
            Self::Drop => "drop",
        }
    }
}

impl Display for NanPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NanPolicy {
    type Err = SocialError;

    fn from_str(s: &str) -> SocialResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep-last" | "keep_last" | "keep" => Ok(Self::KeepLast),
            "drop" => Ok(Self::Drop),
            _ => Err(SocialError::InvalidConfig(
                "nan policy must be `keep-last` or `drop`",
            )),
        }
    }
}

/// Configuration for [`CandidateRanker`](crate::CandidateRanker).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankerConfig {
    nan_policy: NanPolicy,
    max_suggestions: Option<NonZeroUsize>,
}

impl RankerConfig {
    /// Creates the default configuration: keep unscored candidates, no limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for unscored candidates.
    #[must_use]
    pub fn with_nan_policy(mut self, nan_policy: NanPolicy) -> Self {
        self.nan_policy = nan_policy;
        self
    }

    /// Caps the number of suggestions returned.
    #[must_use]
    pub fn with_max_suggestions(mut self, max_suggestions: NonZeroUsize) -> Self {
        self.max_suggestions = Some(max_suggestions);
        self
    }

    /// Returns the policy for unscored candidates.
    #[must_use]
    pub const fn nan_policy(self) -> NanPolicy {
        self.nan_policy
    }

    /// Returns the suggestion cap, if configured.
    #[must_use]
    pub const fn max_suggestions(self) -> Option<NonZeroUsize> {
        self.max_suggestions
    }

    /// Builds a configuration from loosely typed inputs such as CLI flags.
    ///
    /// A `max_suggestions` of zero means "no limit".
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::InvalidConfig`] when the policy label is unknown.
    pub fn from_parts(nan_policy: &str, max_suggestions: usize) -> SocialResult<Self> {
        let mut config = Self::new().with_nan_policy(nan_policy.parse()?);
        if let Some(limit) = NonZeroUsize::new(max_suggestions) {
            config = config.with_max_suggestions(limit);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_unscored_candidates() {
        let config = RankerConfig::default();
        assert_eq!(config.nan_policy(), NanPolicy::KeepLast);
        assert!(config.max_suggestions().is_none());
    }

    #[test]
    fn parses_policy_labels() {
        assert_eq!("drop".parse::<NanPolicy>().unwrap(), NanPolicy::Drop);
        assert_eq!("Keep_Last".parse::<NanPolicy>().unwrap(), NanPolicy::KeepLast);
        assert!(matches!(
            "ignore".parse::<NanPolicy>(),
            Err(SocialError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_limit_means_unbounded() {
        let config = RankerConfig::from_parts("drop", 0).unwrap();
        assert_eq!(config.nan_policy(), NanPolicy::Drop);
        assert!(config.max_suggestions().is_none());

        let config = RankerConfig::from_parts("keep-last", 3).unwrap();
        assert_eq!(config.max_suggestions().map(NonZeroUsize::get), Some(3));
    }
}
