use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable with the comma separated list of the disabled warnings.
pub const DISABLED_WARNINGS_ENV: &str = "VARREF_DISABLED_WARNINGS";

/// Category of a recoverable warning.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageWarning {
    /// A constant bound or subscript lies outside of the valid range.
    Bounds,
    /// Folding a constant expression overflowed or divided by zero.
    FoldingException,
}

impl UsageWarning {
    pub fn all() -> Vec<Self> {
        vec![UsageWarning::Bounds, UsageWarning::FoldingException]
    }

    pub fn name(&self) -> &'static str {
        match self {
            UsageWarning::Bounds => "bounds",
            UsageWarning::FoldingException => "folding-exception",
        }
    }
}

impl Display for UsageWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UsageWarning {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| FeatureError::UnknownWarning(s.to_string()))
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum FeatureError {
    #[error("Unknown warning category: {0:?}")]
    UnknownWarning(String),
}

/// Which optional diagnostics are emitted. Every warning is enabled by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageFeatures {
    /// The warnings that must not be emitted.
    disabled_warnings: BTreeSet<UsageWarning>,
}

impl LanguageFeatures {
    /// Get the features from the environment variables.
    pub fn from_env() -> Result<LanguageFeatures, FeatureError> {
        let disabled = std::env::var(DISABLED_WARNINGS_ENV).unwrap_or_default();
        Self::with_disabled(&disabled)
    }

    /// Build the features disabling the warnings in the comma separated list.
    pub fn with_disabled(list: &str) -> Result<LanguageFeatures, FeatureError> {
        let disabled_warnings = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(UsageWarning::from_str)
            .collect::<Result<_, _>>()?;
        Ok(LanguageFeatures { disabled_warnings })
    }

    pub fn should_warn(&self, warning: UsageWarning) -> bool {
        !self.disabled_warnings.contains(&warning)
    }

    pub fn enable_warning(&mut self, warning: UsageWarning, enabled: bool) {
        if enabled {
            self.disabled_warnings.remove(&warning);
        } else {
            self.disabled_warnings.insert(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_warns() {
        let features = LanguageFeatures::default();
        assert!(features.should_warn(UsageWarning::Bounds));
        assert!(features.should_warn(UsageWarning::FoldingException));
    }

    #[test]
    fn test_with_disabled() {
        let features = LanguageFeatures::with_disabled(" bounds ,").unwrap();
        assert!(!features.should_warn(UsageWarning::Bounds));
        assert!(features.should_warn(UsageWarning::FoldingException));
    }

    #[test]
    fn test_unknown_warning() {
        assert_eq!(
            LanguageFeatures::with_disabled("bounds,nope"),
            Err(FeatureError::UnknownWarning("nope".into()))
        );
    }

    #[test]
    fn test_enable_warning() {
        let mut features = LanguageFeatures::default();
        features.enable_warning(UsageWarning::Bounds, false);
        assert!(!features.should_warn(UsageWarning::Bounds));
        features.enable_warning(UsageWarning::Bounds, true);
        assert!(features.should_warn(UsageWarning::Bounds));
    }

    #[test]
    fn test_deserialize() {
        let features: LanguageFeatures =
            serde_json::from_str(r#"{"disabled_warnings": ["folding-exception"]}"#).unwrap();
        assert!(features.should_warn(UsageWarning::Bounds));
        assert!(!features.should_warn(UsageWarning::FoldingException));

        let features: LanguageFeatures = serde_json::from_str("{}").unwrap();
        assert_eq!(features, LanguageFeatures::default());
    }
}
