use std::fmt;

use serde::{Deserialize, Serialize};

/// Body returned by `GET {backend}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_version: Option<String>,
}

impl HealthResponse {
    /// Short suffix of the backend commit, used as a display version.
    pub fn version_fragment(&self) -> Option<String> {
        let version = self.commit_version.as_deref()?;
        let chars: Vec<char> = version.chars().collect();
        let start = chars.len().saturating_sub(3);
        let fragment: String = chars[start..].iter().collect();
        (!fragment.is_empty()).then_some(fragment)
    }
}

/// Outcome of the one-shot backend liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LivenessStatus {
    #[default]
    Checking,
    Alive,
    Error,
}

impl LivenessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Alive => "alive",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LivenessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_fragment_keeps_last_three_chars() {
        let health = HealthResponse {
            alive: true,
            commit_version: Some("9f8e7d6c5b4a".to_string()),
        };
        assert_eq!(health.version_fragment().as_deref(), Some("b4a"));
    }

    #[test]
    fn version_fragment_short_or_missing() {
        let short = HealthResponse {
            alive: true,
            commit_version: Some("v2".to_string()),
        };
        assert_eq!(short.version_fragment().as_deref(), Some("v2"));

        let missing = HealthResponse {
            alive: true,
            commit_version: None,
        };
        assert_eq!(missing.version_fragment(), None);

        let empty = HealthResponse {
            alive: true,
            commit_version: Some(String::new()),
        };
        assert_eq!(empty.version_fragment(), None);
    }

    #[test]
    fn health_response_decodes_camel_case() {
        let health: HealthResponse =
            serde_json::from_str(r#"{"alive":true,"commitVersion":"abc123"}"#).unwrap();
        assert!(health.alive);
        assert_eq!(health.commit_version.as_deref(), Some("abc123"));
    }
}
