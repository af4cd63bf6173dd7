use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::enums::Severity;

/// Regional weather alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherAlert {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub alert_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Pest outbreak alert with prevention guidance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PestAlert {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pest_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crop_affected: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prevention: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PestAlert {
    /// Prevention text shortened for alert cards: the first `max_chars`
    /// characters followed by `...`, or empty when there is no guidance.
    #[must_use]
    pub fn prevention_excerpt(&self, max_chars: usize) -> String {
        if self.prevention.is_empty() {
            return String::new();
        }
        let mut excerpt: String = self.prevention.chars().take(max_chars).collect();
        excerpt.push_str("...");
        excerpt
    }
}
