use serde::{Deserialize, Serialize};

use super::{blank_as_none, null_as_default};
use crate::dedup::Identified;

/// A learning-hub course, localized by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Open string domain, e.g. `sustainable_practices`, `waste_management`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identified for Course {
    fn id(&self) -> i64 {
        self.id
    }
}
