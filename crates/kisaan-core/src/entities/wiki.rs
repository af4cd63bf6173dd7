use serde::{Deserialize, Serialize};

use super::{blank_as_none, null_as_default};
use crate::dedup::Identified;

/// Sustainable-practices knowledge base article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiArticle {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Comma-joined tag list.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub tags: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub wiki_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl WikiArticle {
    /// Split the comma-joined tags, trimming whitespace and dropping blanks.
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Card preview: first `max_chars` characters of the content plus `...`.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.content.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }

    /// Case-insensitive match of `term` against title or content.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }
}

impl Identified for WikiArticle {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(tags: Option<&str>) -> WikiArticle {
        WikiArticle {
            id: 1,
            title: "Composting Basics".into(),
            content: "Turn crop residue into compost".into(),
            category: "waste_management".into(),
            tags: tags.map(str::to_string),
            wiki_url: None,
            created_at: None,
        }
    }

    #[test]
    fn tag_list_splits_and_trims() {
        assert_eq!(
            article(Some("compost, soil ,, residue")).tag_list(),
            vec!["compost", "soil", "residue"]
        );
        assert!(article(None).tag_list().is_empty());
    }

    #[test]
    fn preview_truncates_on_characters() {
        assert_eq!(article(None).preview(4), "Turn...");
    }

    #[test]
    fn matches_title_or_content_case_insensitively() {
        let a = article(None);
        assert!(a.matches("COMPOST"));
        assert!(a.matches("residue"));
        assert!(!a.matches("drip"));
    }

    #[test]
    fn empty_wiki_url_decodes_as_none() {
        let a: WikiArticle = serde_json::from_str(
            r#"{"id":3,"title":"t","content":"c","category":"x","tags":null,"wiki_url":""}"#,
        )
        .unwrap();
        assert!(a.wiki_url.is_none());
        assert!(a.tags.is_none());
    }
}
