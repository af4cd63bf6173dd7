//! Sustainable-practices wiki endpoints.

use kisaan_core::entities::WikiArticle;
use kisaan_core::enums::Language;

use crate::{ApiClient, QueryParams, error::ApiError, http};

pub(crate) fn list_path(category: Option<&str>, language: Language) -> String {
    QueryParams::new()
        .with_opt("category", category)
        .with("language", language.as_str())
        .to_path("/api/wiki")
}

pub(crate) fn detail_path(id: i64, language: Language) -> String {
    QueryParams::new()
        .with("language", language.as_str())
        .to_path(&format!("/api/wiki/{id}"))
}

impl ApiClient {
    /// `GET /api/wiki?category=&language=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the body is not an article list.
    pub async fn get_wiki_articles(
        &self,
        category: Option<&str>,
        language: Language,
    ) -> Result<Vec<WikiArticle>, ApiError> {
        http::decode_list(self.get(&list_path(category, language)).await?).await
    }

    /// `GET /api/wiki/{id}?language=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a missing article is `ApiError::Api { status: 404, .. }`.
    pub async fn get_wiki_article(
        &self,
        id: i64,
        language: Language,
    ) -> Result<WikiArticle, ApiError> {
        http::decode(self.get(&detail_path(id, language)).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiki_paths() {
        assert_eq!(
            list_path(Some("waste_management"), Language::En),
            "/api/wiki?category=waste_management&language=en"
        );
        assert_eq!(list_path(None, Language::Ur), "/api/wiki?language=ur");
        assert_eq!(detail_path(3, Language::Ur), "/api/wiki/3?language=ur");
    }
}
