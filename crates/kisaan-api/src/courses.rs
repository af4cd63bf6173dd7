//! Learning-hub course endpoints.

use kisaan_core::entities::Course;
use kisaan_core::enums::Language;

use crate::{ApiClient, QueryParams, error::ApiError, http};

pub(crate) fn list_path(language: Language) -> String {
    QueryParams::new()
        .with("language", language.as_str())
        .to_path("/api/courses")
}

pub(crate) fn detail_path(id: i64, language: Language) -> String {
    QueryParams::new()
        .with("language", language.as_str())
        .to_path(&format!("/api/courses/{id}"))
}

impl ApiClient {
    /// `GET /api/courses?language=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the body is not a course list.
    pub async fn get_courses(&self, language: Language) -> Result<Vec<Course>, ApiError> {
        http::decode_list(self.get(&list_path(language)).await?).await
    }

    /// `GET /api/courses/{id}?language=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a missing course is `ApiError::Api { status: 404, .. }`.
    pub async fn get_course(&self, id: i64, language: Language) -> Result<Course, ApiError> {
        http::decode(self.get(&detail_path(id, language)).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_paths_carry_language() {
        assert_eq!(list_path(Language::Ur), "/api/courses?language=ur");
        assert_eq!(detail_path(12, Language::En), "/api/courses/12?language=en");
    }
}
