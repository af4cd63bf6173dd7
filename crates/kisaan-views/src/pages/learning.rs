//! Learning hub: courses for the session language, a category filter and
//! a single-course detail view.

use std::sync::Arc;

use kisaan_api::ApiError;
use kisaan_core::dedup::dedup_by_id;
use kisaan_core::entities::Course;
use kisaan_core::enums::Language;
use kisaan_core::i18n::{self, LearningText};

use crate::error::ViewError;
use crate::loader::Loader;
use crate::shell::SessionContext;
use crate::state::DataState;
use crate::{ALL_CATEGORIES, category_filter, unique_in_order};

#[derive(Debug)]
pub struct LearningView {
    ctx: SessionContext,
    courses: Loader<Vec<Course>>,
    category: Option<String>,
    selected: Option<Course>,
}

impl LearningView {
    #[must_use]
    pub fn mount(ctx: SessionContext) -> Self {
        let mut view = Self {
            ctx,
            courses: Loader::new("learning.courses"),
            category: None,
            selected: None,
        };
        view.refresh();
        view
    }

    fn refresh(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        let language = self.ctx.language;
        self.courses
            .start(async move { api.get_courses(language).await.map(dedup_by_id) });
    }

    pub fn set_language(&mut self, language: Language) {
        if self.ctx.language != language {
            self.ctx.language = language;
            self.refresh();
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.ctx.language
    }

    #[must_use]
    pub const fn text(&self) -> &'static LearningText {
        i18n::learning(self.ctx.language)
    }

    #[must_use]
    pub const fn courses(&self) -> &DataState<Vec<Course>> {
        self.courses.state()
    }

    pub fn poll(&mut self) -> &DataState<Vec<Course>> {
        self.courses.poll()
    }

    pub async fn settle(&mut self) -> &DataState<Vec<Course>> {
        self.courses.settle().await
    }

    /// Filter the list locally. `all` or blank shows every course.
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = category_filter(category);
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    /// Courses passing the category filter, in server order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Course> {
        self.courses
            .state()
            .items()
            .iter()
            .filter(|course| {
                self.category
                    .as_deref()
                    .is_none_or(|category| course.category == category)
            })
            .collect()
    }

    /// Distinct categories of the loaded courses, first seen first.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        unique_in_order(self.courses.state().items().iter().map(|c| c.category.as_str()))
    }

    /// Switch to the detail view of a loaded course.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotLoaded`] if no loaded course has `id`.
    pub fn select(&mut self, id: i64) -> Result<&Course, ViewError> {
        let course = self
            .courses
            .state()
            .items()
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or(ViewError::NotLoaded {
                entity: "course",
                id,
            })?;
        Ok(self.selected.insert(course))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Course> {
        self.selected.as_ref()
    }

    /// Reload the selected course from its detail endpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the detail call; the previous selection
    /// is kept in that case.
    pub async fn refresh_selected(&mut self) -> Result<Option<&Course>, ApiError> {
        let Some(id) = self.selected.as_ref().map(|course| course.id) else {
            return Ok(None);
        };
        let course = self.ctx.api.get_course(id, self.ctx.language).await?;
        Ok(Some(self.selected.insert(course)))
    }
}
