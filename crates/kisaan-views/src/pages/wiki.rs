//! Sustainable-practices wiki: articles by category, a local search and an
//! article detail view.

use std::sync::Arc;

use kisaan_api::ApiError;
use kisaan_core::dedup::dedup_by_id;
use kisaan_core::entities::WikiArticle;
use kisaan_core::enums::Language;
use kisaan_core::i18n::{self, WikiText};

use crate::error::ViewError;
use crate::loader::Loader;
use crate::shell::SessionContext;
use crate::state::DataState;
use crate::{ALL_CATEGORIES, category_filter};

/// Characters of content shown on an article card.
pub const PREVIEW_CHARS: usize = 150;

#[derive(Debug)]
pub struct WikiView {
    ctx: SessionContext,
    articles: Loader<Vec<WikiArticle>>,
    category: Option<String>,
    search: String,
    selected: Option<WikiArticle>,
}

impl WikiView {
    #[must_use]
    pub fn mount(ctx: SessionContext) -> Self {
        Self::mount_with_category(ctx, None)
    }

    /// Mount with an initial category filter.
    #[must_use]
    pub fn mount_with_category(ctx: SessionContext, category: Option<&str>) -> Self {
        let mut view = Self {
            ctx,
            articles: Loader::new("wiki.articles"),
            category: category_filter(category),
            search: String::new(),
            selected: None,
        };
        view.refresh();
        view
    }

    fn refresh(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        let language = self.ctx.language;
        let category = self.category.clone();
        self.articles.start(async move {
            api.get_wiki_articles(category.as_deref(), language)
                .await
                .map(dedup_by_id)
        });
    }

    pub fn set_language(&mut self, language: Language) {
        if self.ctx.language != language {
            self.ctx.language = language;
            self.refresh();
        }
    }

    /// Change the category and refetch if it differs. `all` or blank means
    /// no category parameter.
    pub fn set_category(&mut self, category: Option<&str>) {
        let category = category_filter(category);
        if self.category != category {
            self.category = category;
            self.refresh();
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.ctx.language
    }

    #[must_use]
    pub const fn text(&self) -> &'static WikiText {
        i18n::wiki(self.ctx.language)
    }

    #[must_use]
    pub const fn articles(&self) -> &DataState<Vec<WikiArticle>> {
        self.articles.state()
    }

    pub fn poll(&mut self) -> &DataState<Vec<WikiArticle>> {
        self.articles.poll()
    }

    pub async fn settle(&mut self) -> &DataState<Vec<WikiArticle>> {
        self.articles.settle().await
    }

    /// Local search over title and content.
    pub fn set_search(&mut self, term: &str) {
        term.trim().clone_into(&mut self.search);
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Loaded articles matching the search term.
    #[must_use]
    pub fn visible(&self) -> Vec<&WikiArticle> {
        self.articles
            .state()
            .items()
            .iter()
            .filter(|article| self.search.is_empty() || article.matches(&self.search))
            .collect()
    }

    /// Switch to the detail view of a loaded article.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotLoaded`] if no loaded article has `id`.
    pub fn select(&mut self, id: i64) -> Result<&WikiArticle, ViewError> {
        let article = self
            .articles
            .state()
            .items()
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or(ViewError::NotLoaded {
                entity: "wiki article",
                id,
            })?;
        Ok(self.selected.insert(article))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&WikiArticle> {
        self.selected.as_ref()
    }

    /// Reload the selected article from its detail endpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the detail call; the previous selection
    /// is kept in that case.
    pub async fn refresh_selected(&mut self) -> Result<Option<&WikiArticle>, ApiError> {
        let Some(id) = self.selected.as_ref().map(|article| article.id) else {
            return Ok(None);
        };
        let article = self.ctx.api.get_wiki_article(id, self.ctx.language).await?;
        Ok(Some(self.selected.insert(article)))
    }
}
