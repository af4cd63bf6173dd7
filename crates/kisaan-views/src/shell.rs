//! Navigation shell: session language, current page, menu toggle.

use std::fmt;
use std::sync::Arc;

use kisaan_api::FarmApi;
use kisaan_config::GeneralConfig;
use kisaan_core::enums::{Language, TextDirection};
use kisaan_core::i18n;
use serde::Serialize;

use crate::error::ViewError;

// ── Pages ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Learning,
    Market,
    AgriBot,
    Wiki,
    Tools,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Learning,
        Self::Market,
        Self::AgriBot,
        Self::Wiki,
        Self::Tools,
    ];

    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Learning => "/learning",
            Self::Market => "/market",
            Self::AgriBot => "/agri-bot",
            Self::Wiki => "/wiki",
            Self::Tools => "/tools",
        }
    }

    /// Resolve a route. A trailing slash is ignored.
    #[must_use]
    pub fn from_route(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        let path = if path.is_empty() { "/" } else { path };
        Self::ALL.into_iter().find(|page| page.route() == path)
    }

    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        let t = i18n::nav(language);
        match self {
            Self::Home => t.home,
            Self::Learning => t.learning,
            Self::Market => t.market,
            Self::AgriBot => t.bot,
            Self::Wiki => t.wiki,
            Self::Tools => t.tools,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub page: Page,
    pub route: &'static str,
    pub label: &'static str,
    pub active: bool,
}

// ── Session context ────────────────────────────────────────────────

/// Everything a page view needs from the session.
#[derive(Clone)]
pub struct SessionContext {
    pub api: Arc<dyn FarmApi>,
    pub language: Language,
    pub settings: GeneralConfig,
}

impl SessionContext {
    #[must_use]
    pub fn new(api: Arc<dyn FarmApi>, settings: GeneralConfig) -> Self {
        Self {
            api,
            language: settings.language,
            settings,
        }
    }

    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("language", &self.language)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ── Shell ──────────────────────────────────────────────────────────

pub struct Shell {
    ctx: SessionContext,
    page: Page,
    menu_open: bool,
}

impl Shell {
    #[must_use]
    pub const fn new(ctx: SessionContext) -> Self {
        Self {
            ctx,
            page: Page::Home,
            menu_open: false,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.ctx.language
    }

    #[must_use]
    pub const fn direction(&self) -> TextDirection {
        self.ctx.language.direction()
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_language(&mut self, language: Language) {
        if self.ctx.language != language {
            tracing::debug!(from = %self.ctx.language, to = %language, "language changed");
            self.ctx.language = language;
        }
    }

    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Switch to the page at `path` and close the menu.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownRoute`] if no page lives at `path`; the
    /// current page and menu are left unchanged.
    pub fn navigate(&mut self, path: &str) -> Result<Page, ViewError> {
        let page = Page::from_route(path).ok_or_else(|| ViewError::UnknownRoute(path.to_string()))?;
        self.page = page;
        self.menu_open = false;
        Ok(page)
    }

    #[must_use]
    pub fn nav_links(&self) -> Vec<NavLink> {
        Page::ALL
            .into_iter()
            .map(|page| NavLink {
                page,
                route: page.route(),
                label: page.label(self.ctx.language),
                active: page == self.page,
            })
            .collect()
    }

    /// Context to mount a page view with.
    #[must_use]
    pub fn context(&self) -> SessionContext {
        self.ctx.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/", Page::Home)]
    #[case("", Page::Home)]
    #[case("/learning", Page::Learning)]
    #[case("/market/", Page::Market)]
    #[case("/agri-bot", Page::AgriBot)]
    #[case("/wiki", Page::Wiki)]
    #[case(" /tools ", Page::Tools)]
    fn routes_resolve(#[case] path: &str, #[case] expected: Page) {
        assert_eq!(Page::from_route(path), Some(expected));
    }

    #[test]
    fn unknown_routes_do_not_resolve() {
        assert_eq!(Page::from_route("/admin"), None);
        assert_eq!(Page::from_route("/Learning"), None);
    }

    #[test]
    fn every_route_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_route(page.route()), Some(page));
        }
    }

    #[test]
    fn labels_follow_language() {
        assert_eq!(Page::AgriBot.label(Language::En), "Agri-Bot");
        assert_eq!(Page::Home.label(Language::Ur), "ہوم");
    }
}
