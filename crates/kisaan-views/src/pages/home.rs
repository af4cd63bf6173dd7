//! Home page: hero text and the recent alerts board.

use std::sync::Arc;

use kisaan_core::enums::Language;
use kisaan_core::i18n::{self, HomeText};

use crate::alerts::{AlertBoard, fetch_alert_board};
use crate::loader::Loader;
use crate::shell::SessionContext;
use crate::state::DataState;

#[derive(Debug)]
pub struct HomeView {
    ctx: SessionContext,
    alerts: Loader<AlertBoard>,
}

impl HomeView {
    /// Mount the page and start the alert fetch.
    #[must_use]
    pub fn mount(ctx: SessionContext) -> Self {
        let mut view = Self {
            ctx,
            alerts: Loader::new("home.alerts"),
        };
        view.refresh();
        view
    }

    fn refresh(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        let language = self.ctx.language;
        let limit = self.ctx.settings.home_alert_limit;
        self.alerts
            .start(async move { fetch_alert_board(api.as_ref(), language, limit).await });
    }

    /// Refetch the alerts when the language actually changes.
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
    pub const fn text(&self) -> &'static HomeText {
        i18n::home(self.ctx.language)
    }

    #[must_use]
    pub const fn alerts(&self) -> &DataState<AlertBoard> {
        self.alerts.state()
    }

    pub fn poll(&mut self) -> &DataState<AlertBoard> {
        self.alerts.poll()
    }

    pub async fn settle(&mut self) -> &DataState<AlertBoard> {
        self.alerts.settle().await
    }
}
