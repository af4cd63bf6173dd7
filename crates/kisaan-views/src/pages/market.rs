//! Market intelligence: every recorded price, filtered locally.
//!
//! Prices are fetched once on mount with no filters. Search and region
//! filters, the chart series and the table all work on that one list.
//! Forecasts are fetched on demand.

use std::sync::Arc;

use kisaan_core::entities::{MarketPrice, PriceForecast};
use kisaan_core::enums::Language;
use kisaan_core::i18n::{self, MarketText};
use serde::Serialize;

use crate::loader::Loader;
use crate::shell::SessionContext;
use crate::state::{DataState, Payload};
use crate::{ALL_CATEGORIES, unique_in_order};

impl Payload for PriceForecast {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One bar of the price chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub crop: String,
    pub price: f64,
    pub region: String,
}

#[derive(Debug)]
pub struct MarketView {
    ctx: SessionContext,
    prices: Loader<Vec<MarketPrice>>,
    search: String,
    region: Option<String>,
    forecast: Option<Loader<PriceForecast>>,
}

impl MarketView {
    #[must_use]
    pub fn mount(ctx: SessionContext) -> Self {
        let mut prices = Loader::new("market.prices");
        let api = Arc::clone(&ctx.api);
        prices.start(async move { api.get_market_prices(None, None).await });
        Self {
            ctx,
            prices,
            search: String::new(),
            region: None,
            forecast: None,
        }
    }

    /// Prices do not depend on language: only the labels change.
    pub const fn set_language(&mut self, language: Language) {
        self.ctx.language = language;
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.ctx.language
    }

    #[must_use]
    pub const fn text(&self) -> &'static MarketText {
        i18n::market(self.ctx.language)
    }

    #[must_use]
    pub const fn prices(&self) -> &DataState<Vec<MarketPrice>> {
        self.prices.state()
    }

    pub fn poll(&mut self) -> &DataState<Vec<MarketPrice>> {
        if let Some(forecast) = self.forecast.as_mut() {
            forecast.poll();
        }
        self.prices.poll()
    }

    pub async fn settle(&mut self) -> &DataState<Vec<MarketPrice>> {
        self.prices.settle().await
    }

    // ── Filters ────────────────────────────────────────────────────

    /// Case-insensitive substring match on the crop name.
    pub fn set_search(&mut self, term: &str) {
        term.trim().clone_into(&mut self.search);
    }

    /// Case-insensitive exact region match. `all` or blank clears it.
    pub fn set_region(&mut self, region: Option<&str>) {
        self.region = region
            .map(str::trim)
            .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case(ALL_CATEGORIES))
            .map(str::to_string);
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Prices passing both filters, in server order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&MarketPrice> {
        let term = self.search.to_lowercase();
        let region = self.region.as_deref().map(str::to_lowercase);
        self.prices
            .state()
            .items()
            .iter()
            .filter(|price| term.is_empty() || price.crop_name.to_lowercase().contains(&term))
            .filter(|price| {
                region
                    .as_deref()
                    .is_none_or(|region| price.region.to_lowercase() == region)
            })
            .collect()
    }

    /// Distinct regions of all loaded prices, first seen first.
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        unique_in_order(self.prices.state().items().iter().map(|p| p.region.as_str()))
    }

    /// Distinct crops of all loaded prices, first seen first.
    #[must_use]
    pub fn crops(&self) -> Vec<&str> {
        unique_in_order(self.prices.state().items().iter().map(|p| p.crop_name.as_str()))
    }

    /// Chart series: the first `chart_points` filtered prices.
    #[must_use]
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.filtered()
            .into_iter()
            .take(self.ctx.settings.chart_points)
            .map(|price| ChartPoint {
                crop: price.crop_name.clone(),
                price: price.price_per_kg,
                region: price.region.clone(),
            })
            .collect()
    }

    /// Table rows: the first `table_rows` filtered prices.
    #[must_use]
    pub fn table_rows(&self) -> Vec<&MarketPrice> {
        let mut rows = self.filtered();
        rows.truncate(self.ctx.settings.table_rows);
        rows
    }

    // ── Forecast ───────────────────────────────────────────────────

    /// Start a forecast lookup, replacing any previous one.
    pub fn request_forecast(&mut self, crop_name: &str, region: Option<&str>) {
        let api = Arc::clone(&self.ctx.api);
        let crop_name = crop_name.to_string();
        let region = region.map(str::to_string);
        self.forecast
            .get_or_insert_with(|| Loader::new("market.forecast"))
            .start(async move {
                api.get_price_forecast(&crop_name, region.as_deref())
                    .await
            });
    }

    /// Forecast state, or `None` if none was requested.
    #[must_use]
    pub fn forecast(&self) -> Option<&DataState<PriceForecast>> {
        self.forecast.as_ref().map(Loader::state)
    }

    pub async fn settle_forecast(&mut self) -> Option<&DataState<PriceForecast>> {
        match self.forecast.as_mut() {
            Some(loader) => Some(loader.settle().await),
            None => None,
        }
    }
}
