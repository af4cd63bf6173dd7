//! Weather and pest alerts shown together (home page, chat sidebar).

use kisaan_api::{ApiError, FarmApi};
use kisaan_core::entities::{PestAlert, WeatherAlert};
use kisaan_core::enums::Language;
use serde::Serialize;

use crate::state::Payload;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertBoard {
    pub weather: Vec<WeatherAlert>,
    pub pests: Vec<PestAlert>,
}

impl Payload for AlertBoard {
    fn is_empty(&self) -> bool {
        self.weather.is_empty() && self.pests.is_empty()
    }
}

/// Fetch both alert lists concurrently and keep the first `limit` of each.
///
/// If either call fails the whole board fails: there is no partial result.
///
/// # Errors
///
/// Returns the first [`ApiError`] of the two calls.
pub async fn fetch_alert_board(
    api: &dyn FarmApi,
    language: Language,
    limit: usize,
) -> Result<AlertBoard, ApiError> {
    let (mut weather, mut pests) = tokio::try_join!(
        api.get_weather_alerts(None, language),
        api.get_pest_alerts(None, language),
    )?;
    weather.truncate(limit);
    pests.truncate(limit);
    Ok(AlertBoard { weather, pests })
}
