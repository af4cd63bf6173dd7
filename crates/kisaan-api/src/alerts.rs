//! Weather and pest alert endpoints. Language is always sent.

use kisaan_core::entities::{PestAlert, WeatherAlert};
use kisaan_core::enums::Language;

use crate::{ApiClient, QueryParams, error::ApiError, http};

fn alerts_path(resource: &str, region: Option<&str>, language: Language) -> String {
    QueryParams::new()
        .with_opt("region", region)
        .with("language", language.as_str())
        .to_path(resource)
}

pub(crate) fn weather_path(region: Option<&str>, language: Language) -> String {
    alerts_path("/api/weather-alerts", region, language)
}

pub(crate) fn pest_path(region: Option<&str>, language: Language) -> String {
    alerts_path("/api/pest-alerts", region, language)
}

impl ApiClient {
    /// `GET /api/weather-alerts?region=&language=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the body is not an alert list.
    pub async fn get_weather_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<WeatherAlert>, ApiError> {
        http::decode_list(self.get(&weather_path(region, language)).await?).await
    }

    /// `GET /api/pest-alerts?region=&language=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the body is not an alert list.
    pub async fn get_pest_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<PestAlert>, ApiError> {
        http::decode_list(self.get(&pest_path(region, language)).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_is_always_present_and_last() {
        assert_eq!(weather_path(None, Language::Ur), "/api/weather-alerts?language=ur");
        assert_eq!(
            pest_path(Some("Punjab"), Language::En),
            "/api/pest-alerts?region=Punjab&language=en"
        );
    }
}
