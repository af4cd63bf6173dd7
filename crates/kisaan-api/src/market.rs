//! Market price endpoints.

use kisaan_core::entities::{MarketPrice, PriceForecast};

use crate::{ApiClient, QueryParams, error::ApiError, http};

pub(crate) fn prices_path(crop_name: Option<&str>, region: Option<&str>) -> String {
    QueryParams::new()
        .with_opt("crop_name", crop_name)
        .with_opt("region", region)
        .to_path("/api/market-prices")
}

pub(crate) fn forecast_path(crop_name: &str, region: Option<&str>) -> String {
    QueryParams::new().with_opt("region", region).to_path(&format!(
        "/api/market-prices/forecast/{}",
        urlencoding::encode(crop_name.trim())
    ))
}

impl ApiClient {
    /// `GET /api/market-prices?crop_name=&region=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the body is not a price list.
    pub async fn get_market_prices(
        &self,
        crop_name: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<MarketPrice>, ApiError> {
        http::decode_list(self.get(&prices_path(crop_name, region)).await?).await
    }

    /// `GET /api/market-prices/forecast/{crop_name}?region=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a JSON object.
    pub async fn get_price_forecast(
        &self,
        crop_name: &str,
        region: Option<&str>,
    ) -> Result<PriceForecast, ApiError> {
        http::decode(self.get(&forecast_path(crop_name, region)).await?).await
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, None, "/api/market-prices")]
    #[case(Some("wheat"), None, "/api/market-prices?crop_name=wheat")]
    #[case(None, Some("Punjab"), "/api/market-prices?region=Punjab")]
    #[case(Some("wheat"), Some("Punjab"), "/api/market-prices?crop_name=wheat&region=Punjab")]
    #[case(Some(""), Some(""), "/api/market-prices")]
    fn prices_path_omits_absent_filters(
        #[case] crop: Option<&str>,
        #[case] region: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(prices_path(crop, region), expected);
    }

    #[test]
    fn forecast_path_encodes_crop_segment() {
        assert_eq!(
            forecast_path("Basmati Rice", None),
            "/api/market-prices/forecast/Basmati%20Rice"
        );
        assert_eq!(
            forecast_path("wheat", Some("Sindh")),
            "/api/market-prices/forecast/wheat?region=Sindh"
        );
    }
}
