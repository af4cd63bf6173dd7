//! The seam between page views and the HTTP client.

use async_trait::async_trait;
use kisaan_core::entities::{
    ChatAnswer, Course, MarketPrice, NewUser, PestAlert, PriceForecast, User, UserCreated,
    WeatherAlert, WikiArticle,
};
use kisaan_core::enums::Language;

use crate::{ApiClient, ApiError};

/// Every operation the Kisaan API offers.
///
/// Views hold an `Arc<dyn FarmApi>` so tests can substitute an in-memory
/// implementation.
#[async_trait]
pub trait FarmApi: Send + Sync {
    async fn get_courses(&self, language: Language) -> Result<Vec<Course>, ApiError>;

    async fn get_course(&self, id: i64, language: Language) -> Result<Course, ApiError>;

    async fn get_market_prices(
        &self,
        crop_name: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<MarketPrice>, ApiError>;

    async fn get_price_forecast(
        &self,
        crop_name: &str,
        region: Option<&str>,
    ) -> Result<PriceForecast, ApiError>;

    async fn get_weather_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<WeatherAlert>, ApiError>;

    async fn get_pest_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<PestAlert>, ApiError>;

    async fn get_wiki_articles(
        &self,
        category: Option<&str>,
        language: Language,
    ) -> Result<Vec<WikiArticle>, ApiError>;

    async fn get_wiki_article(&self, id: i64, language: Language)
    -> Result<WikiArticle, ApiError>;

    async fn send_chat_message(
        &self,
        message: &str,
        user_id: Option<i64>,
        language: Language,
    ) -> Result<ChatAnswer, ApiError>;

    async fn create_user(&self, user: &NewUser) -> Result<UserCreated, ApiError>;

    async fn get_user(&self, id: i64) -> Result<User, ApiError>;
}

#[async_trait]
impl FarmApi for ApiClient {
    async fn get_courses(&self, language: Language) -> Result<Vec<Course>, ApiError> {
        Self::get_courses(self, language).await
    }

    async fn get_course(&self, id: i64, language: Language) -> Result<Course, ApiError> {
        Self::get_course(self, id, language).await
    }

    async fn get_market_prices(
        &self,
        crop_name: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<MarketPrice>, ApiError> {
        Self::get_market_prices(self, crop_name, region).await
    }

    async fn get_price_forecast(
        &self,
        crop_name: &str,
        region: Option<&str>,
    ) -> Result<PriceForecast, ApiError> {
        Self::get_price_forecast(self, crop_name, region).await
    }

    async fn get_weather_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<WeatherAlert>, ApiError> {
        Self::get_weather_alerts(self, region, language).await
    }

    async fn get_pest_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<PestAlert>, ApiError> {
        Self::get_pest_alerts(self, region, language).await
    }

    async fn get_wiki_articles(
        &self,
        category: Option<&str>,
        language: Language,
    ) -> Result<Vec<WikiArticle>, ApiError> {
        Self::get_wiki_articles(self, category, language).await
    }

    async fn get_wiki_article(
        &self,
        id: i64,
        language: Language,
    ) -> Result<WikiArticle, ApiError> {
        Self::get_wiki_article(self, id, language).await
    }

    async fn send_chat_message(
        &self,
        message: &str,
        user_id: Option<i64>,
        language: Language,
    ) -> Result<ChatAnswer, ApiError> {
        Self::send_chat_message(self, message, user_id, language).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserCreated, ApiError> {
        Self::create_user(self, user).await
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        Self::get_user(self, id).await
    }
}
