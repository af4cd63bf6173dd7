//! In-memory `FarmApi` for page view tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kisaan_api::{ApiError, FarmApi};
use kisaan_config::GeneralConfig;
use kisaan_core::entities::{
    ChatAnswer, Course, MarketPrice, NewUser, PestAlert, PriceForecast, User, UserCreated,
    WeatherAlert, WikiArticle,
};
use kisaan_core::enums::{Language, Severity};
use kisaan_views::SessionContext;
use tokio::sync::Notify;

/// Records every call as a key like `courses:ur`, can hold a call until
/// released, and can fail whole endpoints.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    pub prices: Mutex<Vec<MarketPrice>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn context(self: &Arc<Self>, language: Language) -> SessionContext {
        let api: Arc<dyn FarmApi> = self.clone();
        SessionContext::new(api, GeneralConfig::default()).with_language(language)
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    /// Hold calls with this key until [`Self::release`].
    pub fn hold(&self, key: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Notify::new()));
    }

    pub fn release(&self, key: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(key) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_prices(&self, prices: Vec<MarketPrice>) {
        *self.prices.lock().unwrap() = prices;
    }

    async fn enter(&self, endpoint: &'static str, key: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(key.clone());
        let gate = self.gates.lock().unwrap().get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.failing.lock().unwrap().contains(endpoint) {
            return Err(ApiError::Api {
                status: 500,
                message: format!("{endpoint} unavailable"),
            });
        }
        Ok(())
    }
}

// ── Fixtures ───────────────────────────────────────────────────────

pub fn course(id: i64, category: &str, language: Language) -> Course {
    Course {
        id,
        title: format!("{language} course {id}"),
        description: String::new(),
        category: category.to_string(),
        content: format!("content {id}"),
        video_url: None,
        created_at: None,
    }
}

pub fn article(id: i64, title: &str, category: &str, language: Language) -> WikiArticle {
    WikiArticle {
        id,
        title: format!("{title} ({language})"),
        content: format!("Guide to {title}. ").repeat(20),
        category: category.to_string(),
        tags: Some("soil, compost".to_string()),
        wiki_url: None,
        created_at: None,
    }
}

pub fn price(id: i64, crop: &str, region: &str, per_kg: f64) -> MarketPrice {
    MarketPrice {
        id,
        crop_name: crop.to_string(),
        region: region.to_string(),
        price_per_kg: per_kg,
        mandi_name: None,
        recorded_at: format!("2026-10-{:02}T08:00:00", (id % 28) + 1),
    }
}

fn weather(language: Language) -> Vec<WeatherAlert> {
    (1..=6)
        .map(|id| WeatherAlert {
            id,
            region: "Punjab".to_string(),
            message: format!("{language} weather {id}"),
            severity: Severity::High,
            alert_type: None,
            created_at: None,
        })
        .collect()
}

fn pests(language: Language) -> Vec<PestAlert> {
    (1..=6)
        .map(|id| PestAlert {
            id,
            pest_name: format!("{language} pest {id}"),
            crop_affected: "cotton".to_string(),
            prevention: "Use neem spray".to_string(),
            severity: Severity::Medium,
            region: None,
            symptoms: None,
            treatment: None,
            created_at: None,
        })
        .collect()
}

#[async_trait]
impl FarmApi for FakeApi {
    async fn get_courses(&self, language: Language) -> Result<Vec<Course>, ApiError> {
        self.enter("courses", format!("courses:{language}")).await?;
        Ok(vec![
            course(1, "sustainable_practices", language),
            course(2, "waste_management", language),
            course(2, "waste_management", language),
            course(3, "sustainable_practices", language),
        ])
    }

    async fn get_course(&self, id: i64, language: Language) -> Result<Course, ApiError> {
        self.enter("course", format!("course:{id}:{language}")).await?;
        let mut course = course(id, "sustainable_practices", language);
        course.content = format!("full content {id}");
        Ok(course)
    }

    async fn get_market_prices(
        &self,
        crop_name: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<MarketPrice>, ApiError> {
        self.enter(
            "prices",
            format!("prices:{}:{}", crop_name.unwrap_or("-"), region.unwrap_or("-")),
        )
        .await?;
        Ok(self.prices.lock().unwrap().clone())
    }

    async fn get_price_forecast(
        &self,
        crop_name: &str,
        region: Option<&str>,
    ) -> Result<PriceForecast, ApiError> {
        self.enter("forecast", format!("forecast:{crop_name}:{}", region.unwrap_or("-")))
            .await?;
        let mut payload = serde_json::Map::new();
        payload.insert("crop_name".into(), crop_name.into());
        payload.insert("forecast".into(), 84.0.into());
        payload.insert("trend".into(), "increasing".into());
        Ok(PriceForecast(payload))
    }

    async fn get_weather_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<WeatherAlert>, ApiError> {
        self.enter("weather", format!("weather:{}:{language}", region.unwrap_or("-")))
            .await?;
        Ok(weather(language))
    }

    async fn get_pest_alerts(
        &self,
        region: Option<&str>,
        language: Language,
    ) -> Result<Vec<PestAlert>, ApiError> {
        self.enter("pests", format!("pests:{}:{language}", region.unwrap_or("-")))
            .await?;
        Ok(pests(language))
    }

    async fn get_wiki_articles(
        &self,
        category: Option<&str>,
        language: Language,
    ) -> Result<Vec<WikiArticle>, ApiError> {
        self.enter("wiki", format!("wiki:{}:{language}", category.unwrap_or("-")))
            .await?;
        let all = vec![
            article(1, "Composting", "waste_management", language),
            article(2, "Drip irrigation", "resource_management", language),
            article(1, "Composting", "waste_management", language),
            article(3, "Biochar", "waste_management", language),
        ];
        Ok(all
            .into_iter()
            .filter(|a| category.is_none_or(|c| a.category == c))
            .collect())
    }

    async fn get_wiki_article(
        &self,
        id: i64,
        language: Language,
    ) -> Result<WikiArticle, ApiError> {
        self.enter("article", format!("article:{id}:{language}")).await?;
        Ok(article(id, "Detail", "waste_management", language))
    }

    async fn send_chat_message(
        &self,
        message: &str,
        user_id: Option<i64>,
        language: Language,
    ) -> Result<ChatAnswer, ApiError> {
        self.enter(
            "chat",
            format!("chat:{}:{language}", user_id.map_or("-".to_string(), |id| id.to_string())),
        )
        .await?;
        Ok(ChatAnswer {
            answer: format!("[{language}] {message}"),
            language: Some(language.to_string()),
        })
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserCreated, ApiError> {
        self.enter("users", format!("create_user:{}", user.name)).await?;
        Ok(UserCreated {
            id: 42,
            message: None,
        })
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.enter("users", format!("user:{id}")).await?;
        let mut record = serde_json::Map::new();
        record.insert("id".into(), id.into());
        Ok(User(record))
    }
}
