//! Entity structs decoded from the Kisaan API.
//!
//! Entities are passed through unchanged: the client never mutates them.
//! Unknown extra fields are ignored, and text columns the server may return
//! as `null` decode as empty strings.

mod alerts;
mod chat;
mod course;
mod market;
mod user;
mod wiki;

pub use alerts::{PestAlert, WeatherAlert};
pub use chat::{ChatAnswer, ChatMessage, ChatRequest};
pub use course::Course;
pub use market::{MarketPrice, PriceForecast};
pub use user::{NewUser, User, UserCreated};
pub use wiki::WikiArticle;

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode `null` and blank strings as `None`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}
