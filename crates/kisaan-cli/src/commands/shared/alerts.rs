use kisaan_core::entities::{PestAlert, WeatherAlert};
use kisaan_core::enums::Severity;
use kisaan_views::alerts::AlertBoard;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::output::Section;

/// Characters of prevention advice shown per pest row.
const PREVENTION_EXCERPT: usize = 100;

#[derive(Debug, Serialize)]
pub struct WeatherRow<'a> {
    pub region: &'a str,
    pub severity: Severity,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PestRow<'a> {
    pub pest: &'a str,
    pub crop: &'a str,
    pub severity: Severity,
    pub prevention: String,
}

#[must_use]
pub fn weather_rows(alerts: &[WeatherAlert]) -> Vec<WeatherRow<'_>> {
    alerts
        .iter()
        .map(|alert| WeatherRow {
            region: &alert.region,
            severity: alert.severity,
            message: &alert.message,
        })
        .collect()
}

#[must_use]
pub fn pest_rows(alerts: &[PestAlert]) -> Vec<PestRow<'_>> {
    alerts
        .iter()
        .map(|alert| PestRow {
            pest: &alert.pest_name,
            crop: &alert.crop_affected,
            severity: alert.severity,
            prevention: alert.prevention_excerpt(PREVENTION_EXCERPT),
        })
        .collect()
}

/// Localized headings of the two halves of an alert board.
pub struct BoardText<'a> {
    pub weather: &'a str,
    pub pests: &'a str,
    pub empty: &'a str,
}

/// Weather and pest sections. A failed or empty board renders as two
/// empty sections.
pub fn board_sections<'a>(
    board: Option<&AlertBoard>,
    text: &BoardText<'a>,
    format: OutputFormat,
) -> anyhow::Result<[Section<'a>; 2]> {
    let (weather, pests) = match board {
        Some(board) => (board.weather.as_slice(), board.pests.as_slice()),
        None => (&[][..], &[][..]),
    };

    let (weather, pests) = if format == OutputFormat::Table {
        (
            serde_json::to_value(weather_rows(weather))?,
            serde_json::to_value(pest_rows(pests))?,
        )
    } else {
        (serde_json::to_value(weather)?, serde_json::to_value(pests)?)
    };

    Ok([
        section("weather", text.weather, weather, text.empty),
        section("pests", text.pests, pests, text.empty),
    ])
}

const fn section<'a>(key: &'static str, title: &'a str, value: Value, empty: &'a str) -> Section<'a> {
    Section {
        key,
        title,
        value,
        empty_text: empty,
    }
}
