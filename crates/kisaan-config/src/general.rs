//! General presentation settings.

use kisaan_core::enums::Language;
use serde::{Deserialize, Serialize};

const fn default_home_alert_limit() -> usize {
    3
}

const fn default_sidebar_alert_limit() -> usize {
    5
}

const fn default_chart_points() -> usize {
    30
}

const fn default_table_rows() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Session language used when no `--lang` flag is given.
    #[serde(default)]
    pub language: Language,

    /// Alerts of each kind shown on the home page.
    #[serde(default = "default_home_alert_limit")]
    pub home_alert_limit: usize,

    /// Alerts of each kind shown beside the chat.
    #[serde(default = "default_sidebar_alert_limit")]
    pub sidebar_alert_limit: usize,

    /// Rows of the market price chart series.
    #[serde(default = "default_chart_points")]
    pub chart_points: usize,

    /// Rows of the market price table.
    #[serde(default = "default_table_rows")]
    pub table_rows: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            home_alert_limit: default_home_alert_limit(),
            sidebar_alert_limit: default_sidebar_alert_limit(),
            chart_points: default_chart_points(),
            table_rows: default_table_rows(),
        }
    }
}
