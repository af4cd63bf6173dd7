use std::sync::Arc;

use anyhow::Context;
use kisaan_api::{ApiClient, FarmApi};
use kisaan_config::KisaanConfig;
use kisaan_views::{SessionContext, Shell};

/// Shared client resources initialized once at startup.
pub struct AppContext {
    pub config: KisaanConfig,
    pub api: Arc<ApiClient>,
    pub shell: Shell,
}

impl AppContext {
    pub fn init(config: KisaanConfig) -> anyhow::Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api).context("failed to build HTTP client")?);
        tracing::debug!(base_url = api.base_url(), language = %config.general.language, "client ready");

        let farm: Arc<dyn FarmApi> = api.clone();
        let shell = Shell::new(SessionContext::new(farm, config.general.clone()));

        Ok(Self { config, api, shell })
    }

    /// Context to mount a page view with.
    #[must_use]
    pub fn session(&self) -> SessionContext {
        self.shell.context()
    }
}
