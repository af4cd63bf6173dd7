use anyhow::Context;
use kisaan_config::KisaanConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`), then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KisaanConfig> {
    let config = KisaanConfig::load_with_dotenv().context("failed to load kisaan configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: KisaanConfig, flags: &GlobalFlags) -> anyhow::Result<KisaanConfig> {
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
        config.api.validate().context("invalid --api-url")?;
    }
    if let Some(language) = flags.lang {
        config.general.language = language;
    }
    Ok(config)
}
