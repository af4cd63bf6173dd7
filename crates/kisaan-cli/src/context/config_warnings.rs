use kisaan_config::{DEFAULT_BASE_URL, KisaanConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &KisaanConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &KisaanConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.normalized_base_url() == DEFAULT_BASE_URL
        && has_single_underscore_key(&env_keys, "KISAAN_API")
    {
        warnings.push(
            "API config appears default while KISAAN_API_* env vars exist. Use double underscores (example: KISAAN_API__BASE_URL)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "KISAAN_GENERAL") {
        warnings.push(
            "KISAAN_GENERAL_* env vars are ignored. Use double underscores (example: KISAAN_GENERAL__LANGUAGE)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use kisaan_config::KisaanConfig;

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &KisaanConfig::default(),
            env(&["KISAAN_API_BASE_URL", "KISAAN_GENERAL_LANGUAGE"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("KISAAN_API__BASE_URL"));
    }

    #[test]
    fn does_not_warn_for_double_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &KisaanConfig::default(),
            env(&["KISAAN_API__BASE_URL", "KISAAN_GENERAL__LANGUAGE", "KISAAN_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_api_is_configured() {
        let mut config = KisaanConfig::default();
        config.api.base_url = "https://api.kisaan.example".to_string();
        let warnings = collect_unconfigured_warnings(&config, env(&["KISAAN_API_BASE_URL"]));
        assert!(warnings.is_empty());
    }
}
