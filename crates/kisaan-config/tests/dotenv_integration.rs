//! `.env` values flow through the figment env provider.
//!
//! The file is parsed with `dotenvy` and its pairs are applied through the
//! jail so the process environment is restored afterwards.

use std::io::Write;

use figment::Jail;
use kisaan_config::{ConfigError, KisaanConfig};
use kisaan_core::enums::Language;

fn write_env_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write .env");
    file
}

#[test]
fn dotenv_pairs_override_defaults() {
    let env_file = write_env_file(
        "KISAAN_API__BASE_URL=http://192.168.1.20:8000\n\
         # comment lines are skipped\n\
         KISAAN_GENERAL__LANGUAGE=en\n\
         KISAAN_GENERAL__TABLE_ROWS=\"25\"\n",
    );

    Jail::expect_with(|jail| {
        for item in dotenvy::from_path_iter(env_file.path()).expect("readable .env") {
            let (key, value) = item.expect("valid .env line");
            jail.set_env(key, value);
        }

        let config = KisaanConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://192.168.1.20:8000");
        assert_eq!(config.general.language, Language::En);
        assert_eq!(config.general.table_rows, 25);
        Ok(())
    });
}

#[test]
fn invalid_dotenv_language_is_rejected() {
    let env_file = write_env_file("KISAAN_GENERAL__LANGUAGE=fr\n");

    Jail::expect_with(|jail| {
        for item in dotenvy::from_path_iter(env_file.path()).expect("readable .env") {
            let (key, value) = item.expect("valid .env line");
            jail.set_env(key, value);
        }

        let err = KisaanConfig::load().expect_err("fr is not a session language");
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, ref reason }
                if field == "general.language" && reason.contains("fr")),
            "unexpected error: {err}"
        );
        Ok(())
    });
}
