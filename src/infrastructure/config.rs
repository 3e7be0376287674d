use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Application configuration
///
/// Resolution order: embedded defaults, then an optional config file in the
/// user config directory, then `TAGGEN_*` environment variables. A missing
/// API key is not an error here: the app starts and renders either way, and
/// the generation path reports the missing credential on submit.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default)]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub donation_url: String,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let config_dir = utils::get_config_dir();

        let mut builder = config::Config::builder()
            .set_default("api_key", default_config.api_key)?
            .set_default("model", default_config.model)?
            .set_default("api_base_url", default_config.api_base_url)?
            .set_default("request_timeout_secs", default_config.request_timeout_secs)?
            .set_default("donation_url", default_config.donation_url)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
        }

        builder = builder.add_source(config::Environment::with_prefix("TAGGEN"));

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Many users already export GEMINI_API_KEY for other tooling
        if cfg.api_key.is_empty() {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                cfg.api_key = key;
            }
        }

        Ok(cfg)
    }

    /// True when the generation credential is absent
    pub fn api_key_missing(&self) -> bool {
        self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let cfg: Config = json5::from_str(CONFIG).expect("embedded default config must parse");

        assert!(cfg.api_key.is_empty());
        assert_eq!(cfg.model, "gemini-1.5-flash");
        assert!(cfg.api_base_url.starts_with("https://"));
        assert!(cfg.request_timeout_secs > 0);
        assert!(!cfg.donation_url.is_empty());
    }

    #[test]
    fn test_api_key_missing() {
        let mut cfg = Config::default();
        assert!(cfg.api_key_missing());

        cfg.api_key = "   ".to_string();
        assert!(cfg.api_key_missing());

        cfg.api_key = "key".to_string();
        assert!(!cfg.api_key_missing());
    }

    #[test]
    fn test_config_loads_without_user_file() {
        // No config file is required; defaults must be enough to start
        let cfg = Config::new().expect("config should load from embedded defaults");

        assert!(!cfg.model.is_empty());
        assert!(!cfg.api_base_url.is_empty());
    }
}
