use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const APP_NAME: &str = "usersearch";
const CONFIG_NAME: &str = "config";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub server_url: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "timeout_default")]
    pub timeout: String,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn timeout_default() -> String {
    "1s".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            access_token: String::new(),
            timeout: timeout_default(),
            output_format: OutputFormat::Table,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.timeout)
            .with_context(|| format!("Invalid timeout '{}' in config", self.timeout))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn load_config() -> Result<Config> {
    confy::load(APP_NAME, CONFIG_NAME).map_err(|e| {
        match confy::get_configuration_file_path(APP_NAME, CONFIG_NAME) {
            Ok(path) => anyhow::anyhow!("Fail load config from {}: {}", path.display(), e),
            Err(path_err) => anyhow::anyhow!(
                "Fail load config and couldn't determine config path: {} (path error: {})",
                e,
                path_err
            ),
        }
    })
}

pub fn save_config(config: &Config) -> Result<()> {
    confy::store(APP_NAME, CONFIG_NAME, config).map_err(
        |e| match confy::get_configuration_file_path(APP_NAME, CONFIG_NAME) {
            Ok(path) => anyhow::anyhow!("Fail save config to {}: {}", path.display(), e),
            Err(path_err) => anyhow::anyhow!(
                "Fail save config and couldn't determine config path: {} (path error: {})",
                e,
                path_err
            ),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_parses() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout().unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_timeout() {
        let cfg = Config {
            timeout: "soon".to_string(),
            ..Default::default()
        };
        assert!(cfg.timeout().is_err());
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let cfg: Config = serde_json::from_str(r#"{"server_url": "http://search"}"#).unwrap();
        assert_eq!(cfg.server_url, "http://search");
        assert!(cfg.access_token.is_empty());
        assert_eq!(cfg.timeout, "1s");
    }
}
