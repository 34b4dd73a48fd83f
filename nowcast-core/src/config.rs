use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "NOWCAST_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com credential, written by `nowcast configure`.
    ///
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// Resolve the API key: environment variable first, stored key second.
    pub fn api_key(&self) -> Result<String> {
        resolve_api_key(env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    /// Store/replace the API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "nowcast", "nowcast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn resolve_api_key(env_key: Option<String>, stored: Option<&str>) -> Result<String> {
    if let Some(key) = env_key.filter(|k| !k.is_empty()) {
        return Ok(key);
    }

    stored.map(str::to_owned).ok_or_else(|| {
        anyhow!(
            "No API key configured.\n\
             Hint: run `nowcast configure` or set the {API_KEY_ENV} environment variable."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_configured() {
        let err = resolve_api_key(None, None).unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `nowcast configure`"));
    }

    #[test]
    fn stored_api_key_is_returned() {
        let mut cfg = Config::default();
        cfg.set_api_key("STORED_KEY".into());

        let key = resolve_api_key(None, cfg.api_key.as_deref()).expect("key must resolve");
        assert_eq!(key, "STORED_KEY");
    }

    #[test]
    fn env_var_takes_precedence_over_stored_key() {
        let key = resolve_api_key(Some("ENV_KEY".into()), Some("STORED_KEY"))
            .expect("key must resolve");

        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn empty_env_var_falls_back_to_stored_key() {
        let key =
            resolve_api_key(Some(String::new()), Some("STORED_KEY")).expect("key must resolve");

        assert_eq!(key, "STORED_KEY");
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("SECRET".into());

        let serialized = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&serialized).expect("config must parse");

        assert_eq!(parsed.api_key.as_deref(), Some("SECRET"));
    }

    #[test]
    fn missing_api_key_parses_as_none() {
        let parsed: Config = toml::from_str("").expect("empty config must parse");
        assert!(parsed.api_key.is_none());
    }
}
