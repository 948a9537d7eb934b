use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use store::ClientConfig;

const ENV_PREFIX: &str = "LINKVAULT";

#[derive(Debug, Deserialize, PartialEq)]
pub struct Api {
    pub base_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: ClientConfig::default().api.base_url,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Session {
    pub token_key: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token_key: ClientConfig::default().session.token_key,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Log {
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Desktop settings: built-in defaults, then `linkvault.toml` from the user
/// config directory and the working directory, then `LINKVAULT_*` variables
/// (`LINKVAULT_API__BASE_URL`, `LINKVAULT_LOG__LEVEL`, ...).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Settings {
    pub api: Api,
    pub session: Session,
    pub log: Log,
}

impl Settings {
    pub(crate) fn new() -> Result<Self, ConfigError> {
        Self::load(Self::config_files(), Self::environment())
    }

    fn config_files() -> Vec<PathBuf> {
        let mut files = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            files.push(dir.join("linkvault").join(ClientConfig::filename()));
        }
        files.push(PathBuf::from(ClientConfig::filename()));
        files
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    /// Later files override earlier ones; the environment overrides every file.
    fn load(files: Vec<PathBuf>, env: Environment) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("session.token_key", defaults.session.token_key)?
            .set_default("log.level", defaults.log.level)?;

        for path in files {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder.add_source(env).build()?.try_deserialize()
    }

    /// Unknown level names fall back to `INFO`.
    pub fn log_level(&self) -> tracing::Level {
        self.log.level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone()).with_token_key(self.session.token_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::environment().source(Some(map))
    }

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("linkvault-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load(Vec::new(), env_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api.base_url, "http://localhost:8080");
        assert_eq!(settings.session.token_key, "token");
        assert_eq!(settings.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let missing = std::env::temp_dir().join("linkvault-does-not-exist.toml");
        let settings = Settings::load(vec![missing], env_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = write_config(
            "file_overrides.toml",
            "[api]\nbase_url = \"https://vault.example.com\"\n\n[log]\nlevel = \"debug\"\n",
        );
        let settings = Settings::load(vec![path], env_from(&[])).unwrap();
        assert_eq!(settings.api.base_url, "https://vault.example.com");
        assert_eq!(settings.session.token_key, "token");
        assert_eq!(settings.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = write_config(
            "env_overrides.toml",
            "[api]\nbase_url = \"https://vault.example.com\"\n",
        );
        let env = env_from(&[
            ("LINKVAULT_API__BASE_URL", "http://127.0.0.1:3000"),
            ("LINKVAULT_SESSION__TOKEN_KEY", "desktop-token"),
        ]);
        let settings = Settings::load(vec![path], env).unwrap();
        assert_eq!(settings.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(settings.session.token_key, "desktop-token");
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let env = env_from(&[("LINKVAULT_LOG__LEVEL", "chatty")]);
        let settings = Settings::load(Vec::new(), env).unwrap();
        assert_eq!(settings.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_client_config() {
        let settings = Settings {
            api: Api {
                base_url: "https://vault.example.com".into(),
            },
            session: Session {
                token_key: "desktop-token".into(),
            },
            log: Log::default(),
        };
        let config = settings.client_config();
        assert_eq!(config.api.base_url, "https://vault.example.com");
        assert_eq!(config.session.token_key, "desktop-token");
    }
}
