//! # Client configuration: `linkvault.toml`
//!
//! Tells the client where the LinkVault REST API lives and under which key the
//! session token is persisted.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [session]
//! token_key = "token"
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is equivalent to
//! the defaults above. The desktop app layers environment variables on top via
//! its own settings loader; the web app overrides `base_url` with the page
//! origin.

use serde::{Deserialize, Serialize};

use crate::token::DEFAULT_TOKEN_KEY;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the `/auth/*` and `/saved` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key for the persisted bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url` with default session settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Builder method to change the token storage key.
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.session.token_key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "linkvault.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
