use connectors::config::{CacheBackend, Config as ConnectorsConfig};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Port cannot be 0")]
    InvalidPort,

    #[error("Listener and admin listener cannot share the address {0}")]
    ConflictingListeners(String),

    #[error("GitHub client_id and client_secret must be configured together")]
    IncompleteGitHubCredentials,

    #[error("Cache {0} cannot be 0")]
    ZeroCacheDuration(&'static str),

    #[error("Memory cache max_capacity cannot be 0")]
    ZeroCacheCapacity,
}

/// Badge server configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Listener serving badges
    #[serde(default = "default_listener")]
    pub listener: Listener,
    /// Listener serving health and readiness probes
    #[serde(default = "default_admin_listener")]
    pub admin_listener: Listener,
    /// Path prefix under which the service is publicly reachable. Only
    /// reported in the badge index so clients can build absolute links.
    #[serde(default)]
    pub context: String,
    /// Upstream connectors and their result cache
    #[serde(flatten)]
    pub connectors: ConnectorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listener: default_listener(),
            admin_listener: default_admin_listener(),
            context: String::new(),
            connectors: ConnectorsConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.listener.validate()?;
        self.admin_listener.validate()?;

        if self.listener == self.admin_listener {
            return Err(ValidationError::ConflictingListeners(format!(
                "{}:{}",
                self.listener.host, self.listener.port
            )));
        }

        let github = &self.connectors.github;
        if github.client_id.is_some() != github.client_secret.is_some() {
            return Err(ValidationError::IncompleteGitHubCredentials);
        }

        let cache = &self.connectors.cache;
        if cache.dynamic_secs == 0 {
            return Err(ValidationError::ZeroCacheDuration("dynamic_secs"));
        }
        if cache.static_secs == 0 {
            return Err(ValidationError::ZeroCacheDuration("static_secs"));
        }
        if cache.backend == (CacheBackend::Memory { max_capacity: 0 }) {
            return Err(ValidationError::ZeroCacheCapacity);
        }

        Ok(())
    }
}

/// Network listener configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Listener {
    /// Host address to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

impl Listener {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(())
    }
}

fn default_listener() -> Listener {
    Listener {
        host: "0.0.0.0".to_string(),
        port: 8080,
    }
}

fn default_admin_listener() -> Listener {
    Listener {
        host: "127.0.0.1".to_string(),
        port: 8081,
    }
}
