use serde::Deserialize;
use url::Url;

const DEFAULT_GITHUB_URL: &str = "https://api.github.com";
const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";
const DEFAULT_DISCORD_URL: &str = "https://discord.com/api/v10";

/// Connector and cache configuration. Every section is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub gitlab: GitLabConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    /// Caches nothing. Only meant for development, every badge request hits
    /// the upstream API.
    Noop,
    /// In-process TTL store.
    Memory { max_capacity: u64 },
}

impl Default for CacheBackend {
    fn default() -> Self {
        CacheBackend::Memory {
            max_capacity: default_max_capacity(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(from = "RawCacheConfig")]
pub struct CacheConfig {
    pub backend: CacheBackend,
    /// TTL of upstream results and max-age of provider badges.
    pub dynamic_secs: u64,
    /// max-age of user specified custom badges.
    pub static_secs: u64,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BackendType {
    Noop,
    #[default]
    Memory,
}

/// Flat on-disk form of [`CacheConfig`]. `type` may be left out, in which
/// case the memory backend is used.
#[derive(Deserialize)]
struct RawCacheConfig {
    #[serde(default, rename = "type")]
    backend: BackendType,
    #[serde(default = "default_max_capacity")]
    max_capacity: u64,
    #[serde(default = "default_dynamic_secs")]
    dynamic_secs: u64,
    #[serde(default = "default_static_secs")]
    static_secs: u64,
}

impl From<RawCacheConfig> for CacheConfig {
    fn from(raw: RawCacheConfig) -> Self {
        let backend = match raw.backend {
            BackendType::Noop => CacheBackend::Noop,
            BackendType::Memory => CacheBackend::Memory {
                max_capacity: raw.max_capacity,
            },
        };

        CacheConfig {
            backend,
            dynamic_secs: raw.dynamic_secs,
            static_secs: raw.static_secs,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            backend: CacheBackend::default(),
            dynamic_secs: default_dynamic_secs(),
            static_secs: default_static_secs(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GitHubConfig {
    #[serde(default = "default_github_url")]
    pub base_url: Url,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            base_url: default_github_url(),
            client_id: None,
            client_secret: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    OauthToken,
    #[default]
    PrivateToken,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GitLabConfig {
    #[serde(default = "default_gitlab_url")]
    pub base_url: Url,
    pub token: Option<String>,
    #[serde(default)]
    pub token_type: TokenType,
}

impl Default for GitLabConfig {
    fn default() -> Self {
        GitLabConfig {
            base_url: default_gitlab_url(),
            token: None,
            token_type: TokenType::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DiscordConfig {
    #[serde(default = "default_discord_url")]
    pub base_url: Url,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        DiscordConfig {
            base_url: default_discord_url(),
        }
    }
}

fn default_max_capacity() -> u64 {
    10_000
}

fn default_dynamic_secs() -> u64 {
    60 * 60
}

fn default_static_secs() -> u64 {
    3 * 24 * 60 * 60
}

fn default_github_url() -> Url {
    Url::parse(DEFAULT_GITHUB_URL).expect("default GitHub URL is valid")
}

fn default_gitlab_url() -> Url {
    Url::parse(DEFAULT_GITLAB_URL).expect("default GitLab URL is valid")
}

fn default_discord_url() -> Url {
    Url::parse(DEFAULT_DISCORD_URL).expect("default Discord URL is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cache.dynamic_secs, 3600);
        assert_eq!(config.cache.static_secs, 259200);
        assert_eq!(
            config.cache.backend,
            CacheBackend::Memory {
                max_capacity: 10_000
            }
        );
        assert_eq!(config.github.base_url.as_str(), "https://api.github.com/");
        assert_eq!(config.gitlab.token_type, TokenType::PrivateToken);
        assert_eq!(
            config.discord.base_url.as_str(),
            "https://discord.com/api/v10"
        );
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
cache:
    type: noop
    dynamic_secs: 60
    static_secs: 120
github:
    client_id: abc
    client_secret: def
gitlab:
    base_url: https://gitlab.example.com
    token: t0ken
    token_type: oauth_token
discord:
    base_url: http://127.0.0.1:9000/api
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.cache.backend, CacheBackend::Noop);
        assert_eq!(config.cache.dynamic_secs, 60);
        assert_eq!(config.cache.static_secs, 120);
        assert_eq!(config.github.client_id.as_deref(), Some("abc"));
        assert_eq!(config.github.client_secret.as_deref(), Some("def"));
        assert_eq!(config.gitlab.token_type, TokenType::OauthToken);
        assert_eq!(config.gitlab.base_url.host_str(), Some("gitlab.example.com"));
        assert_eq!(config.discord.base_url.port(), Some(9000));
    }

    #[test]
    fn test_memory_backend_capacity() {
        let config: CacheConfig = serde_yaml::from_str("type: memory\nmax_capacity: 5").unwrap();
        assert_eq!(config.backend, CacheBackend::Memory { max_capacity: 5 });
        assert_eq!(config.dynamic_secs, 3600);
    }

    #[test]
    fn test_cache_type_defaults_to_memory() {
        let config: Config = serde_yaml::from_str("cache: {dynamic_secs: 60}").unwrap();
        assert_eq!(config.cache.dynamic_secs, 60);
        assert_eq!(config.cache.static_secs, 259200);
        assert_eq!(
            config.cache.backend,
            CacheBackend::Memory {
                max_capacity: 10_000
            }
        );

        let config: Config = serde_yaml::from_str("cache: {max_capacity: 25}").unwrap();
        assert_eq!(config.cache.backend, CacheBackend::Memory { max_capacity: 25 });
    }

    #[test]
    fn test_deserialization_errors() {
        // Invalid URL
        assert!(serde_yaml::from_str::<Config>("github: {base_url: not-a-url}").is_err());

        // Unknown cache backend
        assert!(serde_yaml::from_str::<Config>("cache: {type: redis}").is_err());

        // Unknown token type
        assert!(serde_yaml::from_str::<Config>("gitlab: {token_type: basic}").is_err());
    }
}
