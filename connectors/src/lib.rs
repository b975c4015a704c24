//! Upstream provider connectors.
//!
//! Each connector wraps a [`rest::RestClient`] pointed at its provider and
//! keeps one TTL cache per entity type, so repeated lookups for the same key
//! within the TTL window never reach the upstream API.

pub mod cache;
pub mod config;
pub mod discord;
pub mod errors;
pub mod github;
pub mod gitlab;
pub mod metrics_defs;
pub mod model;
mod rest;

#[cfg(test)]
mod testutils;

use config::{CacheBackend, Config};
use discord::Discord;
use errors::ConnectorError;
use github::GitHub;
use gitlab::GitLab;

/// All configured connectors, constructed once at startup and shared by
/// reference between request handlers.
pub struct Connectors {
    pub github: GitHub,
    pub gitlab: GitLab,
    pub discord: Discord,
}

impl Connectors {
    pub fn new(config: &Config) -> Result<Self, ConnectorError> {
        if config.cache.backend == CacheBackend::Noop {
            cache::warn_noop_backend();
        }

        Ok(Connectors {
            github: GitHub::new(&config.github, &config.cache)?,
            gitlab: GitLab::new(&config.gitlab, &config.cache)?,
            discord: Discord::new(&config.discord, &config.cache)?,
        })
    }
}
