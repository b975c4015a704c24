use crate::cache::Cache;
use crate::config::{CacheConfig, GitHubConfig};
use crate::errors::ConnectorError;
use crate::model::github::{Organization, Release, Repository, User};
use crate::rest::RestClient;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::Arc;

const MEDIA_TYPE: &str = "application/vnd.github.v3+json";

pub struct GitHub {
    rest: RestClient,
    organizations: Cache<Option<Arc<Organization>>>,
    repositories: Cache<Option<Arc<Repository>>>,
    releases: Cache<Option<Arc<Release>>>,
    users: Cache<Option<Arc<User>>>,
}

impl GitHub {
    pub fn new(config: &GitHubConfig, cache: &CacheConfig) -> Result<Self, ConnectorError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));

        let mut rest = RestClient::new(
            "github",
            config.base_url.clone(),
            headers,
            &[StatusCode::NOT_FOUND],
        )?;

        match (&config.client_id, &config.client_secret) {
            (Some(id), Some(secret)) => {
                tracing::info!(
                    client_id = %id,
                    "GitHub connector authenticating with client credentials"
                );
                rest = rest
                    .with_query("client_id", id)
                    .with_query("client_secret", secret);
            }
            _ => tracing::warn!(
                "GitHub connector running unauthenticated, upstream rate limits will be low"
            ),
        }

        Ok(GitHub {
            rest,
            organizations: Cache::new("github.organization", cache),
            repositories: Cache::new("github.repository", cache),
            releases: Cache::new("github.release", cache),
            users: Cache::new("github.user", cache),
        })
    }

    pub async fn organization(
        &self,
        login: &str,
    ) -> Result<Option<Arc<Organization>>, ConnectorError> {
        self.organizations
            .get_or_fetch(login, self.fetch(&["orgs", login]))
            .await
    }

    pub async fn repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<Arc<Repository>>, ConnectorError> {
        let key = format!("{owner}/{repo}");
        self.repositories
            .get_or_fetch(&key, self.fetch(&["repos", owner, repo]))
            .await
    }

    /// Latest published release. `None` when the repository does not exist or
    /// has no releases.
    pub async fn latest_release(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<Arc<Release>>, ConnectorError> {
        let key = format!("{owner}/{repo}");
        self.releases
            .get_or_fetch(&key, self.fetch(&["repos", owner, repo, "releases", "latest"]))
            .await
    }

    pub async fn user(&self, login: &str) -> Result<Option<Arc<User>>, ConnectorError> {
        self.users
            .get_or_fetch(login, self.fetch(&["users", login]))
            .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<Arc<T>>, ConnectorError> {
        Ok(self.rest.get::<T>(segments).await?.map(Arc::new))
    }
}
