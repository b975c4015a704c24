use crate::cache::Cache;
use crate::config::{CacheConfig, GitLabConfig, TokenType};
use crate::errors::ConnectorError;
use crate::model::gitlab::Project;
use crate::rest::RestClient;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;

const PRIVATE_TOKEN: HeaderName = HeaderName::from_static("private-token");

pub struct GitLab {
    rest: RestClient,
    projects: Cache<Option<Arc<Project>>>,
}

impl GitLab {
    pub fn new(config: &GitLabConfig, cache: &CacheConfig) -> Result<Self, ConnectorError> {
        let mut headers = HeaderMap::new();
        match &config.token {
            Some(token) => {
                let (name, value) = match config.token_type {
                    TokenType::OauthToken => (AUTHORIZATION, format!("Bearer {token}")),
                    TokenType::PrivateToken => (PRIVATE_TOKEN, token.clone()),
                };
                let mut value = HeaderValue::from_str(&value)
                    .map_err(|_| ConnectorError::InvalidHeader("gitlab token"))?;
                value.set_sensitive(true);
                headers.insert(name, value);
            }
            None => tracing::warn!("GitLab connector running unauthenticated"),
        }

        let rest = RestClient::new(
            "gitlab",
            config.base_url.clone(),
            headers,
            &[StatusCode::NOT_FOUND],
        )?;

        Ok(GitLab {
            rest,
            projects: Cache::new("gitlab.project", cache),
        })
    }

    /// Looks up a project by numeric id or by its full path such as
    /// `group/subgroup/project`.
    pub async fn project(&self, id: &str) -> Result<Option<Arc<Project>>, ConnectorError> {
        self.projects
            .get_or_fetch(id, async {
                Ok(self
                    .rest
                    .get::<Project>(&["api", "v4", "projects", id])
                    .await?
                    .map(Arc::new))
            })
            .await
    }
}
