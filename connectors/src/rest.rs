use crate::errors::ConnectorError;
use crate::metrics_defs::{UPSTREAM_DURATION, UPSTREAM_REQUESTS};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use shared::{counter, histogram};
use std::time::Instant;
use url::Url;

const USER_AGENT: &str = concat!("badged/", env!("CARGO_PKG_VERSION"));

/// JSON-over-HTTP client shared by the provider connectors.
pub struct RestClient {
    name: &'static str,
    client: reqwest::Client,
    base_url: Url,
    query: Vec<(String, String)>,
    not_found: &'static [StatusCode],
}

impl RestClient {
    /// `not_found` lists the statuses that mean the requested entity does not
    /// exist rather than that the request failed.
    pub fn new(
        name: &'static str,
        base_url: Url,
        headers: HeaderMap,
        not_found: &'static [StatusCode],
    ) -> Result<Self, ConnectorError> {
        if base_url.cannot_be_a_base() {
            return Err(ConnectorError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(RestClient {
            name,
            client,
            base_url,
            query: Vec::new(),
            not_found,
        })
    }

    /// Adds a query parameter sent with every request.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ConnectorError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConnectorError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<T>, ConnectorError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(connector = self.name, path = url.path(), "Upstream request");

        let start = Instant::now();
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                counter!(UPSTREAM_REQUESTS, "connector" => self.name, "status" => "error")
                    .increment(1);
                return Err(e.into());
            }
        };
        let status = response.status();
        histogram!(UPSTREAM_DURATION, "connector" => self.name)
            .record(start.elapsed().as_secs_f64());
        counter!(
            UPSTREAM_REQUESTS,
            "connector" => self.name,
            "status" => status.as_str().to_string()
        )
        .increment(1);

        if self.not_found.contains(&status) {
            tracing::debug!(connector = self.name, %status, "Upstream entity not found");
            return Ok(None);
        }

        if !status.is_success() {
            tracing::warn!(connector = self.name, %status, "Unexpected upstream status");
            return Err(ConnectorError::UnexpectedStatus {
                connector: self.name,
                status,
            });
        }

        Ok(Some(response.json::<T>().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RestClient {
        RestClient::new(
            "test",
            Url::parse(base).unwrap(),
            HeaderMap::new(),
            &[StatusCode::NOT_FOUND],
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let rest = client("https://api.example.com");
        assert_eq!(
            rest.endpoint(&["repos", "octocat", "hello"]).unwrap().as_str(),
            "https://api.example.com/repos/octocat/hello"
        );

        let rest = client("https://discord.example.com/api/v10");
        assert_eq!(
            rest.endpoint(&["guilds", "1", "widget.json"]).unwrap().as_str(),
            "https://discord.example.com/api/v10/guilds/1/widget.json"
        );

        let rest = client("https://gitlab.example.com/");
        assert_eq!(
            rest.endpoint(&["api", "v4"]).unwrap().as_str(),
            "https://gitlab.example.com/api/v4"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let rest = client("https://gitlab.example.com");
        assert_eq!(
            rest.endpoint(&["projects", "group/project"]).unwrap().path(),
            "/projects/group%2Fproject"
        );
    }

    #[test]
    fn test_endpoint_query() {
        let rest = client("https://api.example.com")
            .with_query("client_id", "abc")
            .with_query("client_secret", "d&f");
        assert_eq!(
            rest.endpoint(&["users", "octocat"]).unwrap().as_str(),
            "https://api.example.com/users/octocat?client_id=abc&client_secret=d%26f"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = RestClient::new(
            "test",
            Url::parse("mailto:someone@example.com").unwrap(),
            HeaderMap::new(),
            &[],
        );
        assert!(matches!(result, Err(ConnectorError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_get_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        let ok = server
            .mock("GET", "/things/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"n": 5}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/things/2")
            .with_status(404)
            .create_async()
            .await;
        server
            .mock("GET", "/things/3")
            .with_status(500)
            .create_async()
            .await;

        let rest = client(&server.url());

        let found: Option<serde_json::Value> = rest.get(&["things", "1"]).await.unwrap();
        assert_eq!(found, Some(serde_json::json!({"n": 5})));
        ok.assert_async().await;

        let missing: Option<serde_json::Value> = rest.get(&["things", "2"]).await.unwrap();
        assert_eq!(missing, None);

        let err = rest
            .get::<serde_json::Value>(&["things", "3"])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ConnectorError::UnexpectedStatus {
                connector: "test",
                status
            } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ua")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let rest = client(&server.url());
        let _: Option<serde_json::Value> = rest.get(&["ua"]).await.unwrap();
        mock.assert_async().await;
    }
}
