use crate::api;
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use connectors::Connectors;
use std::sync::Arc;

pub const GITHUB_REPOSITORY: &str = r#"{
    "id": 1296269,
    "name": "hello-world",
    "full_name": "octocat/hello-world",
    "fork": true,
    "is_template": false,
    "created_at": "2011-01-26T19:01:12Z",
    "updated_at": "2024-05-01T12:00:00Z",
    "pushed_at": "2024-05-01T12:00:00Z",
    "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"},
    "language": "Rust",
    "stargazers_count": 42,
    "watchers_count": 40,
    "subscribers_count": 7,
    "forks": 9,
    "open_issues": 3
}"#;

pub const GITHUB_USER: &str = r#"{
    "id": 583231,
    "login": "octocat",
    "name": "The Octocat",
    "company": "@github",
    "location": "San Francisco",
    "email": null,
    "hireable": true,
    "public_repos": 8,
    "public_gists": 8,
    "followers": 100,
    "following": 9,
    "created_at": "2011-01-25T18:44:36Z",
    "updated_at": "2024-01-01T00:00:00Z"
}"#;

pub const GITLAB_PROJECT: &str = r#"{
    "id": 278964,
    "name": "project",
    "path_with_namespace": "group/project",
    "star_count": 15,
    "forks_count": 4,
    "open_issues_count": 3,
    "created_at": "2015-05-20T10:47:11.949Z",
    "last_activity_at": "2024-05-01T08:00:00.000Z"
}"#;

pub const DISCORD_WIDGET: &str = r#"{
    "id": "42",
    "name": "Rustaceans",
    "channels": [{"id": "1", "name": "General", "position": 0}],
    "members": [
        {"id": "0", "username": "ferris", "status": "online", "channel_id": "1"},
        {"id": "1", "username": "crab", "status": "invisible"},
        {"id": "2", "username": "gopher", "status": "dnd"}
    ],
    "presence_count": 5
}"#;

/// Router whose connectors all point at `upstream`.
pub fn test_router(upstream: &str) -> Router {
    let mut config = Config::default();
    config.connectors.github.base_url = upstream.parse().unwrap();
    config.connectors.gitlab.base_url = upstream.parse().unwrap();
    config.connectors.discord.base_url = upstream.parse().unwrap();

    let connectors = Connectors::new(&config.connectors).unwrap();
    api::router(Arc::new(AppState::new(connectors, &config)))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
