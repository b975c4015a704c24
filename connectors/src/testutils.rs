pub const GITHUB_REPOSITORY: &str = r#"{
    "id": 1296269,
    "name": "hello-world",
    "full_name": "octocat/hello-world",
    "fork": false,
    "is_template": true,
    "created_at": "2011-01-26T19:01:12Z",
    "updated_at": "2024-05-01T12:00:00Z",
    "pushed_at": "2024-05-01T12:00:00Z",
    "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"},
    "language": "Rust",
    "size": 108,
    "stargazers_count": 42,
    "watchers_count": 42,
    "subscribers_count": 7,
    "forks": 9,
    "open_issues": 3
}"#;

pub const GITHUB_ORGANIZATION: &str = r#"{
    "id": 9919,
    "login": "octo-org",
    "name": "Octo Org",
    "description": null,
    "company": null,
    "location": "Berlin",
    "email": null,
    "public_repos": 12,
    "public_gists": 0,
    "followers": 5,
    "following": 0,
    "is_verified": true,
    "created_at": "2010-01-01T00:00:00Z"
}"#;

pub const GITHUB_RELEASE: &str = r#"{
    "id": 1,
    "tag_name": "v1.2.3",
    "name": "Version 1.2.3",
    "draft": false,
    "prerelease": false,
    "created_at": "2024-04-01T00:00:00Z",
    "published_at": "2024-04-02T00:00:00Z"
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
    "last_activity_at": "2024-05-01T08:00:00.000Z",
    "mirror": true
}"#;

pub const DISCORD_WIDGET: &str = r#"{
    "id": "302094807046684672",
    "name": "Rustaceans",
    "instant_invite": null,
    "channels": [{"id": "1", "name": "General", "position": 0}],
    "members": [
        {"id": "0", "username": "ferris", "discriminator": "0000", "avatar": null,
         "avatar_url": "https://cdn.example/a.png", "status": "online", "channel_id": "1",
         "deaf": false, "mute": false, "suppress": false, "self_deaf": false, "self_mute": true},
        {"id": "1", "username": "crab", "discriminator": "0000", "avatar": null,
         "avatar_url": "https://cdn.example/b.png", "status": "idle"},
        {"id": "2", "username": "gopher", "discriminator": "0000", "avatar": null,
         "avatar_url": "https://cdn.example/c.png", "status": "dnd"},
        {"id": "3", "username": "ghost", "discriminator": "0000", "avatar": null,
         "avatar_url": "https://cdn.example/d.png", "status": "offline"}
    ],
    "presence_count": 3
}"#;
