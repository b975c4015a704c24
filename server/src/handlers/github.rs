use super::{Scope, count, or_placeholder, yes_no};
use crate::errors::ApiError;
use crate::response::{BadgeResponse, Presentation};
use crate::state::AppState;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use badge::elapsed::elapsed;
use badge::{Badge, Color, ResolveError, Resolver};
use chrono::{DateTime, Utc};
use connectors::github::GitHub;
use connectors::model::github::{Organization, Release, Repository, User};
use std::convert::Infallible;
use std::sync::Arc;

const PROJECT_PATH: &str = "/github/project/{owner}/{repo}";
const ORGANIZATION_PATH: &str = "/github/organization/{owner}";
const USER_PATH: &str = "/github/user/{username}";

const NO_SUCH_PROJECT: &str = "no such project";
const NO_SUCH_ORGANIZATION: &str = "no such organization";
const NO_SUCH_USER: &str = "no such user";
// The release endpoint 404s both for unknown repositories and for
// repositories without a published release.
const NO_RELEASE: &str = "unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectBadge {
    Stars,
    Forks,
    Issues,
    Watchers,
    Subscribers,
    License,
    Language,
    Activity,
    Created,
    Updated,
    Fork,
    Template,
}

impl ProjectBadge {
    pub const ALL: [ProjectBadge; 12] = [
        ProjectBadge::Stars,
        ProjectBadge::Forks,
        ProjectBadge::Issues,
        ProjectBadge::Watchers,
        ProjectBadge::Subscribers,
        ProjectBadge::License,
        ProjectBadge::Language,
        ProjectBadge::Activity,
        ProjectBadge::Created,
        ProjectBadge::Updated,
        ProjectBadge::Fork,
        ProjectBadge::Template,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ProjectBadge::Stars => "stars",
            ProjectBadge::Forks => "forks",
            ProjectBadge::Issues => "issues",
            ProjectBadge::Watchers => "watchers",
            ProjectBadge::Subscribers => "subscribers",
            ProjectBadge::License => "license",
            ProjectBadge::Language => "language",
            ProjectBadge::Activity => "activity",
            ProjectBadge::Created => "created",
            ProjectBadge::Updated => "updated",
            ProjectBadge::Fork => "fork",
            ProjectBadge::Template => "template",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            ProjectBadge::Activity => "last activity",
            other => other.name(),
        }
    }

    pub async fn resolve(
        self,
        github: &GitHub,
        owner: &str,
        repo: &str,
    ) -> Result<Badge, ApiError> {
        let repository = github.repository(owner, repo).await?;
        Ok(self.map(repository.as_deref(), Utc::now())?)
    }

    fn map(
        self,
        repository: Option<&Repository>,
        now: DateTime<Utc>,
    ) -> Result<Badge, ResolveError> {
        let resolver = Resolver::new(self.title(), NO_SUCH_PROJECT);
        match self {
            ProjectBadge::Stars => {
                Ok(resolver.resolve_infallible(repository, |r| count(r.stargazers_count)))
            }
            ProjectBadge::Forks => Ok(resolver.resolve_infallible(repository, |r| count(r.forks))),
            ProjectBadge::Issues => {
                Ok(resolver.resolve_infallible(repository, |r| count(r.open_issues)))
            }
            ProjectBadge::Watchers => {
                Ok(resolver.resolve_infallible(repository, |r| count(r.watchers_count)))
            }
            ProjectBadge::Subscribers => {
                Ok(resolver.resolve_infallible(repository, |r| count(r.subscribers_count)))
            }
            ProjectBadge::License => resolver.resolve_with(repository, |r| {
                or_placeholder(
                    r.license.as_ref().map(|license| license.name.to_lowercase()),
                    "unknown",
                )
            }),
            ProjectBadge::Language => resolver.resolve_with(repository, |r| {
                Ok::<_, Infallible>(Some(match &r.language {
                    Some(language) => (language.to_lowercase(), Color::by_hash(language)),
                    None => ("unknown".to_string(), Color::Fallback),
                }))
            }),
            ProjectBadge::Activity => resolver.resolve_with(repository, |r| {
                or_placeholder(r.pushed_at.map(|pushed| elapsed(pushed, now)), "never")
            }),
            ProjectBadge::Created => Ok(resolver
                .resolve_infallible(repository, |r| Some(elapsed(r.created_at, now)))),
            ProjectBadge::Updated => Ok(resolver
                .resolve_infallible(repository, |r| Some(elapsed(r.updated_at, now)))),
            ProjectBadge::Fork => resolver.resolve_with(repository, |r| yes_no(r.fork)),
            ProjectBadge::Template => resolver.resolve_with(repository, |r| yes_no(r.is_template)),
        }
    }
}

/// Badges answered from the latest release rather than the repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseBadge {
    Tag,
    Name,
}

impl ReleaseBadge {
    pub const ALL: [ReleaseBadge; 2] = [ReleaseBadge::Tag, ReleaseBadge::Name];

    pub const fn name(self) -> &'static str {
        match self {
            ReleaseBadge::Tag => "release",
            ReleaseBadge::Name => "release/name",
        }
    }

    pub async fn resolve(
        self,
        github: &GitHub,
        owner: &str,
        repo: &str,
    ) -> Result<Badge, ApiError> {
        let release = github.latest_release(owner, repo).await?;
        Ok(self.map(release.as_deref()))
    }

    fn map(self, release: Option<&Release>) -> Badge {
        Resolver::new("latest release", NO_RELEASE).resolve_infallible(release, |release| {
            Some(match self {
                ReleaseBadge::Tag => release.tag_name.to_lowercase(),
                ReleaseBadge::Name => release
                    .name
                    .clone()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| release.tag_name.clone()),
            })
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrganizationBadge {
    Location,
    Repositories,
    Verified,
    Created,
}

impl OrganizationBadge {
    pub const ALL: [OrganizationBadge; 4] = [
        OrganizationBadge::Location,
        OrganizationBadge::Repositories,
        OrganizationBadge::Verified,
        OrganizationBadge::Created,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            OrganizationBadge::Location => "location",
            OrganizationBadge::Repositories => "repositories",
            OrganizationBadge::Verified => "verified",
            OrganizationBadge::Created => "created",
        }
    }

    pub async fn resolve(self, github: &GitHub, owner: &str) -> Result<Badge, ApiError> {
        let organization = github.organization(owner).await?;
        Ok(self.map(organization.as_deref(), Utc::now())?)
    }

    fn map(
        self,
        organization: Option<&Organization>,
        now: DateTime<Utc>,
    ) -> Result<Badge, ResolveError> {
        let resolver = Resolver::new(self.name(), NO_SUCH_ORGANIZATION);
        match self {
            OrganizationBadge::Location => resolver
                .resolve_with(organization, |org| or_placeholder(org.location.clone(), "none")),
            OrganizationBadge::Repositories => {
                Ok(resolver.resolve_infallible(organization, |org| count(org.public_repos)))
            }
            OrganizationBadge::Verified => {
                resolver.resolve_with(organization, |org| yes_no(org.is_verified))
            }
            OrganizationBadge::Created => Ok(resolver
                .resolve_infallible(organization, |org| Some(elapsed(org.created_at, now)))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserBadge {
    Name,
    Company,
    Location,
    Hireable,
    Repositories,
    Gists,
    Followers,
    Following,
}

impl UserBadge {
    pub const ALL: [UserBadge; 8] = [
        UserBadge::Name,
        UserBadge::Company,
        UserBadge::Location,
        UserBadge::Hireable,
        UserBadge::Repositories,
        UserBadge::Gists,
        UserBadge::Followers,
        UserBadge::Following,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            UserBadge::Name => "name",
            UserBadge::Company => "company",
            UserBadge::Location => "location",
            UserBadge::Hireable => "hireable",
            UserBadge::Repositories => "repositories",
            UserBadge::Gists => "gists",
            UserBadge::Followers => "followers",
            UserBadge::Following => "following",
        }
    }

    pub async fn resolve(self, github: &GitHub, username: &str) -> Result<Badge, ApiError> {
        let user = github.user(username).await?;
        Ok(self.map(user.as_deref())?)
    }

    fn map(self, user: Option<&User>) -> Result<Badge, ResolveError> {
        let resolver = Resolver::new(self.name(), NO_SUCH_USER);
        match self {
            UserBadge::Name => {
                resolver.resolve_with(user, |u| or_placeholder(u.name.clone(), "unknown"))
            }
            UserBadge::Company => {
                resolver.resolve_with(user, |u| or_placeholder(u.company.clone(), "unknown"))
            }
            UserBadge::Location => {
                resolver.resolve_with(user, |u| or_placeholder(u.location.clone(), "unknown"))
            }
            UserBadge::Hireable => {
                resolver.resolve_with(user, |u| yes_no(u.hireable == Some(true)))
            }
            UserBadge::Repositories => {
                Ok(resolver.resolve_infallible(user, |u| count(u.public_repos)))
            }
            UserBadge::Gists => Ok(resolver.resolve_infallible(user, |u| count(u.public_gists))),
            UserBadge::Followers => Ok(resolver.resolve_infallible(user, |u| count(u.followers))),
            UserBadge::Following => Ok(resolver.resolve_infallible(user, |u| count(u.following))),
        }
    }
}

pub fn project_scope() -> Scope {
    Scope {
        name: "github.project",
        tags: &["source"],
        path: PROJECT_PATH,
        defaults: &[("owner", "dotStart"), ("repo", "Beacon")],
        badges: ProjectBadge::ALL
            .iter()
            .map(|b| b.name())
            .chain(ReleaseBadge::ALL.iter().map(|b| b.name()))
            .collect(),
    }
}

pub fn organization_scope() -> Scope {
    Scope {
        name: "github.organization",
        tags: &["source"],
        path: ORGANIZATION_PATH,
        defaults: &[("owner", "rust-lang")],
        badges: OrganizationBadge::ALL.iter().map(|b| b.name()).collect(),
    }
}

pub fn user_scope() -> Scope {
    Scope {
        name: "github.user",
        tags: &["source", "profile"],
        path: USER_PATH,
        defaults: &[("username", "dotStart")],
        badges: UserBadge::ALL.iter().map(|b| b.name()).collect(),
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    let mut router = Router::new();

    for badge in ProjectBadge::ALL {
        router = router.route(
            &format!("{PROJECT_PATH}/{}", badge.name()),
            get(
                move |State(state): State<Arc<AppState>>,
                      Path((owner, repo)): Path<(String, String)>,
                      presentation: Presentation| async move {
                    let resolved = badge.resolve(&state.connectors.github, &owner, &repo).await?;
                    Ok::<BadgeResponse, ApiError>(state.provider_badge(resolved, presentation))
                },
            ),
        );
    }

    for badge in ReleaseBadge::ALL {
        router = router.route(
            &format!("{PROJECT_PATH}/{}", badge.name()),
            get(
                move |State(state): State<Arc<AppState>>,
                      Path((owner, repo)): Path<(String, String)>,
                      presentation: Presentation| async move {
                    let resolved = badge.resolve(&state.connectors.github, &owner, &repo).await?;
                    Ok::<BadgeResponse, ApiError>(state.provider_badge(resolved, presentation))
                },
            ),
        );
    }

    for badge in OrganizationBadge::ALL {
        router = router.route(
            &format!("{ORGANIZATION_PATH}/{}", badge.name()),
            get(
                move |State(state): State<Arc<AppState>>,
                      Path(owner): Path<String>,
                      presentation: Presentation| async move {
                    let resolved = badge.resolve(&state.connectors.github, &owner).await?;
                    Ok::<BadgeResponse, ApiError>(state.provider_badge(resolved, presentation))
                },
            ),
        );
    }

    for badge in UserBadge::ALL {
        router = router.route(
            &format!("{USER_PATH}/{}", badge.name()),
            get(
                move |State(state): State<Arc<AppState>>,
                      Path(username): Path<String>,
                      presentation: Presentation| async move {
                    let resolved = badge.resolve(&state.connectors.github, &username).await?;
                    Ok::<BadgeResponse, ApiError>(state.provider_badge(resolved, presentation))
                },
            ),
        );
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{GITHUB_REPOSITORY, GITHUB_USER};
    use chrono::TimeZone;

    fn repository() -> Repository {
        serde_json::from_str(GITHUB_REPOSITORY).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap()
    }

    fn project(badge: ProjectBadge, repository: Option<&Repository>) -> Badge {
        badge.map(repository, now()).unwrap()
    }

    fn release(json: &str) -> Release {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_project_badges() {
        let repo = repository();
        let cases = [
            (ProjectBadge::Stars, "stars", "42"),
            (ProjectBadge::Forks, "forks", "9"),
            (ProjectBadge::Issues, "issues", "3"),
            (ProjectBadge::Watchers, "watchers", "40"),
            (ProjectBadge::Subscribers, "subscribers", "7"),
            (ProjectBadge::License, "license", "mit license"),
            (ProjectBadge::Activity, "last activity", "3 days ago"),
            (ProjectBadge::Created, "created", "13 years ago"),
            (ProjectBadge::Updated, "updated", "3 days ago"),
        ];
        for (badge, title, value) in cases {
            assert_eq!(
                project(badge, Some(&repo)),
                Badge::new(title, value, Color::Default),
                "{badge:?}"
            );
        }

        assert_eq!(
            project(ProjectBadge::Fork, Some(&repo)),
            Badge::new("fork", "yes", Color::Success)
        );
        assert_eq!(
            project(ProjectBadge::Template, Some(&repo)),
            Badge::new("template", "no", Color::Failure)
        );
    }

    #[test]
    fn test_language_color_follows_language() {
        let mut repo = repository();
        let rust = project(ProjectBadge::Language, Some(&repo));
        assert_eq!(rust, Badge::new("language", "rust", Color::by_hash("Rust")));
        assert_ne!(rust.color(), Color::Fallback);

        repo.language = Some("RUST".to_string());
        assert_eq!(project(ProjectBadge::Language, Some(&repo)), rust);
    }

    #[test]
    fn test_release_badges() {
        let named = release(
            r#"{"id": 1, "tag_name": "V1.2.3", "name": "Spring Cleaning",
                "created_at": "2024-04-01T00:00:00Z"}"#,
        );
        assert_eq!(
            ReleaseBadge::Tag.map(Some(&named)),
            Badge::new("latest release", "v1.2.3", Color::Default)
        );
        assert_eq!(
            ReleaseBadge::Name.map(Some(&named)),
            Badge::new("latest release", "Spring Cleaning", Color::Default)
        );

        for name in ["null", "\" \""] {
            let json = format!(
                r#"{{"id": 2, "tag_name": "v2.0.0", "name": {name},
                    "created_at": "2024-04-01T00:00:00Z"}}"#
            );
            assert_eq!(ReleaseBadge::Name.map(Some(&release(&json))).value(), "v2.0.0");
        }
    }

    #[test]
    fn test_missing_release_is_unknown() {
        for badge in ReleaseBadge::ALL {
            assert_eq!(
                badge.map(None),
                Badge::new("latest release", "unknown", Color::Fallback)
            );
        }
    }

    #[test]
    fn test_missing_project() {
        for badge in ProjectBadge::ALL {
            let result = project(badge, None);
            assert_eq!(result.value(), NO_SUCH_PROJECT);
            assert_eq!(result.color(), Color::Fallback);
            assert_eq!(result.background_color_code(), "#9E9E9E");
        }
    }

    #[test]
    fn test_project_placeholders() {
        let mut repo = repository();
        repo.license = None;
        repo.language = None;
        repo.pushed_at = None;

        assert_eq!(
            project(ProjectBadge::License, Some(&repo)),
            Badge::new("license", "unknown", Color::Fallback)
        );
        assert_eq!(
            project(ProjectBadge::Language, Some(&repo)),
            Badge::new("language", "unknown", Color::Fallback)
        );
        assert_eq!(
            project(ProjectBadge::Activity, Some(&repo)),
            Badge::new("last activity", "never", Color::Fallback)
        );
    }

    #[test]
    fn test_user_badges() {
        let mut user: User = serde_json::from_str(GITHUB_USER).unwrap();
        assert_eq!(
            UserBadge::Name.map(Some(&user)).unwrap(),
            Badge::new("name", "The Octocat", Color::Default)
        );
        assert_eq!(
            UserBadge::Hireable.map(Some(&user)).unwrap(),
            Badge::new("hireable", "yes", Color::Success)
        );
        assert_eq!(
            UserBadge::Followers.map(Some(&user)).unwrap(),
            Badge::new("followers", "100", Color::Default)
        );

        user.hireable = None;
        user.company = None;
        assert_eq!(
            UserBadge::Hireable.map(Some(&user)).unwrap(),
            Badge::new("hireable", "no", Color::Failure)
        );
        assert_eq!(
            UserBadge::Company.map(Some(&user)).unwrap(),
            Badge::new("company", "unknown", Color::Fallback)
        );

        assert_eq!(
            UserBadge::Gists.map(None).unwrap(),
            Badge::new("gists", NO_SUCH_USER, Color::Fallback)
        );
    }

    #[test]
    fn test_organization_badges() {
        let mut org: Organization = serde_json::from_str(
            r#"{"id": 9919, "login": "octo-org", "location": "Berlin", "public_repos": 12,
                "is_verified": true, "created_at": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let cases = [
            (OrganizationBadge::Location, "Berlin", Color::Default),
            (OrganizationBadge::Repositories, "12", Color::Default),
            (OrganizationBadge::Verified, "yes", Color::Success),
            (OrganizationBadge::Created, "4 years ago", Color::Default),
        ];
        for (badge, value, color) in cases {
            assert_eq!(
                badge.map(Some(&org), now()).unwrap(),
                Badge::new(badge.name(), value, color)
            );
        }

        org.is_verified = false;
        org.location = None;
        assert_eq!(
            OrganizationBadge::Verified.map(Some(&org), now()).unwrap(),
            Badge::new("verified", "no", Color::Failure)
        );
        assert_eq!(
            OrganizationBadge::Location.map(Some(&org), now()).unwrap(),
            Badge::new("location", "none", Color::Fallback)
        );

        for badge in OrganizationBadge::ALL {
            assert_eq!(
                badge.map(None, now()).unwrap(),
                Badge::new(badge.name(), NO_SUCH_ORGANIZATION, Color::Fallback)
            );
        }
    }
}
