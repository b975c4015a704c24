use super::{Scope, count, or_placeholder, yes_no};
use crate::errors::ApiError;
use crate::response::{BadgeResponse, Presentation};
use crate::state::AppState;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use badge::elapsed::elapsed;
use badge::{Badge, ResolveError, Resolver};
use chrono::{DateTime, Utc};
use connectors::gitlab::GitLab;
use connectors::model::gitlab::Project;
use std::sync::Arc;

const PROJECT_PATH: &str = "/gitlab/project/{id}";
const NO_SUCH_PROJECT: &str = "no such project";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectBadge {
    Stars,
    Forks,
    Issues,
    Activity,
    Created,
    Mirror,
}

impl ProjectBadge {
    pub const ALL: [ProjectBadge; 6] = [
        ProjectBadge::Stars,
        ProjectBadge::Forks,
        ProjectBadge::Issues,
        ProjectBadge::Activity,
        ProjectBadge::Created,
        ProjectBadge::Mirror,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ProjectBadge::Stars => "stars",
            ProjectBadge::Forks => "forks",
            ProjectBadge::Issues => "issues",
            ProjectBadge::Activity => "activity",
            ProjectBadge::Created => "created",
            ProjectBadge::Mirror => "mirror",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            ProjectBadge::Activity => "last activity",
            other => other.name(),
        }
    }

    /// `id` is either the numeric project id or the full project path.
    pub async fn resolve(self, gitlab: &GitLab, id: &str) -> Result<Badge, ApiError> {
        let project = gitlab.project(id).await?;
        Ok(self.map(project.as_deref(), Utc::now())?)
    }

    fn map(self, project: Option<&Project>, now: DateTime<Utc>) -> Result<Badge, ResolveError> {
        let resolver = Resolver::new(self.title(), NO_SUCH_PROJECT);
        match self {
            ProjectBadge::Stars => {
                Ok(resolver.resolve_infallible(project, |p| count(p.star_count)))
            }
            ProjectBadge::Forks => {
                Ok(resolver.resolve_infallible(project, |p| count(p.forks_count)))
            }
            ProjectBadge::Issues => resolver.resolve_with(project, |p| {
                or_placeholder(p.open_issues_count.map(|n| n.to_string()), "disabled")
            }),
            ProjectBadge::Activity => resolver.resolve_with(project, |p| {
                or_placeholder(p.last_activity_at.map(|at| elapsed(at, now)), "unknown")
            }),
            ProjectBadge::Created => {
                Ok(resolver.resolve_infallible(project, |p| Some(elapsed(p.created_at, now))))
            }
            ProjectBadge::Mirror => resolver.resolve_with(project, |p| yes_no(p.mirror)),
        }
    }
}

pub fn project_scope() -> Scope {
    Scope {
        name: "gitlab.project",
        tags: &["source"],
        path: PROJECT_PATH,
        defaults: &[("id", "gitlab-org/gitlab")],
        badges: ProjectBadge::ALL.iter().map(|b| b.name()).collect(),
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    let mut router = Router::new();

    for badge in ProjectBadge::ALL {
        router = router.route(
            &format!("{PROJECT_PATH}/{}", badge.name()),
            get(
                move |State(state): State<Arc<AppState>>,
                      Path(id): Path<String>,
                      presentation: Presentation| async move {
                    let resolved = badge.resolve(&state.connectors.gitlab, &id).await?;
                    Ok::<BadgeResponse, ApiError>(state.provider_badge(resolved, presentation))
                },
            ),
        );
    }

    router
}
