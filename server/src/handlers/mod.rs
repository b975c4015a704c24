//! Badge endpoints grouped by scope.
//!
//! Every scope owns a path template and the badge names that may follow it.
//! The same table drives route registration and the badge index, so the two
//! cannot drift apart.

pub mod custom;
pub mod discord;
pub mod github;
pub mod gitlab;

use crate::state::AppState;
use axum::Router;
use badge::Color;
use std::convert::Infallible;
use std::sync::Arc;

pub struct Scope {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    /// Route template, e.g. `/gitlab/project/{id}`.
    pub path: &'static str,
    pub defaults: &'static [(&'static str, &'static str)],
    /// Badge names appended to `path`. Empty when `path` is itself the badge.
    pub badges: Vec<&'static str>,
}

impl Scope {
    pub fn paths(&self) -> Vec<String> {
        if self.badges.is_empty() {
            return vec![self.path.to_string()];
        }
        self.badges
            .iter()
            .map(|badge| format!("{}/{}", self.path, badge))
            .collect()
    }
}

pub fn scopes() -> Vec<Scope> {
    vec![
        github::project_scope(),
        github::organization_scope(),
        github::user_scope(),
        gitlab::project_scope(),
        discord::guild_scope(),
        custom::scope(),
    ]
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(github::routes())
        .merge(gitlab::routes())
        .merge(discord::routes())
        .merge(custom::routes())
}

fn count(n: u64) -> Option<String> {
    Some(n.to_string())
}

// Entity exists but lacks the attribute: show `placeholder` in the fallback
// color rather than the "no such ..." badge.
fn or_placeholder(
    value: Option<String>,
    placeholder: &str,
) -> Result<Option<(String, Color)>, Infallible> {
    Ok(Some(match value {
        Some(value) => (value, Color::Default),
        None => (placeholder.to_string(), Color::Fallback),
    }))
}

fn yes_no(value: bool) -> Result<Option<(String, Color)>, Infallible> {
    Ok(Some(if value {
        ("yes".to_string(), Color::Success)
    } else {
        ("no".to_string(), Color::Failure)
    }))
}
