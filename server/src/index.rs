use crate::api::DYNAMIC_PREFIX;
use crate::handlers::Scope;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use badge::Color;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// Machine readable listing of every badge the service offers.
#[derive(Debug, Serialize)]
pub struct BadgeIndex {
    context: String,
    scopes: Vec<ScopeEntry>,
    colors: Vec<Color>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScopeEntry {
    name: &'static str,
    tags: &'static [&'static str],
    parameters: Vec<String>,
    parameter_defaults: IndexMap<&'static str, &'static str>,
    paths: Vec<String>,
}

impl BadgeIndex {
    pub fn new(context: &str, scopes: &[Scope]) -> Self {
        BadgeIndex {
            context: context.to_string(),
            scopes: scopes.iter().map(ScopeEntry::from).collect(),
            colors: Color::ALL.to_vec(),
        }
    }
}

impl From<&Scope> for ScopeEntry {
    fn from(scope: &Scope) -> Self {
        ScopeEntry {
            name: scope.name,
            tags: scope.tags,
            parameters: parameters(scope.path),
            parameter_defaults: scope.defaults.iter().copied().collect(),
            paths: scope
                .paths()
                .into_iter()
                .map(|path| format!("{DYNAMIC_PREFIX}{path}"))
                .collect(),
        }
    }
}

/// Names of the `{placeholder}` segments of a route template, in order of
/// first appearance.
fn parameters(path: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + 1 + len];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        rest = &rest[start + 1 + len + 1..];
    }

    names
}

pub async fn badge_index(State(state): State<Arc<AppState>>) -> Json<BadgeIndex> {
    Json(BadgeIndex::new(&state.context, &crate::handlers::scopes()))
}
