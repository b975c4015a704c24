use super::Scope;
use crate::errors::ApiError;
use crate::response::{BadgeResponse, Presentation};
use crate::state::AppState;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use badge::{Badge, Color};
use std::sync::Arc;

const CUSTOM_PATH: &str = "/custom/{color}/{title}/{value}";

pub fn scope() -> Scope {
    Scope {
        name: "custom",
        tags: &["custom"],
        path: CUSTOM_PATH,
        defaults: &[("color", "green"), ("title", "build"), ("value", "passing")],
        badges: Vec::new(),
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(CUSTOM_PATH, get(custom))
}

async fn custom(
    State(state): State<Arc<AppState>>,
    Path((color, title, value)): Path<(String, String, String)>,
    presentation: Presentation,
) -> Result<BadgeResponse, ApiError> {
    let color: Color = color.parse()?;
    Ok(state.static_badge(Badge::new(title, value, color), presentation))
}
