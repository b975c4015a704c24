use crate::handlers;
use crate::index::badge_index;
use crate::state::AppState;
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use badge::Style;
use std::sync::Arc;

/// Badges under this prefix use the proportional template.
pub const DYNAMIC_PREFIX: &str = "/v1/badge";

const INDEX_PAGE: &str = include_str!("../static/index.html");

pub fn router(state: Arc<AppState>) -> Router {
    let badges = handlers::routes();

    Router::new()
        .route("/", get(index_page))
        .route(DYNAMIC_PREFIX, get(badge_index))
        .merge(badges.clone().layer(Extension(Style::Fixed)))
        .nest(DYNAMIC_PREFIX, badges.layer(Extension(Style::Dynamic)))
        .with_state(state)
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
