use crate::metrics_defs::BADGES_RENDERED;
use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use badge::{Badge, Style};
use shared::counter;
use std::convert::Infallible;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml; charset=utf-8";

/// How a badge is returned to the client.
///
/// The SVG style comes from the `Style` extension installed on the route;
/// clients asking for `application/json` get the badge data instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Svg(Style),
    Json,
}

impl Presentation {
    pub fn negotiate(style: Style, headers: &HeaderMap) -> Self {
        let accept = headers
            .get(ACCEPT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if prefers_json(accept) {
            Presentation::Json
        } else {
            Presentation::Svg(style)
        }
    }
}

impl<S> FromRequestParts<S> for Presentation
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let style = parts.extensions.get::<Style>().copied().unwrap_or_default();
        Ok(Presentation::negotiate(style, &parts.headers))
    }
}

// Compares the best quality value given to JSON against the best one given to
// anything an SVG satisfies. Ties go to the image.
fn prefers_json(accept: &str) -> bool {
    let mut json: f32 = 0.0;
    let mut image: f32 = 0.0;

    for range in accept.split(',') {
        let mut params = range.split(';');
        let media_type = params.next().unwrap_or_default().trim().to_ascii_lowercase();
        let quality = params
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        match media_type.as_str() {
            "application/json" => json = json.max(quality),
            "image/svg+xml" | "image/*" | "*/*" => image = image.max(quality),
            _ => {}
        }
    }

    json > image
}

pub struct BadgeResponse {
    badge: Badge,
    presentation: Presentation,
    max_age: u64,
}

impl BadgeResponse {
    pub fn new(badge: Badge, presentation: Presentation, max_age: u64) -> Self {
        BadgeResponse {
            badge,
            presentation,
            max_age,
        }
    }
}

impl IntoResponse for BadgeResponse {
    fn into_response(self) -> Response {
        let cache_control = format!("public, no-transform, max-age={}", self.max_age);

        match self.presentation {
            Presentation::Svg(style) => {
                counter!(BADGES_RENDERED, "format" => style.as_str()).increment(1);
                let body = badge::render(&self.badge, style);
                (
                    StatusCode::OK,
                    [
                        (CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()),
                        (CACHE_CONTROL, cache_control),
                    ],
                    body,
                )
                    .into_response()
            }
            Presentation::Json => {
                counter!(BADGES_RENDERED, "format" => "json").increment(1);
                (
                    StatusCode::OK,
                    [(CACHE_CONTROL, cache_control)],
                    Json(self.badge),
                )
                    .into_response()
            }
        }
    }
}
