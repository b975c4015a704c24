use crate::config::Config;
use crate::response::{BadgeResponse, Presentation};
use badge::Badge;
use connectors::Connectors;

/// Shared by all request handlers.
pub struct AppState {
    pub connectors: Connectors,
    pub context: String,
    dynamic_max_age: u64,
    static_max_age: u64,
}

impl AppState {
    pub fn new(connectors: Connectors, config: &Config) -> Self {
        AppState {
            connectors,
            context: config.context.clone(),
            dynamic_max_age: config.connectors.cache.dynamic_secs,
            static_max_age: config.connectors.cache.static_secs,
        }
    }

    /// Response for a badge backed by upstream data.
    pub fn provider_badge(&self, badge: Badge, presentation: Presentation) -> BadgeResponse {
        BadgeResponse::new(badge, presentation, self.dynamic_max_age)
    }

    /// Response for a badge fully described by its request path.
    pub fn static_badge(&self, badge: Badge, presentation: Presentation) -> BadgeResponse {
        BadgeResponse::new(badge, presentation, self.static_max_age)
    }
}
