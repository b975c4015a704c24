use crate::cache::Cache;
use crate::config::{CacheConfig, DiscordConfig};
use crate::errors::ConnectorError;
use crate::model::discord::Widget;
use crate::rest::RestClient;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::sync::Arc;

pub struct Discord {
    rest: RestClient,
    widgets: Cache<Option<Arc<Widget>>>,
}

impl Discord {
    pub fn new(config: &DiscordConfig, cache: &CacheConfig) -> Result<Self, ConnectorError> {
        // 403 is returned for guilds that have the widget disabled.
        let rest = RestClient::new(
            "discord",
            config.base_url.clone(),
            HeaderMap::new(),
            &[StatusCode::NOT_FOUND, StatusCode::FORBIDDEN],
        )?;

        Ok(Discord {
            rest,
            widgets: Cache::new("discord.widget", cache),
        })
    }

    pub async fn widget(&self, guild_id: &str) -> Result<Option<Arc<Widget>>, ConnectorError> {
        self.widgets
            .get_or_fetch(guild_id, async {
                Ok(self
                    .rest
                    .get::<Widget>(&["guilds", guild_id, "widget.json"])
                    .await?
                    .map(Arc::new))
            })
            .await
    }
}
