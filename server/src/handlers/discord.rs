use super::{Scope, count};
use crate::errors::ApiError;
use crate::response::{BadgeResponse, Presentation};
use crate::state::AppState;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use badge::{Badge, Resolver};
use connectors::discord::Discord;
use connectors::model::discord::Widget;
use std::sync::Arc;

const GUILD_PATH: &str = "/discord/guild/{id}";
const NO_SUCH_SERVER: &str = "no such server";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuildBadge {
    Members,
    Voice,
    Name,
    Presence,
}

impl GuildBadge {
    pub const ALL: [GuildBadge; 4] = [
        GuildBadge::Members,
        GuildBadge::Voice,
        GuildBadge::Name,
        GuildBadge::Presence,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            GuildBadge::Members => "members",
            GuildBadge::Voice => "voice",
            GuildBadge::Name => "name",
            GuildBadge::Presence => "presence",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            GuildBadge::Presence => "online users",
            _ => "discord",
        }
    }

    pub async fn resolve(self, discord: &Discord, guild_id: &str) -> Result<Badge, ApiError> {
        let widget = discord.widget(guild_id).await?;
        Ok(self.map(widget.as_deref()))
    }

    fn map(self, widget: Option<&Widget>) -> Badge {
        let resolver = Resolver::new(self.title(), NO_SUCH_SERVER);
        match self {
            GuildBadge::Members => {
                resolver.resolve_infallible(widget, |w| Some(format!("{} online", w.members.len())))
            }
            GuildBadge::Voice => resolver.resolve_infallible(widget, |w| {
                Some(format!("{} talking", w.voice_members().count()))
            }),
            GuildBadge::Name => resolver.resolve_infallible(widget, |w| {
                Some(if w.name.is_empty() {
                    "unknown".to_string()
                } else {
                    w.name.clone()
                })
            }),
            GuildBadge::Presence => resolver.resolve_infallible(widget, |w| {
                count(w.presence_count.unwrap_or(w.members.len() as u64))
            }),
        }
    }
}

pub fn guild_scope() -> Scope {
    Scope {
        name: "discord.guild",
        tags: &["chat"],
        path: GUILD_PATH,
        defaults: &[("id", "252100053093711872")],
        badges: GuildBadge::ALL.iter().map(|b| b.name()).collect(),
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    let mut router = Router::new();

    for badge in GuildBadge::ALL {
        router = router.route(
            &format!("{GUILD_PATH}/{}", badge.name()),
            get(
                move |State(state): State<Arc<AppState>>,
                      Path(id): Path<String>,
                      presentation: Presentation| async move {
                    let resolved = badge.resolve(&state.connectors.discord, &id).await?;
                    Ok::<BadgeResponse, ApiError>(state.provider_badge(resolved, presentation))
                },
            ),
        );
    }

    router
}
