use std::sync::Arc;

use serenity::builder::CreateWebhook;
use serenity::http::Http;
use serenity::model::channel::{Channel, ChannelType};
use serenity::model::id::{ChannelId, UserId};
use serenity::model::webhook::Webhook;
use tracing::{debug, warn};

use super::{WebhookBackend, WebhookRecord};
use crate::channel::{ChannelInfo, ChannelKind};
use crate::error::{Error, Result};

/// [`WebhookBackend`] backed by serenity's REST client
#[derive(Clone)]
pub struct SerenityBackend {
    http: Arc<Http>,
    current_user_id: UserId,
}

impl SerenityBackend {
    /// Use an already known bot user id, e.g. from the `Ready` event
    pub fn new(http: Arc<Http>, current_user_id: UserId) -> Self {
        Self {
            http,
            current_user_id,
        }
    }

    /// Ask Discord which user the client is authenticated as
    pub async fn connect(http: Arc<Http>) -> Result<Self> {
        let current_user = http.get_current_user().await?;
        debug!("Webhook backend authenticated as {}", current_user.id);
        Ok(Self::new(http, current_user.id))
    }

    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }
}

fn channel_kind(kind: ChannelType) -> ChannelKind {
    match kind {
        ChannelType::Text => ChannelKind::Text,
        ChannelType::News => ChannelKind::Announcement,
        ChannelType::Voice => ChannelKind::Voice,
        ChannelType::Stage => ChannelKind::Stage,
        ChannelType::Category => ChannelKind::Category,
        ChannelType::Forum => ChannelKind::Forum,
        ChannelType::NewsThread | ChannelType::PublicThread | ChannelType::PrivateThread => {
            ChannelKind::Thread
        }
        ChannelType::Private => ChannelKind::Private,
        _ => ChannelKind::Other,
    }
}

fn channel_info(channel: Channel) -> ChannelInfo {
    match channel {
        Channel::Guild(guild_channel) => ChannelInfo {
            id: guild_channel.id.get(),
            kind: channel_kind(guild_channel.kind),
            name: guild_channel.name,
        },
        Channel::Private(private_channel) => ChannelInfo {
            id: private_channel.id.get(),
            kind: ChannelKind::Private,
            name: private_channel.name(),
        },
        other => ChannelInfo {
            id: other.id().get(),
            kind: ChannelKind::Other,
            name: String::new(),
        },
    }
}

fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(http_err)
            if http_err.status_code().is_some_and(|status| status.as_u16() == 404)
    )
}

/// `None` for webhooks without a token (e.g. channel follower webhooks)
fn webhook_record(webhook: &Webhook) -> Option<WebhookRecord> {
    // serenity only exposes the token through the execution url
    let url = webhook.url().ok()?;
    let token = url.rsplit('/').next()?.to_string();

    Some(WebhookRecord {
        id: webhook.id.get(),
        name: webhook.name.clone().unwrap_or_default(),
        token,
        creator_id: webhook.user.as_ref().map(|user| user.id.get()),
    })
}

impl WebhookBackend for SerenityBackend {
    fn current_user_id(&self) -> u64 {
        self.current_user_id.get()
    }

    async fn get_channel(&self, channel_id: u64) -> Result<Option<ChannelInfo>> {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(channel) => Ok(Some(channel_info(channel))),
            Err(e) if is_not_found(&e) => {
                debug!("Channel {} not found", channel_id);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_webhooks(&self, channel_id: u64) -> Result<Vec<WebhookRecord>> {
        let webhooks = ChannelId::new(channel_id).webhooks(&*self.http).await?;

        Ok(webhooks.iter().filter_map(webhook_record).collect())
    }

    async fn create_webhook(
        &self,
        channel_id: u64,
        name: &str,
        audit_reason: Option<&str>,
    ) -> Result<WebhookRecord> {
        let mut builder = CreateWebhook::new(name);
        if let Some(reason) = audit_reason {
            builder = builder.audit_log_reason(reason);
        }

        let webhook = ChannelId::new(channel_id)
            .create_webhook(&*self.http, builder)
            .await?;

        webhook_record(&webhook).ok_or_else(|| {
            warn!("Discord returned webhook {} without a token", webhook.id);
            Error::Client("created webhook has no token".into())
        })
    }
}
