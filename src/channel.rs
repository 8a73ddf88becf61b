use std::fmt;

use crate::error::Result;
use crate::webhook::WebhookBackend;

/// Coarse channel categories, as far as this crate cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Text,
    Announcement,
    Voice,
    Stage,
    Category,
    Forum,
    Thread,
    Private,
    Other,
}

impl ChannelKind {
    /// Channels with a text chat that can own webhooks
    pub fn is_text_capable(self) -> bool {
        matches!(
            self,
            ChannelKind::Text | ChannelKind::Announcement | ChannelKind::Voice | ChannelKind::Stage
        )
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelKind::Text => "text",
            ChannelKind::Announcement => "announcement",
            ChannelKind::Voice => "voice",
            ChannelKind::Stage => "stage",
            ChannelKind::Category => "category",
            ChannelKind::Forum => "forum",
            ChannelKind::Thread => "thread",
            ChannelKind::Private => "private",
            ChannelKind::Other => "unsupported",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: u64,
    pub name: String,
    pub kind: ChannelKind,
}

async fn get_channel_of_kind<B, F>(
    backend: &B,
    channel_id: u64,
    accepts: F,
) -> Result<Option<ChannelInfo>>
where
    B: WebhookBackend,
    F: Fn(ChannelKind) -> bool,
{
    let channel = backend.get_channel(channel_id).await?;
    Ok(channel.filter(|c| accepts(c.kind)))
}

/// Channel with a text chat (text, announcement, voice or stage) by id
pub async fn get_text_channel<B: WebhookBackend>(
    backend: &B,
    channel_id: u64,
) -> Result<Option<ChannelInfo>> {
    get_channel_of_kind(backend, channel_id, ChannelKind::is_text_capable).await
}

pub async fn get_voice_channel<B: WebhookBackend>(
    backend: &B,
    channel_id: u64,
) -> Result<Option<ChannelInfo>> {
    get_channel_of_kind(backend, channel_id, |kind| kind == ChannelKind::Voice).await
}

pub async fn get_category_channel<B: WebhookBackend>(
    backend: &B,
    channel_id: u64,
) -> Result<Option<ChannelInfo>> {
    get_channel_of_kind(backend, channel_id, |kind| kind == ChannelKind::Category).await
}

pub async fn get_forum_channel<B: WebhookBackend>(
    backend: &B,
    channel_id: u64,
) -> Result<Option<ChannelInfo>> {
    get_channel_of_kind(backend, channel_id, |kind| kind == ChannelKind::Forum).await
}

pub async fn get_thread_channel<B: WebhookBackend>(
    backend: &B,
    channel_id: u64,
) -> Result<Option<ChannelInfo>> {
    get_channel_of_kind(backend, channel_id, |kind| kind == ChannelKind::Thread).await
}
