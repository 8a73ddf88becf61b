use chrono_tz::Tz;
use discord_addons::{SerenityBackend, WebhookResolver};

/// Bot state shared across all commands
pub struct Data {
    /// Resolves `/webhook_say` webhooks; serialized so overlapping commands share one webhook
    pub webhooks: WebhookResolver<SerenityBackend>,
    /// Timezone used when `/timestamp` is called without one
    pub default_timezone: Tz,
}

impl Data {
    pub fn new(backend: SerenityBackend, default_timezone: Tz) -> Self {
        Self {
            webhooks: WebhookResolver::serialized(backend),
            default_timezone,
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
