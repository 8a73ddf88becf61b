//! Webhook get-or-create on top of a channel/webhook capability.
//!
//! [`WebhookBackend`] is the only seam to Discord: [`SerenityBackend`]
//! implements it over serenity's HTTP client, tests use an in-memory fake.

mod client;
mod resolver;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::future::Future;

use crate::channel::ChannelInfo;
use crate::constants::{BLACKLISTED_WEBHOOK_NAME_SUBSTRINGS, WEBHOOK_URL_BASE};
use crate::error::{Error, Result};

pub use client::SerenityBackend;
pub use resolver::WebhookResolver;

/// A webhook as listed on, or created in, a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRecord {
    pub id: u64,
    pub name: String,
    pub token: String,
    /// User that created the webhook, when Discord reports one
    pub creator_id: Option<u64>,
}

impl WebhookRecord {
    pub fn identity(&self) -> WebhookIdentity {
        WebhookIdentity::new(self.id, self.token.clone())
    }

    fn is_owned_match(&self, name: &str, current_user_id: u64) -> bool {
        self.name == name && self.creator_id == Some(current_user_id)
    }
}

/// Everything needed to execute a webhook
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookIdentity {
    pub id: u64,
    pub token: String,
}

impl WebhookIdentity {
    pub fn new(id: u64, token: impl Into<String>) -> Self {
        Self {
            id,
            token: token.into(),
        }
    }

    /// Execution URL; contains the secret token
    pub fn url(&self) -> String {
        format!("{}/{}/{}", WEBHOOK_URL_BASE, self.id, self.token)
    }
}

impl fmt::Debug for WebhookIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookIdentity")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Channel and webhook operations needed by [`WebhookResolver`]
pub trait WebhookBackend {
    /// Id of the user this backend is authenticated as
    fn current_user_id(&self) -> u64;

    /// `Ok(None)` when the channel does not exist
    fn get_channel(
        &self,
        channel_id: u64,
    ) -> impl Future<Output = Result<Option<ChannelInfo>>> + Send;

    fn list_webhooks(
        &self,
        channel_id: u64,
    ) -> impl Future<Output = Result<Vec<WebhookRecord>>> + Send;

    fn create_webhook(
        &self,
        channel_id: u64,
        name: &str,
        audit_reason: Option<&str>,
    ) -> impl Future<Output = Result<WebhookRecord>> + Send;
}

/// Reject names containing a reserved substring, ignoring case
pub fn validate_webhook_name(name: &str) -> Result<()> {
    let lowered = name.to_lowercase();
    if BLACKLISTED_WEBHOOK_NAME_SUBSTRINGS
        .iter()
        .any(|reserved| lowered.contains(reserved))
    {
        return Err(Error::InvalidWebhookName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_webhook_name() {
        assert!(validate_webhook_name("relay").is_ok());
        assert!(validate_webhook_name("Announcements").is_ok());

        for name in ["discord-bot", "DISCORD", "myClydeBot", "clyde", "The Discord Relay"] {
            assert!(matches!(
                validate_webhook_name(name),
                Err(Error::InvalidWebhookName(n)) if n == name
            ));
        }
    }

    #[test]
    fn test_identity_url_and_debug() {
        let identity = WebhookIdentity::new(123, "s3cr3t");
        assert_eq!(identity.url(), "https://discord.com/api/webhooks/123/s3cr3t");

        let debug = format!("{:?}", identity);
        assert!(debug.contains("123"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_owned_match() {
        let record = WebhookRecord {
            id: 1,
            name: "relay".to_string(),
            token: "t".to_string(),
            creator_id: Some(7),
        };

        assert!(record.is_owned_match("relay", 7));
        assert!(!record.is_owned_match("Relay", 7));
        assert!(!record.is_owned_match("relay", 8));
        assert_eq!(record.identity(), WebhookIdentity::new(1, "t"));
    }
}
