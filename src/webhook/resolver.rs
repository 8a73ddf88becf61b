use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{validate_webhook_name, WebhookBackend, WebhookIdentity, WebhookRecord};
use crate::channel::ChannelInfo;
use crate::error::{Error, Result};

/// Finds or creates named webhooks owned by the backend's user.
///
/// Only webhooks created by [`WebhookBackend::current_user_id`] are ever
/// returned or treated as conflicts, so automations sharing a channel do
/// not adopt each other's webhooks.
///
/// A resolver built with [`WebhookResolver::new`] does not serialize
/// concurrent calls: two tasks resolving the same channel and name at the
/// same time can both miss the lookup and both create a webhook. Use
/// [`WebhookResolver::serialized`] when calls may overlap.
pub struct WebhookResolver<B> {
    backend: B,
    locks: Option<DashMap<(u64, String), Arc<Mutex<()>>>>,
}

impl<B: WebhookBackend> WebhookResolver<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            locks: None,
        }
    }

    /// Resolver that runs at most one `resolve_or_create` per (channel, name) at a time
    pub fn serialized(backend: B) -> Self {
        Self {
            backend,
            locks: Some(DashMap::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Return the existing webhook, or create it when there is none
    pub async fn resolve_or_create(
        &self,
        channel_id: u64,
        name: &str,
        audit_reason: Option<&str>,
    ) -> Result<WebhookIdentity> {
        let Some(locks) = &self.locks else {
            return self.lookup_or_create(channel_id, name, audit_reason).await;
        };

        let key = (channel_id, name.to_string());
        let lock = locks.entry(key.clone()).or_default().clone();
        let result = {
            let _guard = lock.lock().await;
            self.lookup_or_create(channel_id, name, audit_reason).await
        };

        // Drop the entry unless another call is waiting on it
        drop(lock);
        locks.remove_if(&key, |_, lock| Arc::strong_count(lock) == 1);

        result
    }

    async fn lookup_or_create(
        &self,
        channel_id: u64,
        name: &str,
        audit_reason: Option<&str>,
    ) -> Result<WebhookIdentity> {
        if let Some(existing) = self.lookup(channel_id, name).await? {
            return Ok(existing);
        }

        self.create(channel_id, name, audit_reason).await
    }

    /// Create a webhook, failing if this user already owns one with that name
    pub async fn create(
        &self,
        channel_id: u64,
        name: &str,
        audit_reason: Option<&str>,
    ) -> Result<WebhookIdentity> {
        validate_webhook_name(name)?;

        self.text_channel(channel_id).await?;

        if self.find_owned(channel_id, name).await?.is_some() {
            warn!(
                "Webhook \"{}\" already exists for channel {}",
                name, channel_id
            );
            return Err(Error::WebhookAlreadyExists {
                channel_id,
                name: name.to_string(),
            });
        }

        let created = self
            .backend
            .create_webhook(channel_id, name, audit_reason)
            .await?;

        info!(
            "Created webhook \"{}\" ({}) in channel {}",
            name, created.id, channel_id
        );

        Ok(created.identity())
    }

    /// Find a webhook with exactly this name created by this user
    pub async fn lookup(&self, channel_id: u64, name: &str) -> Result<Option<WebhookIdentity>> {
        self.text_channel(channel_id).await?;

        let found = self.find_owned(channel_id, name).await?;
        match &found {
            Some(record) => debug!(
                "Found webhook \"{}\" ({}) in channel {}",
                name, record.id, channel_id
            ),
            None => debug!("No webhook \"{}\" in channel {}", name, channel_id),
        }

        Ok(found.map(|record| record.identity()))
    }

    async fn text_channel(&self, channel_id: u64) -> Result<ChannelInfo> {
        let channel = self
            .backend
            .get_channel(channel_id)
            .await?
            .ok_or(Error::ChannelNotFound(channel_id))?;

        if !channel.kind.is_text_capable() {
            return Err(Error::WrongChannelType {
                channel_id,
                kind: channel.kind,
            });
        }

        Ok(channel)
    }

    async fn find_owned(&self, channel_id: u64, name: &str) -> Result<Option<WebhookRecord>> {
        let current_user_id = self.backend.current_user_id();
        let webhooks = self.backend.list_webhooks(channel_id).await?;

        Ok(webhooks
            .into_iter()
            .find(|webhook| webhook.is_owned_match(name, current_user_id)))
    }
}
