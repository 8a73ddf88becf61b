//! In-memory [`WebhookBackend`] for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::{WebhookBackend, WebhookRecord};
use crate::channel::{ChannelInfo, ChannelKind};
use crate::error::{Error, Result};

pub(crate) struct FakeBackend {
    current_user_id: u64,
    channels: HashMap<u64, ChannelKind>,
    webhooks: Mutex<Vec<(u64, WebhookRecord)>>,
    next_id: AtomicU64,
    calls: AtomicUsize,
    create_calls: AtomicUsize,
    last_audit_reason: Mutex<Option<String>>,
    fail_listing: AtomicBool,
    latency: bool,
}

impl FakeBackend {
    pub(crate) fn new(current_user_id: u64) -> Self {
        Self {
            current_user_id,
            channels: HashMap::new(),
            webhooks: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1000),
            calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            last_audit_reason: Mutex::new(None),
            fail_listing: AtomicBool::new(false),
            latency: false,
        }
    }

    pub(crate) fn with_channel(mut self, channel_id: u64, kind: ChannelKind) -> Self {
        self.channels.insert(channel_id, kind);
        self
    }

    /// Yield to the runtime inside every call so concurrent callers interleave
    pub(crate) fn with_latency(mut self) -> Self {
        self.latency = true;
        self
    }

    pub(crate) fn add_webhook(&self, channel_id: u64, name: &str, creator_id: Option<u64>) -> u64 {
        let record = self.new_record(name, creator_id);
        let id = record.id;
        self.webhooks.lock().unwrap().push((channel_id, record));
        id
    }

    pub(crate) fn fail_listing(&self) {
        self.fail_listing.store(true, Ordering::SeqCst);
    }

    /// Total backend calls, creation included
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_audit_reason(&self) -> Option<String> {
        self.last_audit_reason.lock().unwrap().clone()
    }

    fn new_record(&self, name: &str, creator_id: Option<u64>) -> WebhookRecord {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        WebhookRecord {
            id,
            name: name.to_string(),
            token: format!("token-{}", id),
            creator_id,
        }
    }

    async fn simulate_round_trip(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.latency {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

impl WebhookBackend for FakeBackend {
    fn current_user_id(&self) -> u64 {
        self.current_user_id
    }

    async fn get_channel(&self, channel_id: u64) -> Result<Option<ChannelInfo>> {
        self.simulate_round_trip().await;
        Ok(self.channels.get(&channel_id).map(|&kind| ChannelInfo {
            id: channel_id,
            name: format!("channel-{}", channel_id),
            kind,
        }))
    }

    async fn list_webhooks(&self, channel_id: u64) -> Result<Vec<WebhookRecord>> {
        self.simulate_round_trip().await;
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(Error::Client("listing webhooks failed".into()));
        }

        let webhooks = self.webhooks.lock().unwrap();
        Ok(webhooks
            .iter()
            .filter(|(channel, _)| *channel == channel_id)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn create_webhook(
        &self,
        channel_id: u64,
        name: &str,
        audit_reason: Option<&str>,
    ) -> Result<WebhookRecord> {
        self.simulate_round_trip().await;
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_audit_reason.lock().unwrap() = audit_reason.map(str::to_string);

        let record = self.new_record(name, Some(self.current_user_id));
        self.webhooks
            .lock()
            .unwrap()
            .push((channel_id, record.clone()));
        Ok(record)
    }
}
