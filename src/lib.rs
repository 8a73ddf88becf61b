//! Helpers for building Discord messages and managing webhooks.
//!
//! - [`markdown`], [`mention`] and [`timestamp`] turn plain values into
//!   Discord markup.
//! - [`token`] checks token formats.
//! - [`channel`] and [`webhook`] wrap a few channel/webhook calls behind
//!   [`webhook::WebhookBackend`], with a serenity implementation.

pub mod channel;
pub mod constants;
pub mod error;
pub mod markdown;
pub mod mention;
pub mod timestamp;
pub mod timezone;
pub mod token;
pub mod webhook;

pub use error::{Error, Result};
pub use timestamp::{TimestampStyle, TimestampTag};
pub use webhook::{SerenityBackend, WebhookBackend, WebhookIdentity, WebhookResolver};
