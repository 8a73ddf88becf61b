//! Error type shared by the formatting helpers and the webhook resolver.

use thiserror::Error;

use crate::channel::ChannelKind;

/// Boxed error produced by a channel/webhook backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An argument was outside the accepted set of values.
    #[error("Invalid argument `{name}`: {value}")]
    InvalidArgument {
        name: &'static str,
        value: String,
    },

    /// Webhook name contains a reserved substring.
    #[error("Invalid webhook name \"{0}\": names must not contain \"clyde\" or \"discord\"")]
    InvalidWebhookName(String),

    /// A webhook with this name was already created by the current user.
    #[error("Webhook \"{name}\" already exists for channel ID {channel_id}")]
    WebhookAlreadyExists { channel_id: u64, name: String },

    #[error("Could not retrieve text channel by ID {0}")]
    ChannelNotFound(u64),

    #[error("Channel ID {channel_id} is a {kind} channel, expected a text channel")]
    WrongChannelType { channel_id: u64, kind: ChannelKind },

    /// Failure reported by the underlying Discord client.
    #[error(transparent)]
    Client(BoxError),
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}

impl From<serenity::Error> for Error {
    fn from(err: serenity::Error) -> Self {
        Self::Client(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::invalid_argument("style", "Q");
        assert_eq!(err.to_string(), "Invalid argument `style`: Q");

        let err = Error::WebhookAlreadyExists {
            channel_id: 42,
            name: "relay".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Webhook \"relay\" already exists for channel ID 42"
        );

        let err = Error::WrongChannelType {
            channel_id: 7,
            kind: ChannelKind::Category,
        };
        assert_eq!(
            err.to_string(),
            "Channel ID 7 is a category channel, expected a text channel"
        );
    }
}
