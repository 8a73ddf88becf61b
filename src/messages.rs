//! Reply formatting for the demo bot's commands.

use discord_addons::{Error, markdown::bold};

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format a success message with emoji
pub fn format_success(message: &str) -> String {
    format!("✅ {}", bold(message))
}

/// User-facing text for library errors that the user can fix
pub fn describe_error(error: &Error) -> Option<String> {
    match error {
        Error::InvalidArgument { name, value } => {
            Some(format_error(&format!("Invalid {}: `{}`", name, value)))
        }
        Error::InvalidWebhookName(name) => Some(format_error(&format!(
            "Webhook names can't contain \"clyde\" or \"discord\" (got `{}`)",
            name
        ))),
        Error::WrongChannelType { kind, .. } => Some(format_error(&format!(
            "Webhooks can't be used in a {} channel",
            kind
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discord_addons::channel::ChannelKind;

    #[test]
    fn test_format_messages() {
        assert_eq!(format_error("Nope"), "❌ Nope");
        assert_eq!(format_success("Done"), "✅ **Done**");
    }

    #[test]
    fn test_describe_error() {
        let err = Error::InvalidWebhookName("Discord Relay".to_string());
        assert!(describe_error(&err).unwrap().contains("`Discord Relay`"));

        let err = Error::WrongChannelType {
            channel_id: 1,
            kind: ChannelKind::Forum,
        };
        assert!(describe_error(&err).unwrap().contains("forum channel"));

        assert!(describe_error(&Error::ChannelNotFound(1)).is_none());
    }
}
