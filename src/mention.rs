//! Mention tags for numeric Discord ids.
//!
//! Serenity id types convert into `u64`, so `UserId`, `ChannelId` and
//! `RoleId` can be passed directly.

/// Mention a user; `ping` selects the `<@!ID>` form
pub fn user_mention(id: impl Into<u64>, ping: bool) -> String {
    if ping {
        format!("<@!{}>", id.into())
    } else {
        format!("<@{}>", id.into())
    }
}

pub fn channel_mention(id: impl Into<u64>) -> String {
    format!("<#{}>", id.into())
}

pub fn role_mention(id: impl Into<u64>) -> String {
    format!("<@&{}>", id.into())
}
