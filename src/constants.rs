/// Substrings Discord refuses in webhook names (matched case-insensitively)
pub const BLACKLISTED_WEBHOOK_NAME_SUBSTRINGS: [&str; 2] = ["clyde", "discord"];

/// Language tag used for fenced code blocks when none is given
pub const DEFAULT_CODE_BLOCK_LANGUAGE: &str = "md";

/// Base URL for webhook execution endpoints
pub const WEBHOOK_URL_BASE: &str = "https://discord.com/api/webhooks";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "discord_addons=info";
