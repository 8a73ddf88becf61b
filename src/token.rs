//! Token format checks.
//!
//! These only look at the shape of a token. Whether Discord accepts it is
//! only known once it is used.

use serenity::utils::validate_token;

/// Kind of credential being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenType {
    #[default]
    Bot,
    Bearer,
    Webhook,
}

/// Check whether `input` looks like a token of the given type
pub fn is_valid_token(input: &str, kind: TokenType) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    match kind {
        TokenType::Bot => {
            !input.chars().any(char::is_whitespace) && validate_token(input).is_ok()
        }
        TokenType::Bearer | TokenType::Webhook => true,
    }
}

/// Return the token back when it is valid, `None` otherwise
pub fn try_validate_token(input: &str, kind: TokenType) -> Option<&str> {
    is_valid_token(input, kind).then_some(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_TOKEN: &str = "MTA1NDEyMjk2NDQ2MzUzMTA1OA.GhQ3Xy.abcdefghijklmnopqrstuvwxyz0123456789AB";

    #[test]
    fn test_valid_bot_token() {
        assert!(is_valid_token(BOT_TOKEN, TokenType::Bot));
        assert_eq!(try_validate_token(BOT_TOKEN, TokenType::default()), Some(BOT_TOKEN));
    }

    #[test]
    fn test_invalid_bot_token() {
        assert!(!is_valid_token("", TokenType::Bot));
        assert!(!is_valid_token("not-a-token", TokenType::Bot));
        assert!(!is_valid_token("abc.def", TokenType::Bot));
        assert!(!is_valid_token("abc..ghi", TokenType::Bot));
        assert!(!is_valid_token("abc.d ef.ghi", TokenType::Bot));
        assert_eq!(try_validate_token("abc.def", TokenType::Bot), None);
    }

    #[test]
    fn test_bearer_and_webhook_tokens() {
        assert!(is_valid_token("opaque-oauth-token", TokenType::Bearer));
        assert!(is_valid_token("opaque-webhook-token", TokenType::Webhook));

        assert!(is_valid_token("inner space", TokenType::Webhook));

        assert!(!is_valid_token("", TokenType::Bearer));
        assert!(!is_valid_token(" \t\n", TokenType::Webhook));
    }
}
