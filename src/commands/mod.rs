// Command modules
mod timestamp;
mod webhook;

// Re-export all commands
pub use timestamp::timestamp;
pub use webhook::webhook_say;
