mod commands;
mod messages;
mod models;

use chrono_tz::Tz;
use discord_addons::{
    constants::LOG_DIRECTIVE,
    timezone::parse_timezone,
    token::{TokenType, is_valid_token},
    SerenityBackend,
};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::{
    commands::{timestamp, webhook_say},
    models::Data,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Create and start the bot
    if let Err(e) = start_bot(config).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    dev_guild_id: Option<u64>,
    default_timezone: Tz,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let discord_token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token")?;

    if !is_valid_token(&discord_token, TokenType::Bot) {
        return Err("DISCORD_TOKEN is not a well-formed bot token".into());
    }

    // Optional: development guild ID for faster command registration
    let dev_guild_id = std::env::var("DEV_GUILD_ID")
        .ok()
        .and_then(|id| id.parse::<u64>().ok());

    if dev_guild_id.is_some() {
        info!("Development mode: Commands will be registered to guild only");
    }

    let default_timezone = match std::env::var("DEFAULT_TIMEZONE") {
        Ok(name) => parse_timezone(&name)?,
        Err(_) => Tz::UTC,
    };

    Ok(Config {
        discord_token,
        dev_guild_id,
        default_timezone,
    })
}

/// Create and start the Discord bot
async fn start_bot(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let Config {
        discord_token,
        dev_guild_id,
        default_timezone,
    } = config;

    // Create framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![timestamp(), webhook_say()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                // Register commands based on dev_guild_id
                if let Some(guild_id) = dev_guild_id {
                    let guild = serenity::GuildId::new(guild_id);
                    info!("Registering commands in development guild: {}", guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild)
                        .await?;
                    info!(
                        "Commands registered in guild {} (instant updates)",
                        guild_id
                    );
                } else {
                    info!("Registering commands globally (may take up to 1 hour)");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Commands registered globally");
                }

                info!("Bot is ready as {}!", ready.user.name);

                let backend = SerenityBackend::new(ctx.http.clone(), ready.user.id);
                Ok(Data::new(backend, default_timezone))
            })
        })
        .build();

    // Slash commands only; no privileged intents needed
    let intents = serenity::GatewayIntents::non_privileged();

    let mut client = serenity::ClientBuilder::new(discord_token, intents)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
