use poise::serenity_prelude::{ExecuteWebhook, Webhook, WebhookId};
use tracing::info;

use crate::{
    messages::{describe_error, format_success},
    models::{Context, Error},
};

/// Post a message in this channel through a named webhook, creating it if needed
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_WEBHOOKS")]
pub async fn webhook_say(
    ctx: Context<'_>,
    #[description = "Webhook name"] name: String,
    #[description = "Message to post"] message: String,
) -> Result<(), Error> {
    let channel_id = ctx.channel_id();
    let audit_reason = format!("Requested by {} via /webhook_say", ctx.author().name);

    let identity = match ctx
        .data()
        .webhooks
        .resolve_or_create(channel_id.get(), &name, Some(&audit_reason))
        .await
    {
        Ok(identity) => identity,
        Err(e) => {
            if let Some(reply) = describe_error(&e) {
                ctx.say(reply).await?;
                return Ok(());
            }
            return Err(e.into());
        }
    };

    let webhook = Webhook::from_id_with_token(ctx.http(), WebhookId::new(identity.id), &identity.token).await?;
    webhook
        .execute(ctx.http(), false, ExecuteWebhook::new().content(message))
        .await?;

    ctx.send(
        poise::CreateReply::default()
            .content(format_success("Message sent!"))
            .ephemeral(true),
    )
    .await?;

    info!(
        "Posted through webhook \"{}\" ({}) in channel {}",
        name, identity.id, channel_id
    );

    Ok(())
}
