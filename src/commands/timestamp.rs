use chrono_tz::Tz;
use discord_addons::{
    markdown::{inline_code, unordered_list, ListMarker},
    timestamp::format,
    timezone::{parse_datetime, parse_timezone, resolve_local},
    TimestampStyle,
};
use tracing::info;

use crate::{
    messages::describe_error,
    models::{Context, Error},
};

/// Show the timestamp tag for a date, in one style or all of them
#[poise::command(slash_command)]
pub async fn timestamp(
    ctx: Context<'_>,
    #[description = "Date and time, e.g. 2021-04-20 16:20"] datetime: String,
    #[description = "Timezone (e.g., Europe/Paris, America/New_York); defaults to the bot's"]
    timezone: Option<String>,
    #[description = "Style code: t, T, d, D, f, F or R (all styles when omitted)"]
    style: Option<String>,
) -> Result<(), Error> {
    let reply = render_timestamp(
        &datetime,
        timezone.as_deref(),
        style.as_deref(),
        &ctx.data().default_timezone,
    );

    match reply {
        Ok(reply) => {
            ctx.say(reply).await?;
            info!("Rendered timestamp '{}' for {}", datetime, ctx.author().name);
        }
        Err(e) => match describe_error(&e) {
            Some(message) => {
                ctx.say(message).await?;
            }
            None => return Err(e.into()),
        },
    }

    Ok(())
}

/// Build the reply text for `/timestamp`
fn render_timestamp(
    datetime: &str,
    timezone: Option<&str>,
    style: Option<&str>,
    default_timezone: &Tz,
) -> discord_addons::Result<String> {
    // Style is checked before anything else is parsed
    let style = style.map(str::parse::<TimestampStyle>).transpose()?;

    let zone = match timezone {
        Some(name) => parse_timezone(name)?,
        None => *default_timezone,
    };
    let instant = resolve_local(&parse_datetime(datetime)?, &zone)?;

    let line = |style: TimestampStyle| {
        let tag = format(&instant, style);
        format!("{}: {} {}", style.label(), tag, inline_code(&tag))
    };

    Ok(match style {
        Some(style) => line(style),
        None => unordered_list(TimestampStyle::ALL.map(line), ListMarker::Dash),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use discord_addons::Error as LibError;

    #[test]
    fn test_render_single_style() {
        let reply = render_timestamp("2021-04-20 16:20:30", None, Some("R"), &Tz::UTC).unwrap();
        assert_eq!(reply, "Relative: <t:1618935630:R> `<t:1618935630:R>`");
    }

    #[test]
    fn test_render_all_styles_with_timezone() {
        let reply =
            render_timestamp("2021-04-20 18:20:30", Some("Europe/Paris"), None, &Tz::UTC).unwrap();

        assert_eq!(reply.lines().count(), 7);
        assert!(reply.starts_with("- Short time: <t:1618935630:t>"));
        assert!(reply.contains("`<t:1618935630:F>`"));
    }

    #[test]
    fn test_render_rejects_bad_input() {
        assert!(matches!(
            render_timestamp("not a date", None, Some("Q"), &Tz::UTC),
            Err(LibError::InvalidArgument { name: "style", .. })
        ));
        assert!(matches!(
            render_timestamp("2021-04-20 16:20", Some("Mars/Olympus"), None, &Tz::UTC),
            Err(LibError::InvalidArgument { name: "timezone", .. })
        ));
        assert!(matches!(
            render_timestamp("yesterday", None, None, &Tz::UTC),
            Err(LibError::InvalidArgument { name: "datetime", .. })
        ));
    }
}
