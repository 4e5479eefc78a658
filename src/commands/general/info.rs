use std::time::Duration;
use crate::{CowContext, Error};

fn info_text(version: &str, query_timeout: Duration) -> String {
    format!(
        "Cow MC Status v{version} - asks Java, then Bedrock, then mcsrvstat.us, giving each {:.1}s to answer. Try `.mc play.hypixel.net`.",
        query_timeout.as_secs_f32()
    )
}

#[poise::command(
    prefix_command,
    slash_command,
    description_localized("en-US", "Info about this bot and how it checks servers.")
)]
pub async fn info(ctx: CowContext<'_>) -> Result<(), Error> {
    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    let content = info_text(VERSION.unwrap_or("<unknown>"), ctx.data().resolver.query_timeout());

    ctx.say(content).await?;
    Ok(())
}

/// Registers or unregisters application commands in this guild or globally
#[poise::command(prefix_command, hide_in_help, owners_only)]
pub async fn register(ctx: CowContext<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx).await?;

    Ok(())
}
