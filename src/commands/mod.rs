mod general;
pub mod minecraft;

use tracing::error;

use crate::{CowContext, Data, Error};

pub const UNEXPECTED_ERROR: &str = "⚠️ An unexpected error occurred while checking the server.";

#[poise::command(prefix_command, track_edits, slash_command)]
async fn help(
    ctx: CowContext<'_>,
    #[description = "The command requested for help"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> Result<(), Error> {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            show_context_menu_commands: true,
            ..Default::default()
        },
    )
        .await?;
    Ok(())
}

// Anything that escapes a command is a bug on our end, not an offline server.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx } => {
            error!("Command {} failed: {}", ctx.command().qualified_name, error);

            if let Err(ex) = ctx.say(UNEXPECTED_ERROR).await {
                error!("Failed to send error message: {}", ex);
            }
        }
        other => {
            if let Err(ex) = poise::builtins::on_error(other).await {
                error!("Failed to handle framework error: {}", ex);
            }
        }
    }
}

pub fn get_framework(pref: &str) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![
            help(),
            general::info(),
            general::register(),
            minecraft::minecraft()
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(pref.to_string()),
            mention_as_prefix: true,
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}
