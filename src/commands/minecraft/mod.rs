pub mod status;

use status::*;
use tracing::error;

use crate::{CowContext, Error};
use crate::models::minecraft_models::ServerQuery;

pub const USAGE: &str = "⚠️ Usage: .mc <host[:port]>\nExample: .mc play.hypixel.net\nOr: .mc play.nethergames.org:19132";

#[poise::command(prefix_command, slash_command,
    subcommands("status"),
    discard_spare_arguments,
    description_localized("en-US", "Fetch data from Minecraft servers."),
    aliases("mc"),
    identifying_name = "Minecraft"
)]
pub async fn minecraft(
    ctx: CowContext<'_>,
    #[description = "The hostname of the server."] host: Option<String>,
    #[description = "The port of the server."] port: Option<u16>)
-> Result<(), Error> {
    // `.mc play.example.net` skips the subcommand.
    check_server(ctx, host, port).await
}

pub(crate) async fn check_server(ctx: CowContext<'_>, host: Option<String>, port: Option<u16>) -> Result<(), Error> {
    let host = match host {
        Some(host) => host,
        None => {
            ctx.say(USAGE).await?;
            return Ok(());
        }
    };

    let query = match parse_input(&host, port) {
        Ok(query) => query,
        Err(ex) => {
            ctx.send(|msg| msg.content(format!("{ex}\n{USAGE}")).ephemeral(true)).await?;
            return Ok(());
        }
    };

    ctx.say(format!("⏳ Checking server: {query} - please wait...")).await?;

    let outcome = ctx.data().resolver.resolve(&query).await;

    if let Err(ex) = ctx.say(render_outcome(&outcome)).await {
        error!("Failed to send server status for {}: {}", query, ex);
        return Err(ex.into());
    }

    Ok(())
}

/// Accepts `host`, `host:port`, or a host with the port given separately. A port inside the host wins.
pub(crate) fn parse_input(host: &str, port: Option<u16>) -> Result<ServerQuery, Error> {
    let split = host.trim().split(':').collect::<Vec<&str>>();

    let (input_host, input_port) = match split.as_slice() {
        [host] => (*host, port),
        [host, port] => {
            let port = port.parse::<u16>().map_err(|_| "Invalid port, please try again.")?;
            (*host, Some(port))
        }
        _ => return Err("Invalid hostname, please try again.".into())
    };

    if input_host.is_empty() {
        return Err("Invalid hostname, please try again.".into());
    }

    // Bound check our port
    if input_port == Some(0) {
        return Err("Invalid port, please try again.".into());
    }

    Ok(ServerQuery {
        host: input_host.to_string(),
        port_hint: input_port
    })
}
