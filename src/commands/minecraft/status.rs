use crate::{CowContext, Error};
use crate::models::minecraft_models::*;
use super::check_server;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━";
// Discord won't take anything longer.
const MESSAGE_LIMIT: usize = 2000;
const MOTD_LIMIT: usize = 256;

#[poise::command(
    prefix_command,
    slash_command,
    description_localized("en-US", "Check if a Minecraft server (Java or Bedrock) is online."),
    aliases("ping"),
    discard_spare_arguments
)]
pub async fn status(
    ctx: CowContext<'_>,
    #[description = "The hostname of the server, optionally with :port."] host: String,
    #[description = "The port of the server."] #[min = 1] #[max = 65535] port: Option<u16>)
-> Result<(), Error> {
    check_server(ctx, Some(host), port).await
}

fn clamp(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut out = text.chars().take(limit - 1).collect::<String>();
    out.push('…');
    out
}

fn address(status: &ServerStatus) -> String {
    match status.port {
        Some(port) => format!("{}:{}", status.host, port),
        None => status.host.clone()
    }
}

fn player_list(sample: &[String]) -> String {
    if sample.is_empty() {
        return "No visible player names.".to_string();
    }

    sample.iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .reduce(|a, b| format!("{a}\n{b}"))
        .unwrap_or_default()
}

fn motd_line(status: &ServerStatus) -> String {
    status.motd.as_deref()
        .map(|o| clamp(o, MOTD_LIMIT))
        .unwrap_or_else(|| "N/A".to_string())
}

fn render_java(status: &ServerStatus) -> String {
    format!(
"🎮 Minecraft Server Info (Java)
{DIVIDER}
🌐 Host: {}
✅ Status: ONLINE
🖥️ Software: {}
🎮 Version: {}
👥 Players: {}/{}
📡 Hosting: {}
💬 MOTD: {}

👑 Top players (up to {MAX_PLAYER_SAMPLE}):
{}
{DIVIDER}
✨ Tip: If player names are not visible, the server may hide its sample list.",
        address(status), status.software, status.version, status.players_online, status.players_max,
        status.hosting, motd_line(status), player_list(&status.player_sample))
}

fn render_bedrock(status: &ServerStatus) -> String {
    format!(
"🎮 Minecraft Server Info (Bedrock)
{DIVIDER}
🌐 Host: {}
✅ Status: ONLINE
🖥️ Edition: {}
🎮 Version: {}
👥 Players: {}/{}
📡 Hosting: {}
💬 MOTD: {}

⚠️ Note: Bedrock does not expose a player name list via query.",
        address(status), status.software, status.version, status.players_online, status.players_max,
        status.hosting, motd_line(status))
}

fn render_aggregator(status: &ServerStatus) -> String {
    format!(
"🎮 Minecraft Server Info (Via mcsrvstat)
{DIVIDER}
🌐 Host: {}
✅ Status: ONLINE (info from mcsrvstat)
🖥️ Software: {}
🎮 Version: {}
👥 Players: {}/{}
📡 Hosting: {}
💬 MOTD: {}
{DIVIDER}",
        // The aggregator is asked by host, so that's what we show.
        status.host, status.software, status.version, status.players_online, status.players_max,
        status.hosting, motd_line(status))
}

fn render_unreachable(unreachable: &ServerUnreachable) -> String {
    let query = ServerQuery { host: unreachable.host.clone(), port_hint: unreachable.port_hint };
    format!("❌ Server is offline or unreachable: {query}")
}

pub fn render_outcome(outcome: &StatusOutcome) -> String {
    let text = match outcome {
        StatusOutcome::Online(status) => match status.protocol {
            Protocol::Java => render_java(status),
            Protocol::Bedrock => render_bedrock(status),
            Protocol::AggregatorApi => render_aggregator(status)
        },
        StatusOutcome::Unreachable(unreachable) => render_unreachable(unreachable)
    };

    clamp(&text, MESSAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(protocol: Protocol) -> ServerStatus {
        ServerStatus {
            protocol,
            host: "play.example.net".to_string(),
            port: Some(25565),
            online: true,
            players_online: 4000,
            players_max: PlayerCap::Known(20000),
            version: "1.8-1.20".to_string(),
            software: "Unknown".to_string(),
            motd: None,
            hosting: "Cloud Provider / CDN".to_string(),
            player_sample: Vec::new()
        }
    }

    #[test]
    fn java_lists_players_in_order() {
        let mut java = status(Protocol::Java);
        java.player_sample = vec!["Notch".to_string(), "jeb_".to_string()];

        let text = render_outcome(&StatusOutcome::Online(java));

        assert!(text.contains("(Java)"));
        assert!(text.contains("Host: play.example.net:25565"));
        assert!(text.contains("Players: 4000/20000"));
        assert!(text.contains("1. Notch\n2. jeb_"));
        assert!(text.contains("Hosting: Cloud Provider / CDN"));
    }

    #[test]
    fn java_without_sample_says_so() {
        let text = render_outcome(&StatusOutcome::Online(status(Protocol::Java)));
        assert!(text.contains("No visible player names."));
    }

    #[test]
    fn bedrock_explains_missing_names() {
        let mut bedrock = status(Protocol::Bedrock);
        bedrock.port = Some(19132);
        bedrock.players_max = PlayerCap::Unknown;
        bedrock.software = "MCPE".to_string();

        let text = render_outcome(&StatusOutcome::Online(bedrock));

        assert!(text.contains("(Bedrock)"));
        assert!(text.contains("Edition: MCPE"));
        assert!(text.contains("Players: 4000/N/A"));
        assert!(text.contains("does not expose a player name list"));
        assert!(!text.contains("Top players"));
    }

    #[test]
    fn aggregator_shows_motd() {
        let mut aggregated = status(Protocol::AggregatorApi);
        aggregated.motd = Some("A Minecraft Server join us!".to_string());

        let text = render_outcome(&StatusOutcome::Online(aggregated));

        assert!(text.contains("info from mcsrvstat"));
        assert!(text.contains("MOTD: A Minecraft Server join us!"));
        assert!(text.contains("Host: play.example.net\n"));
    }

    #[test]
    fn unreachable_keeps_port_hint() {
        let text = render_outcome(&StatusOutcome::Unreachable(ServerUnreachable {
            host: "offline.example.com".to_string(),
            port_hint: Some(25566)
        }));

        assert_eq!(text, "❌ Server is offline or unreachable: offline.example.com:25566");

        let text = render_outcome(&StatusOutcome::Unreachable(ServerUnreachable {
            host: "offline.example.com".to_string(),
            port_hint: None
        }));

        assert_eq!(text, "❌ Server is offline or unreachable: offline.example.com");
    }

    #[test]
    fn long_motd_is_clamped() {
        let mut java = status(Protocol::Java);
        java.motd = Some("é".repeat(5000));

        let text = render_outcome(&StatusOutcome::Online(java));

        assert!(text.chars().count() <= MESSAGE_LIMIT);
        assert!(text.contains('…'));
    }
}
