use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::models::config::MinecraftConfig;
use crate::models::minecraft_models::*;
use crate::services::hosting::HostingTable;
use crate::services::status_sources::*;

const UNKNOWN: &str = "Unknown";

pub struct StatusResolver {
    game: Arc<dyn GameQuery>,
    aggregator: Arc<dyn StatusAggregator>,
    names: Arc<dyn NameResolver>,
    hosting: HostingTable,
    query_timeout: Duration,
    lookup_timeout: Duration
}

impl StatusResolver {
    pub fn new(
        config: &MinecraftConfig,
        game: Arc<dyn GameQuery>,
        aggregator: Arc<dyn StatusAggregator>,
        names: Arc<dyn NameResolver>
    ) -> Self {
        StatusResolver {
            game,
            aggregator,
            names,
            hosting: HostingTable::new(&config.hosting_brands, &config.hosting_ip_prefixes),
            query_timeout: Duration::from_millis(config.query_timeout_ms),
            lookup_timeout: Duration::from_millis(config.lookup_timeout_ms)
        }
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Java, then Bedrock, then the aggregator. Each is tried exactly once; the first to answer wins.
    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn resolve(&self, query: &ServerQuery) -> StatusOutcome {
        let host = query.host.as_str();

        match self.game.query_java(host, query.java_port(), self.query_timeout).await {
            Ok(raw) => {
                info!("Java query succeeded");
                let status = java_status(query, raw);
                return StatusOutcome::Online(self.with_hosting(status, None).await);
            }
            Err(ex) => warn!("Java query failed: {}", ex)
        }

        match self.game.query_bedrock(host, query.bedrock_port(), self.query_timeout).await {
            Ok(raw) => {
                info!("Bedrock query succeeded");
                let status = bedrock_status(query, raw);
                return StatusOutcome::Online(self.with_hosting(status, None).await);
            }
            Err(ex) => warn!("Bedrock query failed: {}", ex)
        }

        match self.aggregator.fetch(host).await {
            Ok(response) if response.online => {
                info!("Status aggregator reports the server online");
                // mcsrvstat echoes our hostname back, the IP is the useful part.
                let redirect = response.ip.clone();
                let status = aggregator_status(query, response);
                return StatusOutcome::Online(self.with_hosting(status, redirect.as_deref()).await);
            }
            Ok(_) => warn!("Status aggregator reports the server offline"),
            Err(ex) => warn!("Status aggregator failed: {}", ex)
        }

        StatusOutcome::Unreachable(ServerUnreachable {
            host: query.host.clone(),
            port_hint: query.port_hint
        })
    }

    async fn with_hosting(&self, mut status: ServerStatus, redirect: Option<&str>) -> ServerStatus {
        let resolved = match self.names.lookup(&status.host, self.lookup_timeout).await {
            Ok(ip) => Some(ip),
            Err(ex) => {
                warn!("Hosting guess degraded: {}", ex);
                None
            }
        };

        status.hosting = self.hosting.guess(&status.host, resolved, redirect);
        status
    }
}

fn version_label(name: Option<String>, raw: Option<String>) -> String {
    name.filter(|o| !o.is_empty())
        .or(raw.filter(|o| !o.is_empty()))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn java_status(query: &ServerQuery, raw: RawJavaStatus) -> ServerStatus {
    let players = raw.players.unwrap_or_default();
    let player_sample = raw.sample
        .unwrap_or_default()
        .into_iter()
        .take(MAX_PLAYER_SAMPLE)
        .collect();

    ServerStatus {
        protocol: Protocol::Java,
        host: query.host.clone(),
        port: Some(query.java_port()),
        online: true,
        players_online: players.online.unwrap_or(0),
        players_max: players.max.into(),
        version: version_label(raw.version_name, raw.version_raw),
        software: raw.software.filter(|o| !o.is_empty()).unwrap_or_else(|| UNKNOWN.to_string()),
        motd: raw.motd.filter(|o| !o.trim().is_empty()),
        hosting: UNKNOWN.to_string(),
        player_sample
    }
}

fn bedrock_status(query: &ServerQuery, raw: RawBedrockStatus) -> ServerStatus {
    let players = raw.players.unwrap_or_default();

    ServerStatus {
        protocol: Protocol::Bedrock,
        host: query.host.clone(),
        port: Some(query.bedrock_port()),
        online: true,
        players_online: players.online.or(raw.players_online).unwrap_or(0),
        players_max: players.max.or(raw.players_max).into(),
        version: version_label(raw.version_name, raw.version_raw),
        software: raw.edition.filter(|o| !o.is_empty()).unwrap_or_else(|| "Bedrock".to_string()),
        motd: raw.motd.filter(|o| !o.trim().is_empty()),
        hosting: UNKNOWN.to_string(),
        // Bedrock never sends names.
        player_sample: Vec::new()
    }
}

fn aggregator_status(query: &ServerQuery, response: AggregatorResponse) -> ServerStatus {
    let players = response.players.unwrap_or_default();
    let motd = response.motd
        .map(|o| o.clean.iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>()
            .join(" "))
        .filter(|o| !o.is_empty());

    ServerStatus {
        protocol: Protocol::AggregatorApi,
        host: query.host.clone(),
        port: response.port.or(query.port_hint),
        online: true,
        players_online: players.online.unwrap_or(0),
        players_max: players.max.into(),
        version: version_label(response.version, None),
        software: response.software.filter(|o| !o.is_empty()).unwrap_or_else(|| UNKNOWN.to_string()),
        motd,
        hosting: UNKNOWN.to_string(),
        player_sample: Vec::new()
    }
}
