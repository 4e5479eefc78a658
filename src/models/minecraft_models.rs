use std::fmt;
use serde::Deserialize;

pub const DEFAULT_JAVA_PORT: u16 = 25565;
pub const DEFAULT_BEDROCK_PORT: u16 = 19132;
pub const MAX_PLAYER_SAMPLE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerQuery {
    pub host: String,
    pub port_hint: Option<u16>
}

impl ServerQuery {
    pub fn java_port(&self) -> u16 {
        self.port_hint.unwrap_or(DEFAULT_JAVA_PORT)
    }

    pub fn bedrock_port(&self) -> u16 {
        self.port_hint.unwrap_or(DEFAULT_BEDROCK_PORT)
    }
}

impl fmt::Display for ServerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port_hint {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Java,
    Bedrock,
    AggregatorApi
}

/// A player cap, which some sources simply don't report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCap {
    Known(i64),
    Unknown
}

impl From<Option<i64>> for PlayerCap {
    fn from(value: Option<i64>) -> Self {
        value.map_or(PlayerCap::Unknown, PlayerCap::Known)
    }
}

impl fmt::Display for PlayerCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerCap::Known(max) => write!(f, "{max}"),
            PlayerCap::Unknown => write!(f, "N/A")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatus {
    pub protocol: Protocol,
    pub host: String,
    // The aggregator doesn't always tell us which port it hit.
    pub port: Option<u16>,
    pub online: bool,
    pub players_online: i64,
    pub players_max: PlayerCap,
    pub version: String,
    pub software: String,
    pub motd: Option<String>,
    pub hosting: String,
    pub player_sample: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUnreachable {
    pub host: String,
    pub port_hint: Option<u16>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Online(ServerStatus),
    Unreachable(ServerUnreachable)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlayers {
    pub online: Option<i64>,
    pub max: Option<i64>
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawJavaStatus {
    pub players: Option<RawPlayers>,
    pub software: Option<String>,
    pub version_name: Option<String>,
    pub version_raw: Option<String>,
    pub motd: Option<String>,
    pub sample: Option<Vec<String>>
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBedrockStatus {
    pub players: Option<RawPlayers>,
    pub players_online: Option<i64>,
    pub players_max: Option<i64>,
    pub edition: Option<String>,
    pub version_name: Option<String>,
    pub version_raw: Option<String>,
    pub motd: Option<String>
}

// https://api.mcsrvstat.us/ (v2)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregatorResponse {
    #[serde(default)]
    pub online: bool,
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub players: Option<AggregatorPlayers>,
    pub motd: Option<AggregatorMotd>,
    pub software: Option<String>,
    pub version: Option<String>
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregatorPlayers {
    pub online: Option<i64>,
    pub max: Option<i64>
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregatorMotd {
    #[serde(default)]
    pub clean: Vec<String>
}
