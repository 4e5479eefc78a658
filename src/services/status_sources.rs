use std::future::Future;
use std::io::ErrorKind;
use std::net::IpAddr;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tokio::time::timeout;
use tracing::debug;

use crate::models::minecraft_models::*;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    ConnectionFailure(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("name lookup failed for {0}")]
    LookupFailure(String),
    #[error("status aggregator unavailable: {0}")]
    AggregatorUnavailable(String)
}

#[async_trait]
pub trait GameQuery: Send + Sync {
    async fn query_java(&self, host: &str, port: u16, limit: Duration) -> Result<RawJavaStatus, QueryError>;
    async fn query_bedrock(&self, host: &str, port: u16, limit: Duration) -> Result<RawBedrockStatus, QueryError>;
}

#[async_trait]
pub trait StatusAggregator: Send + Sync {
    async fn fetch(&self, host: &str) -> Result<AggregatorResponse, QueryError>;
}

#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn lookup(&self, host: &str, limit: Duration) -> Result<IpAddr, QueryError>;
}

async fn bounded<T, F>(limit: Duration, future: F) -> Result<T, QueryError>
    where F: Future<Output = Result<T, QueryError>> {
    timeout(limit, future).await.unwrap_or(Err(QueryError::Timeout(limit)))
}

fn to_i64<T: TryInto<i64>>(value: T) -> Option<i64> {
    value.try_into().ok()
}

/// Java through proto-mc, Bedrock through mcping.
pub struct MinecraftQuery;

#[async_trait]
impl GameQuery for MinecraftQuery {
    async fn query_java(&self, host: &str, port: u16, limit: Duration) -> Result<RawJavaStatus, QueryError> {
        let connection = format!("{host}:{port}");

        let response = bounded(limit, async {
            proto_mc::ping::ping(&connection).await
                .map_err(|ex| QueryError::ConnectionFailure(ex.to_string()))
        }).await?;

        let sample = response.players.sample.map(|players| players
            .iter()
            .map(|o| o.name.to_string())
            .collect::<Vec<String>>());

        Ok(java_raw(
            RawPlayers {
                online: to_i64(response.players.online),
                max: to_i64(response.players.max)
            },
            response.version.name.to_string(),
            response.version.protocol.to_string(),
            response.description.map(|o| o.text.to_string()),
            sample
        ))
    }

    async fn query_bedrock(&self, host: &str, port: u16, limit: Duration) -> Result<RawBedrockStatus, QueryError> {
        let pingable = mcping::Bedrock {
            server_address: format!("{host}:{port}"),
            timeout: Some(limit),
            // Only one shot, there's a fallback after us anyway.
            tries: 1,
            ..Default::default()
        };

        let (latency, response) = bounded(limit, async {
            mcping::tokio::get_status(pingable).await.map_err(|ex| match ex {
                mcping::Error::IoError(io) if io.kind() == ErrorKind::TimedOut || io.kind() == ErrorKind::WouldBlock =>
                    QueryError::Timeout(limit),
                mcping::Error::InvalidPacket => QueryError::MalformedResponse("invalid packet".to_string()),
                mcping::Error::JsonErr(json) => QueryError::MalformedResponse(json.to_string()),
                other => QueryError::ConnectionFailure(other.to_string())
            })
        }).await?;

        debug!("Bedrock ping to {}:{} took {}ms", host, port, latency);

        Ok(bedrock_raw(response))
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|o| !o.trim().is_empty())
}

fn java_raw(players: RawPlayers, name: String, protocol: String, motd: Option<String>, sample: Option<Vec<String>>) -> RawJavaStatus {
    RawJavaStatus {
        players: Some(players),
        // Vanilla doesn't report a brand, only the aggregator knows.
        software: None,
        version_name: non_empty(name),
        version_raw: non_empty(protocol),
        motd: motd.and_then(non_empty),
        sample: sample.map(|names| names.into_iter().filter(|o| !o.is_empty()).collect())
    }
}

fn bedrock_raw(response: mcping::BedrockResponse) -> RawBedrockStatus {
    let motd = match response.motd_2 {
        Some(second) if !second.trim().is_empty() => format!("{} {}", response.motd_1, second),
        _ => response.motd_1
    };

    RawBedrockStatus {
        players: None,
        players_online: response.players_online,
        players_max: response.players_max,
        edition: non_empty(response.edition),
        version_name: non_empty(response.version_name),
        version_raw: response.protocol_version.map(|o| o.to_string()),
        motd: non_empty(motd)
    }
}

pub struct AggregatorClient {
    client: Client,
    base_url: String
}

impl AggregatorClient {
    pub fn new(base_url: &str, limit: Duration) -> Result<Self, reqwest::Error> {
        const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

        let client = Client::builder()
            .user_agent(format!("Moogan/{}", VERSION.unwrap_or("0.3.0")))
            .timeout(limit)
            .build()?;

        Ok(AggregatorClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string()
        })
    }
}

#[async_trait]
impl StatusAggregator for AggregatorClient {
    async fn fetch(&self, host: &str) -> Result<AggregatorResponse, QueryError> {
        let url = format!("{}/{}", self.base_url, host);

        let response = self.client.get(&url).send().await
            .and_then(|o| o.error_for_status())
            .map_err(|ex| QueryError::AggregatorUnavailable(ex.to_string()))?;

        response.json::<AggregatorResponse>().await
            .map_err(|ex| QueryError::MalformedResponse(ex.to_string()))
    }
}

pub struct DnsResolver;

#[async_trait]
impl NameResolver for DnsResolver {
    async fn lookup(&self, host: &str, limit: Duration) -> Result<IpAddr, QueryError> {
        bounded(limit, async {
            // lookup_host wants a port, any will do.
            let mut addresses = tokio::net::lookup_host((host, 0)).await
                .map_err(|_| QueryError::LookupFailure(host.to_string()))?;

            addresses.next()
                .map(|o| o.ip())
                .ok_or_else(|| QueryError::LookupFailure(host.to_string()))
        }).await
    }
}
