mod models;
mod commands;
mod services;

use std::env;
use std::error;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use commands::get_framework;
use models::config::Config;
use services::{bot_init, status_resolver::StatusResolver, status_sources::*};
use serenity::model::gateway::GatewayIntents;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

type Error = Box<dyn error::Error + Send + Sync>;
type CowContext<'a> = poise::Context<'a, Data, Error>;

pub struct Data {
    pub resolver: StatusResolver
}

fn init_logger() -> Result<WorkerGuard, Error> {
    let file_appender = tracing_appender::rolling::hourly("logs", "cow-mcstatus.log");
    // Dropping the guard stops the file writer, so main holds on to it.
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .with_ansi(true)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
            .with(fmt::Layer::default().with_writer(non_blocking))
    )?;

    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    info!("Initializing cow-mcstatus v{}", VERSION.unwrap_or("<unknown>"));
    info!("Reading from {}", env::current_dir()?.display());

    Ok(guard)
}

fn read_config() -> Result<Config, Error> {
    let config_json = fs::read_to_string("config.json")
        .map_err(|ex| format!("config.json not found: {ex}"))?;
    let config: Config = serde_json::from_str(&config_json)
        .map_err(|ex| format!("config.json is malformed: {ex}"))?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _guard = match init_logger() {
        Ok(guard) => Some(guard),
        Err(ex) => {
            eprintln!("Failed to initialize logger: {ex}");
            None
        }
    };

    let config = read_config()?;
    let minecraft = config.minecraft;

    let aggregator = AggregatorClient::new(&minecraft.aggregator_url, Duration::from_millis(minecraft.query_timeout_ms))?;
    let resolver = StatusResolver::new(
        &minecraft,
        Arc::new(MinecraftQuery),
        Arc::new(aggregator),
        Arc::new(DnsResolver)
    );

    let framework = poise::Framework::builder()
        .token(&config.token)
        .intents(GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT)
        .options(get_framework(&config.cmd_prefix))
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                bot_init::ready(ready);
                Ok(Data { resolver })
            })
        });

    if let Err(ex) = framework.run().await {
        error!("Discord bot client error: {:?}", ex);
    }

    Ok(())
}
