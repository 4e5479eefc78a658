pub mod bot_init;
pub mod hosting;
pub mod status_resolver;
pub mod status_sources;
