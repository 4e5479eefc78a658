use serenity::model::gateway::Ready;
use tracing::info;

pub fn ready(ready: &Ready) {
    info!("Logged in as {} in {} guild(s)", ready.user.name, ready.guilds.len());
}
