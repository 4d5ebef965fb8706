use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::welcome::WelcomeSettings,
};

/// Gateway intents required by the event handlers.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_VOICE_STATES
}

/// Builds the Discord client without connecting it.
///
/// Returns the client's HTTP handle alongside it so the scheduler can post messages
/// while the gateway connection runs in its own task.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to be started and its HTTP client
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    let handler = Handler::new(db, WelcomeSettings::from_config(config));

    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and runs until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_tracked_event_intents() {
        let intents = intents();

        assert!(intents.contains(GatewayIntents::GUILD_VOICE_STATES));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGE_REACTIONS));
        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
    }
}
