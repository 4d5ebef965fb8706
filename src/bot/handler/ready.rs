//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Sets the bot's
//! activity and registers slash commands for the guilds listed in the payload.

use serenity::all::{ActivityData, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information and guild list
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("Counting your messages")));

    for guild in &ready.guilds {
        command::register_commands(&ctx.http, guild.id).await;
    }
}
