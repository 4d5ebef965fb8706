use serenity::all::{Context, Guild};

use crate::bot::command;

/// Handle a guild becoming available or the bot joining a new guild
///
/// Slash commands are registered per guild so they are available immediately.
pub async fn handle_guild_create(ctx: Context, guild: Guild, is_new: Option<bool>) {
    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}, member_count: {}",
        guild.name,
        guild.id,
        is_new,
        guild.member_count
    );

    command::register_commands(&ctx.http, guild.id).await;
}
