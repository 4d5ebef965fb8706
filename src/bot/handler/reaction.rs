use sea_orm::DatabaseConnection;
use serenity::all::{Context, Reaction};

use crate::{model::interaction::InteractionKey, service::interaction::InteractionService};

/// Handle a reaction being added to a message
///
/// Reactions outside guilds and reactions by bots are not counted. When the gateway
/// payload carries no member, the user is fetched to check the bot flag.
pub async fn handle_reaction_add(db: &DatabaseConnection, ctx: Context, reaction: Reaction) {
    let Some(guild_id) = reaction.guild_id else {
        return;
    };

    let is_bot = match &reaction.member {
        Some(member) => member.user.bot,
        None => match reaction.user(&ctx).await {
            Ok(user) => user.bot,
            Err(e) => {
                tracing::warn!("Failed to resolve user for reaction in guild {}: {}", guild_id, e);
                return;
            }
        },
    };
    if is_bot {
        return;
    }

    let Some(user_id) = reaction.user_id else {
        return;
    };

    let key = InteractionKey::new(user_id.to_string(), guild_id.to_string());
    InteractionService::new(db).record_reaction(&key).await;
}
