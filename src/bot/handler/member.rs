use serenity::all::{Context, Member};

use crate::service::welcome::{welcome_member, WelcomeSettings};

/// Handle a member joining a guild
pub async fn handle_guild_member_addition(
    settings: &WelcomeSettings,
    ctx: Context,
    new_member: Member,
) {
    tracing::info!(
        "User {} joined guild {}",
        new_member.user.id,
        new_member.guild_id
    );

    welcome_member(&ctx.http, &new_member, settings).await;
}
