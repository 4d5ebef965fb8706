//! New member onboarding.
//!
//! Grants the configured default role and posts a welcome embed when a member joins a
//! guild. Each step is optional and independent; failures are logged and never retried.

use chrono::Utc;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Member, RoleId},
    http::Http,
};

use crate::{config::Config, error::AppError, util::timestamp::to_discord_timestamp};

const WELCOME_COLOR: u32 = 0x0099ff;

/// Channel and role used when welcoming members.
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeSettings {
    pub channel_id: Option<ChannelId>,
    pub role_id: Option<RoleId>,
}

impl WelcomeSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            channel_id: config.welcome_channel_id.map(ChannelId::new),
            role_id: config.default_role_id.map(RoleId::new),
        }
    }
}

/// Data rendered into the welcome embed.
#[derive(Debug, Clone)]
pub struct WelcomeDetails {
    pub user_id: u64,
    pub guild_name: String,
    pub avatar_url: String,
    /// Approximate guild member count, if Discord returned one.
    pub member_count: Option<u64>,
    pub role_id: Option<RoleId>,
}

/// Builds the welcome embed for a new member.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready for posting
/// - `Err(AppError::InternalErr)` - Current time could not be converted to a Discord timestamp
pub fn build_welcome_embed(details: &WelcomeDetails) -> Result<CreateEmbed, AppError> {
    let mut description = format!(
        "Hello <@{}>! Welcome to **{}**!",
        details.user_id, details.guild_name
    );
    if let Some(role_id) = details.role_id {
        description.push_str(&format!("\nYou were given the <@&{}> role.", role_id.get()));
    }

    let mut embed = CreateEmbed::new()
        .title("🎉 Welcome!")
        .description(description)
        .color(WELCOME_COLOR)
        .thumbnail(&details.avatar_url)
        .footer(CreateEmbedFooter::new("🤖 Guildpulse"))
        .timestamp(to_discord_timestamp(Utc::now())?);

    if let Some(count) = details.member_count {
        embed = embed.field(
            "📜 Server members",
            format!("You are member #{}!", count),
            false,
        );
    }

    Ok(embed)
}

/// Runs the onboarding steps for a member who just joined.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `member` - The member who joined
/// - `settings` - Configured welcome channel and default role
pub async fn welcome_member(http: &Http, member: &Member, settings: &WelcomeSettings) {
    let mut granted_role = None;
    if let Some(role_id) = settings.role_id {
        match member.add_role(http, role_id).await {
            Ok(()) => {
                tracing::info!(
                    "Granted role {} to {} in guild {}",
                    role_id,
                    member.user.id,
                    member.guild_id
                );
                granted_role = Some(role_id);
            }
            Err(e) => tracing::error!(
                "Failed to grant role {} to {}: {}",
                role_id,
                member.user.id,
                e
            ),
        }
    }

    let Some(channel_id) = settings.channel_id else {
        return;
    };

    if let Err(e) = post_welcome(http, member, channel_id, granted_role).await {
        tracing::error!(
            "Failed to post welcome message for {} in guild {}: {}",
            member.user.id,
            member.guild_id,
            e
        );
    }
}

async fn post_welcome(
    http: &Http,
    member: &Member,
    channel_id: ChannelId,
    role_id: Option<RoleId>,
) -> Result<(), AppError> {
    let guild = member.guild_id.to_partial_guild_with_counts(http).await?;

    let details = WelcomeDetails {
        user_id: member.user.id.get(),
        guild_name: guild.name.clone(),
        avatar_url: member.user.face(),
        member_count: guild.approximate_member_count,
        role_id,
    };

    let message = CreateMessage::new().embed(build_welcome_embed(&details)?);
    channel_id.send_message(http, message).await?;

    Ok(())
}
