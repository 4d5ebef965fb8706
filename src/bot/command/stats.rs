//! `/stats` command showing a member's engagement scorecard.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedFooter, EditInteractionResponse,
};
use sea_orm::DatabaseConnection;

use crate::{
    bot::command::{reply_ephemeral, user_option},
    error::AppError,
    model::{interaction::InteractionKey, score::Scorecard},
    service::interaction::{format_voice_time, InteractionService},
    util::timestamp::to_discord_timestamp,
};

pub const NAME: &str = "stats";
const USER_OPTION: &str = "user";
const STATS_COLOR: u32 = 0x23272a;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Shows a member's interaction statistics")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                USER_OPTION,
                "Member to show statistics for, defaults to you",
            )
            .required(false),
        )
}

pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    command.defer(&ctx.http).await?;

    let options = command.data.options();
    let target = user_option(&options, USER_OPTION).unwrap_or(&command.user);

    let key = InteractionKey::new(target.id.to_string(), guild_id.to_string());
    let scorecard = InteractionService::new(db).get_scorecard(&key).await;

    let response = match scorecard {
        Some(scorecard) => EditInteractionResponse::new().embed(build_stats_embed(
            target.display_name(),
            &target.face(),
            &scorecard,
        )?),
        None => EditInteractionResponse::new()
            .content(format!("No interactions recorded for <@{}>", target.id)),
    };

    command.edit_response(&ctx.http, response).await?;

    Ok(())
}

/// Builds the scorecard embed.
///
/// # Arguments
/// - `display_name` - Name shown in the title
/// - `avatar_url` - Thumbnail URL
/// - `scorecard` - Counters and their computed score
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready for the response
/// - `Err(AppError::InternalErr)` - Last interaction time cannot be represented as a Discord timestamp
pub fn build_stats_embed(
    display_name: &str,
    avatar_url: &str,
    scorecard: &Scorecard,
) -> Result<CreateEmbed, AppError> {
    let interaction = &scorecard.interaction;
    let score = &scorecard.score;

    let embed = CreateEmbed::new()
        .title(format!("📊 Statistics for {}", display_name))
        .color(STATS_COLOR)
        .thumbnail(avatar_url)
        .field(
            "📝 Messages",
            format!("{} ({} pts)", interaction.message_count, score.message_points),
            true,
        )
        .field(
            "😄 Reactions",
            format!("{} ({} pts)", interaction.reaction_count, score.reaction_points),
            true,
        )
        .field(
            "🎤 Voice time",
            format!(
                "{} ({} pts)",
                format_voice_time(interaction.total_time_in_voice),
                score.voice_points
            ),
            true,
        )
        .field(
            "📁 Attachments",
            format!(
                "{} ({} pts)",
                interaction.attachment_count, score.attachment_points
            ),
            true,
        )
        .field(
            "✨ Progress",
            format!(
                "**Level:** {}\n**Total points:** {}",
                score.level, score.total_points
            ),
            false,
        )
        .footer(CreateEmbedFooter::new("Last interaction"))
        .timestamp(to_discord_timestamp(interaction.last_interaction)?);

    Ok(embed)
}
