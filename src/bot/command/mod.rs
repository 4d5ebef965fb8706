//! Slash command definitions and dispatch.
//!
//! Each submodule exposes a `NAME`, a `register` function returning the command definition
//! and a `run` function executing it. Commands are registered per guild whenever the guild
//! becomes available.

use sea_orm::DatabaseConnection;
use serenity::{
    all::{
        CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
        CreateInteractionResponseMessage, EditInteractionResponse, GuildId, ResolvedOption,
        ResolvedValue, User,
    },
    http::Http,
};

use crate::error::AppError;

pub mod birthday;
pub mod ping;
pub mod stats;

const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

/// Definitions of every slash command the bot offers.
pub fn all() -> Vec<CreateCommand> {
    vec![
        ping::register(),
        stats::register(),
        birthday::register_birthdate(),
        birthday::register_get_birthdays(),
    ]
}

/// Replaces the guild's slash commands with the current definitions.
///
/// Failures are logged; the guild simply keeps its previous command set.
pub async fn register_commands(http: &Http, guild_id: GuildId) {
    match guild_id.set_commands(http, all()).await {
        Ok(commands) => tracing::debug!(
            "Registered {} commands for guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register commands for guild {}: {}", guild_id, e),
    }
}

/// Routes a command interaction to its implementation and reports failures to the user.
pub async fn dispatch(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        ping::NAME => ping::run(ctx, command).await,
        stats::NAME => stats::run(db, ctx, command).await,
        birthday::REGISTER_NAME => birthday::run_register_birthdate(db, ctx, command).await,
        birthday::LIST_NAME => birthday::run_get_birthdays(db, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command {}", other);
            return;
        }
    };

    match result {
        Ok(()) => tracing::info!(
            "Command {} executed by {} in guild {:?}",
            command.data.name,
            command.user.id,
            command.guild_id
        ),
        Err(AppError::BadRequest(message)) => respond_error(ctx, command, &message).await,
        Err(e) => {
            tracing::error!("Command {} failed: {}", command.data.name, e);
            respond_error(ctx, command, GENERIC_ERROR_MESSAGE).await;
        }
    }
}

/// Sends an ephemeral error reply, editing the deferred response if one was already sent.
async fn respond_error(ctx: &Context, command: &CommandInteraction, message: &str) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(message)
            .ephemeral(true),
    );

    if command.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(message))
        .await
    {
        tracing::error!("Failed to report error for command {}: {}", command.data.name, e);
    }
}

/// Sends an ephemeral text reply.
pub async fn reply_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

/// Value of an integer option.
pub fn integer_option(options: &[ResolvedOption], name: &str) -> Option<i64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Integer(value) if option.name == name => Some(value),
        _ => None,
    })
}

/// Value of a user option.
pub fn user_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::User(user, _) if option.name == name => Some(user),
        _ => None,
    })
}
