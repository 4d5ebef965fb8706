use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

use crate::bot::command;

/// Handle an incoming interaction
///
/// Only application commands are handled; components and autocomplete are ignored.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: Interaction,
) {
    if let Interaction::Command(command) = interaction {
        command::dispatch(db, &ctx, &command).await;
    }
}
