use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{bot::command::reply_ephemeral, error::AppError};

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Replies with Pong!")
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    reply_ephemeral(ctx, command, "Pong! (≧∇≦)ﾉ").await
}
