use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, Interaction, Member, Message, Reaction, Ready, VoiceState,
};
use serenity::async_trait;

use crate::service::welcome::WelcomeSettings;

pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub welcome: WelcomeSettings,
}

impl Handler {
    pub fn new(db: DatabaseConnection, welcome: WelcomeSettings) -> Self {
        Self { db, welcome }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(ctx, guild, is_new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.welcome, ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, ctx, message).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction::handle_reaction_add(&self.db, ctx, reaction).await;
    }

    /// Called when a user joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.db, ctx, old, new).await;
    }

    /// Called when a slash command or component interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, ctx, interaction).await;
    }
}
