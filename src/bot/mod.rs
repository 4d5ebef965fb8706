//! Discord bot integration.
//!
//! Wires serenity gateway events to the interaction tracker, the welcome flow and the slash
//! commands. The bot's HTTP client is shared with the birthday scheduler so both post through
//! one client.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, used to register slash commands
//! - `GUILD_MESSAGES` - Message events counted as engagement
//! - `MESSAGE_CONTENT` - Attachment metadata on received messages (privileged intent)
//! - `GUILD_MEMBERS` - Member join events for the welcome flow (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Reaction events counted as engagement
//! - `GUILD_VOICE_STATES` - Voice join and leave events for voice time
//!
//! Privileged intents must be enabled in the Discord Developer Portal for the application.

pub mod command;
pub mod handler;
pub mod start;
