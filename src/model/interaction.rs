//! Engagement counter domain models.
//!
//! Provides the domain representation of a per-user, per-guild interaction record along
//! with the key used to address it. Identifiers stay opaque strings at this layer; the
//! bot converts serenity ids into them at the event boundary.

use chrono::{DateTime, Utc};

/// Natural key of an interaction record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionKey {
    pub user_id: String,
    pub guild_id: String,
}

impl InteractionKey {
    pub fn new(user_id: impl Into<String>, guild_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            guild_id: guild_id.into(),
        }
    }
}

/// Running engagement tally for one user inside one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInteraction {
    pub user_id: String,
    pub guild_id: String,
    /// Cumulative messages sent without attachments.
    pub message_count: i64,
    /// Cumulative reactions added.
    pub reaction_count: i64,
    /// Weighted attachment events, incremented by 1.5 per event.
    pub attachment_count: f64,
    /// Cumulative voice time in whole minutes.
    pub total_time_in_voice: i64,
    /// Whether a voice session is currently open.
    pub is_in_voice: bool,
    /// Start of the open voice session, only present while `is_in_voice` is set.
    pub last_voice_join: Option<DateTime<Utc>>,
    /// Time of the most recent tracked event of any kind.
    pub last_interaction: DateTime<Utc>,
}

impl UserInteraction {
    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `UserInteraction` - The converted domain model
    pub fn from_entity(entity: entity::user_interaction::Model) -> Self {
        Self {
            user_id: entity.user_id,
            guild_id: entity.guild_id,
            message_count: entity.message_count,
            reaction_count: entity.reaction_count,
            attachment_count: entity.attachment_count,
            total_time_in_voice: entity.total_time_in_voice,
            is_in_voice: entity.is_in_voice,
            last_voice_join: entity.last_voice_join,
            last_interaction: entity.last_interaction,
        }
    }
}
