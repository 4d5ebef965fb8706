//! Factory for inserting `user_interaction` rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating engagement counter rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let row = UserInteractionFactory::new(&db)
///     .message_count(250)
///     .total_time_in_voice(90)
///     .build()
///     .await?;
/// ```
pub struct UserInteractionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    message_count: i64,
    reaction_count: i64,
    attachment_count: f64,
    total_time_in_voice: i64,
    last_voice_join: Option<DateTime<Utc>>,
    last_interaction: DateTime<Utc>,
}

impl<'a> UserInteractionFactory<'a> {
    /// Creates a new factory with zeroed counters.
    ///
    /// Defaults:
    /// - user_id: `"{id}"` where id is auto-incremented
    /// - guild_id: `"{id}"` from the same counter
    /// - all counters: `0`, not in voice
    /// - last_interaction: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            guild_id: next_id().to_string(),
            message_count: 0,
            reaction_count: 0,
            attachment_count: 0.0,
            total_time_in_voice: 0,
            last_voice_join: None,
            last_interaction: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn message_count(mut self, count: i64) -> Self {
        self.message_count = count;
        self
    }

    pub fn reaction_count(mut self, count: i64) -> Self {
        self.reaction_count = count;
        self
    }

    pub fn attachment_count(mut self, count: f64) -> Self {
        self.attachment_count = count;
        self
    }

    pub fn total_time_in_voice(mut self, minutes: i64) -> Self {
        self.total_time_in_voice = minutes;
        self
    }

    /// Marks the user as connected to voice since `joined_at`.
    pub fn in_voice_since(mut self, joined_at: DateTime<Utc>) -> Self {
        self.last_voice_join = Some(joined_at);
        self
    }

    pub fn last_interaction(mut self, at: DateTime<Utc>) -> Self {
        self.last_interaction = at;
        self
    }

    /// Builds and inserts the row.
    ///
    /// # Returns
    /// - `Ok(entity::user_interaction::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_interaction::Model, DbErr> {
        entity::user_interaction::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            message_count: ActiveValue::Set(self.message_count),
            reaction_count: ActiveValue::Set(self.reaction_count),
            attachment_count: ActiveValue::Set(self.attachment_count),
            total_time_in_voice: ActiveValue::Set(self.total_time_in_voice),
            is_in_voice: ActiveValue::Set(self.last_voice_join.is_some()),
            last_voice_join: ActiveValue::Set(self.last_voice_join),
            last_interaction: ActiveValue::Set(self.last_interaction),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an engagement row with default values.
///
/// Shorthand for `UserInteractionFactory::new(db).build().await`.
pub async fn create_user_interaction(
    db: &DatabaseConnection,
) -> Result<entity::user_interaction::Model, DbErr> {
    UserInteractionFactory::new(db).build().await
}
