//! Engagement counter repository.
//!
//! This module provides the `InteractionRepository`, which accumulates per-user, per-guild
//! counters. Every counting write is a single `INSERT .. ON CONFLICT DO UPDATE` statement that
//! creates the row with zeroed siblings on first use and otherwise applies the increment as a
//! delta inside the database, so concurrent events for one key never lose updates.

use chrono::{DateTime, Utc};
use entity::user_interaction::{ActiveModel, Column};
use sea_orm::{
    sea_query::{self, Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::interaction::{InteractionKey, UserInteraction};

/// Weight added to `attachment_count` for every message carrying attachments.
pub const ATTACHMENT_INCREMENT: f64 = 1.5;

const SECONDS_PER_MINUTE: i64 = 60;

/// Repository providing counter updates and lookups for interaction records.
pub struct InteractionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InteractionRepository<'a> {
    /// Creates a new InteractionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InteractionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts one message.
    ///
    /// # Arguments
    /// - `key` - User and guild the message belongs to
    /// - `now` - Event time, stored as `last_interaction`
    ///
    /// # Returns
    /// - `Ok(())` - Counter incremented, or row created with `message_count = 1`
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn record_message(
        &self,
        key: &InteractionKey,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            message_count: ActiveValue::Set(1),
            ..fresh_model(key, now)
        };

        self.increment(model, Column::MessageCount, Expr::val(1i64))
            .await
    }

    /// Counts one attachment event, weighted by [`ATTACHMENT_INCREMENT`].
    pub async fn record_attachment(
        &self,
        key: &InteractionKey,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            attachment_count: ActiveValue::Set(ATTACHMENT_INCREMENT),
            ..fresh_model(key, now)
        };

        self.increment(
            model,
            Column::AttachmentCount,
            Expr::val(ATTACHMENT_INCREMENT),
        )
        .await
    }

    /// Counts one reaction.
    pub async fn record_reaction(
        &self,
        key: &InteractionKey,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            reaction_count: ActiveValue::Set(1),
            ..fresh_model(key, now)
        };

        self.increment(model, Column::ReactionCount, Expr::val(1i64))
            .await
    }

    /// Opens a voice session starting at `now`.
    ///
    /// A join observed while a session is already open restarts the session clock.
    ///
    /// # Returns
    /// - `Ok(())` - Row marked as in voice with `last_voice_join = now`
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn record_voice_join(
        &self,
        key: &InteractionKey,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            is_in_voice: ActiveValue::Set(true),
            last_voice_join: ActiveValue::Set(Some(now)),
            ..fresh_model(key, now)
        };

        entity::prelude::UserInteraction::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::GuildId])
                    .update_columns([
                        Column::IsInVoice,
                        Column::LastVoiceJoin,
                        Column::LastInteraction,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Closes the open voice session and credits its whole minutes.
    ///
    /// Reads the current row, then applies a conditional update that only matches while the
    /// row still shows the same open session. If a concurrent join or leave changed the row
    /// in between, nothing is written. A leave without an open session is a no-op.
    ///
    /// # Arguments
    /// - `key` - User and guild whose session is closing
    /// - `now` - Leave time
    ///
    /// # Returns
    /// - `Ok(Some(minutes))` - Session closed, `minutes` added to `total_time_in_voice`
    /// - `Ok(None)` - No open session for this key, nothing changed
    /// - `Err(DbErr)` - Database error during read or update
    pub async fn record_voice_leave(
        &self,
        key: &InteractionKey,
        now: DateTime<Utc>,
    ) -> Result<Option<i64>, DbErr> {
        let Some(current) = self.find(key).await? else {
            return Ok(None);
        };

        let joined_at = match (current.is_in_voice, current.last_voice_join) {
            (true, Some(joined_at)) => joined_at,
            _ => return Ok(None),
        };

        let minutes = elapsed_minutes(joined_at, now);

        let result = entity::prelude::UserInteraction::update_many()
            .col_expr(
                Column::TotalTimeInVoice,
                sea_query::ExprTrait::add(Expr::col(Column::TotalTimeInVoice), minutes),
            )
            .col_expr(Column::IsInVoice, Expr::value(false))
            .col_expr(
                Column::LastVoiceJoin,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .col_expr(Column::LastInteraction, Expr::value(now))
            .filter(Column::UserId.eq(key.user_id.as_str()))
            .filter(Column::GuildId.eq(key.guild_id.as_str()))
            .filter(Column::IsInVoice.eq(true))
            .filter(Column::LastVoiceJoin.eq(joined_at))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(minutes))
    }

    /// Finds the record for a user in a guild.
    ///
    /// # Returns
    /// - `Ok(Some(UserInteraction))` - Record found
    /// - `Ok(None)` - No event was ever recorded for this key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, key: &InteractionKey) -> Result<Option<UserInteraction>, DbErr> {
        let entity = entity::prelude::UserInteraction::find_by_id((
            key.user_id.clone(),
            key.guild_id.clone(),
        ))
        .one(self.db)
        .await?;

        Ok(entity.map(UserInteraction::from_entity))
    }

    /// Inserts `model` or, on key conflict, adds `delta` to `column` and refreshes
    /// `last_interaction`.
    async fn increment(&self, model: ActiveModel, column: Column, delta: Expr) -> Result<(), DbErr> {
        entity::prelude::UserInteraction::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::GuildId])
                    .value(
                        column,
                        sea_query::ExprTrait::add(
                            Expr::col((entity::prelude::UserInteraction, column)),
                            delta,
                        ),
                    )
                    .update_column(Column::LastInteraction)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}

/// Row inserted on the first event for a key, with every counter zeroed.
fn fresh_model(key: &InteractionKey, now: DateTime<Utc>) -> ActiveModel {
    ActiveModel {
        user_id: ActiveValue::Set(key.user_id.clone()),
        guild_id: ActiveValue::Set(key.guild_id.clone()),
        message_count: ActiveValue::Set(0),
        reaction_count: ActiveValue::Set(0),
        attachment_count: ActiveValue::Set(0.0),
        total_time_in_voice: ActiveValue::Set(0),
        is_in_voice: ActiveValue::Set(false),
        last_voice_join: ActiveValue::Set(None),
        last_interaction: ActiveValue::Set(now),
    }
}

/// Whole minutes between `joined_at` and `left_at`, clamped at zero for clock skew.
pub fn elapsed_minutes(joined_at: DateTime<Utc>, left_at: DateTime<Utc>) -> i64 {
    let seconds = (left_at - joined_at).num_seconds().max(0);
    seconds / SECONDS_PER_MINUTE
}
