//! Interaction tracking service.
//!
//! This module provides the `InteractionService`, the entry point the event handlers use to
//! count engagement. Writes are fire-and-forget: a storage failure is logged and dropped so
//! the Discord action that triggered it is never affected. Reads map failures to `None`.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::interaction::InteractionRepository,
    model::{
        interaction::{InteractionKey, UserInteraction},
        score::Scorecard,
    },
};

/// Service counting per-user, per-guild engagement.
pub struct InteractionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InteractionService<'a> {
    /// Creates a new InteractionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InteractionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts a message without attachments.
    pub async fn record_message(&self, key: &InteractionKey) {
        let result = InteractionRepository::new(self.db)
            .record_message(key, Utc::now())
            .await;

        if let Err(e) = result {
            tracing::error!("Failed to record message for {:?}: {}", key, e);
        }
    }

    /// Counts a message carrying at least one attachment.
    pub async fn record_attachment(&self, key: &InteractionKey) {
        let result = InteractionRepository::new(self.db)
            .record_attachment(key, Utc::now())
            .await;

        if let Err(e) = result {
            tracing::error!("Failed to record attachment for {:?}: {}", key, e);
        }
    }

    pub async fn record_reaction(&self, key: &InteractionKey) {
        let result = InteractionRepository::new(self.db)
            .record_reaction(key, Utc::now())
            .await;

        if let Err(e) = result {
            tracing::error!("Failed to record reaction for {:?}: {}", key, e);
        }
    }

    pub async fn record_voice_join(&self, key: &InteractionKey) {
        let result = InteractionRepository::new(self.db)
            .record_voice_join(key, Utc::now())
            .await;

        match result {
            Ok(()) => tracing::debug!("Voice session opened for {:?}", key),
            Err(e) => tracing::error!("Failed to record voice join for {:?}: {}", key, e),
        }
    }

    /// Closes the user's voice session if one is open.
    ///
    /// Duplicate or unmatched leave events are ignored.
    pub async fn record_voice_leave(&self, key: &InteractionKey) {
        let result = InteractionRepository::new(self.db)
            .record_voice_leave(key, Utc::now())
            .await;

        match result {
            Ok(Some(minutes)) => {
                tracing::debug!("Voice session closed for {:?}: {} minutes", key, minutes)
            }
            Ok(None) => tracing::debug!("Ignoring voice leave without open session for {:?}", key),
            Err(e) => tracing::error!("Failed to record voice leave for {:?}: {}", key, e),
        }
    }

    /// Gets the latest counters for a user in a guild.
    ///
    /// # Returns
    /// - `Some(UserInteraction)` - Record found
    /// - `None` - No event recorded yet, or the lookup failed
    pub async fn get_snapshot(&self, key: &InteractionKey) -> Option<UserInteraction> {
        match InteractionRepository::new(self.db).find(key).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("Failed to read interactions for {:?}: {}", key, e);
                None
            }
        }
    }

    /// Gets the latest counters together with their score.
    pub async fn get_scorecard(&self, key: &InteractionKey) -> Option<Scorecard> {
        self.get_snapshot(key).await.map(Scorecard::new)
    }
}

/// Formats voice minutes as `"{h}h {m}m"`, or `"{m}m"` below one hour.
pub fn format_voice_time(minutes: i64) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, remainder)
    } else {
        format!("{}m", remainder)
    }
}
