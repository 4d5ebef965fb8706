//! In-memory `user_interaction` models.

use chrono::{DateTime, TimeZone, Utc};

/// Fixed timestamp used as the default `last_interaction`.
pub fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 22, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a zeroed model for user `"1"` in guild `"2"`.
pub fn entity() -> entity::user_interaction::Model {
    entity_builder().build()
}

/// Creates a builder for customising an in-memory model.
pub fn entity_builder() -> UserInteractionEntityBuilder {
    UserInteractionEntityBuilder {
        model: entity::user_interaction::Model {
            user_id: "1".to_string(),
            guild_id: "2".to_string(),
            message_count: 0,
            reaction_count: 0,
            attachment_count: 0.0,
            total_time_in_voice: 0,
            is_in_voice: false,
            last_voice_join: None,
            last_interaction: default_timestamp(),
        },
    }
}

/// Builder over an in-memory `user_interaction` model.
pub struct UserInteractionEntityBuilder {
    model: entity::user_interaction::Model,
}

impl UserInteractionEntityBuilder {
    pub fn message_count(mut self, count: i64) -> Self {
        self.model.message_count = count;
        self
    }

    pub fn reaction_count(mut self, count: i64) -> Self {
        self.model.reaction_count = count;
        self
    }

    pub fn attachment_count(mut self, count: f64) -> Self {
        self.model.attachment_count = count;
        self
    }

    pub fn total_time_in_voice(mut self, minutes: i64) -> Self {
        self.model.total_time_in_voice = minutes;
        self
    }

    pub fn in_voice_since(mut self, joined_at: DateTime<Utc>) -> Self {
        self.model.is_in_voice = true;
        self.model.last_voice_join = Some(joined_at);
        self
    }

    pub fn build(self) -> entity::user_interaction::Model {
        self.model
    }
}
