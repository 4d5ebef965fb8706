//! Birthday domain models and parameters.

use chrono::{DateTime, Utc};

/// A user's registered birthday.
///
/// The year is never stored; only the day and month are needed for the daily greeting.
#[derive(Debug, Clone, PartialEq)]
pub struct Birthday {
    pub user_id: String,
    /// Day of month, 1 to 31.
    pub day: i32,
    /// Month, 1 to 12.
    pub month: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Birthday {
    pub fn from_entity(entity: entity::user_birthday::Model) -> Self {
        Self {
            user_id: entity.user_id,
            day: entity.day,
            month: entity.month,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for registering or replacing a user's birthday.
#[derive(Debug, Clone)]
pub struct UpsertBirthdayParam {
    /// Discord ID of the user as a string
    pub user_id: String,
    pub day: i32,
    pub month: i32,
}
