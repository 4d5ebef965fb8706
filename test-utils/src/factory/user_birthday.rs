//! Factory for inserting `user_birthday` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating birthday rows.
pub struct UserBirthdayFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    day: i32,
    month: i32,
}

impl<'a> UserBirthdayFactory<'a> {
    /// Creates a new factory.
    ///
    /// Defaults:
    /// - user_id: `"{id}"` where id is auto-incremented
    /// - day / month: 1 January
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            day: 1,
            month: 1,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn day(mut self, day: i32) -> Self {
        self.day = day;
        self
    }

    pub fn month(mut self, month: i32) -> Self {
        self.month = month;
        self
    }

    /// Builds and inserts the row.
    pub async fn build(self) -> Result<entity::user_birthday::Model, DbErr> {
        let now = Utc::now();
        entity::user_birthday::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            day: ActiveValue::Set(self.day),
            month: ActiveValue::Set(self.month),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a birthday on the given day and month for a fresh user id.
///
/// # Example
///
/// ```rust,ignore
/// let birthday = create_birthday(&db, 24, 12).await?;
/// ```
pub async fn create_birthday(
    db: &DatabaseConnection,
    day: i32,
    month: i32,
) -> Result<entity::user_birthday::Model, DbErr> {
    UserBirthdayFactory::new(db).day(day).month(month).build().await
}
