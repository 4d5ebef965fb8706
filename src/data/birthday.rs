//! Birthday repository for database operations.
//!
//! Provides the `BirthdayRepository` for registering users' birthdays and for the lookups
//! used by the `get_birthdays` command and the daily birthday job.

use chrono::Utc;
use entity::user_birthday::{ActiveModel, Column};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::birthday::{Birthday, UpsertBirthdayParam};

/// Repository providing database operations for birthdays.
pub struct BirthdayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirthdayRepository<'a> {
    /// Creates a new BirthdayRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BirthdayRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a birthday, replacing any previous registration for the user.
    ///
    /// `created_at` keeps its original value on replacement; `updated_at` is refreshed.
    ///
    /// # Arguments
    /// - `param` - User ID, day and month
    ///
    /// # Returns
    /// - `Ok(Birthday)` - The created or updated birthday
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertBirthdayParam) -> Result<Birthday, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::UserBirthday::insert(ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            day: ActiveValue::Set(param.day),
            month: ActiveValue::Set(param.month),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([Column::Day, Column::Month, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Birthday::from_entity(entity))
    }

    /// Finds the birthday registered by a user.
    ///
    /// # Returns
    /// - `Ok(Some(Birthday))` - Birthday found
    /// - `Ok(None)` - User never registered a birthday
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user(&self, user_id: &str) -> Result<Option<Birthday>, DbErr> {
        let entity = entity::prelude::UserBirthday::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Birthday::from_entity))
    }

    /// Gets every birthday falling on the given day and month.
    pub async fn find_by_day(&self, day: i32, month: i32) -> Result<Vec<Birthday>, DbErr> {
        let entities = entity::prelude::UserBirthday::find()
            .filter(Column::Day.eq(day))
            .filter(Column::Month.eq(month))
            .order_by_asc(Column::UserId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Birthday::from_entity).collect())
    }

    /// Gets every birthday in a month ordered by day.
    ///
    /// # Arguments
    /// - `month` - Month number, 1 to 12
    ///
    /// # Returns
    /// - `Ok(Vec<Birthday>)` - Birthdays ordered by day, then user ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_month(&self, month: i32) -> Result<Vec<Birthday>, DbErr> {
        let entities = entity::prelude::UserBirthday::find()
            .filter(Column::Month.eq(month))
            .order_by_asc(Column::Day)
            .order_by_asc(Column::UserId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Birthday::from_entity).collect())
    }
}
