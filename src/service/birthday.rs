//! Birthday service.
//!
//! Validates registrations and produces the text used by the birthday command and the
//! daily greeting job.

use chrono::{Datelike, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    data::birthday::BirthdayRepository,
    error::AppError,
    model::birthday::{Birthday, UpsertBirthdayParam},
};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Service providing birthday registration and lookups.
pub struct BirthdayService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirthdayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers or replaces the birthday of a user.
    ///
    /// # Arguments
    /// - `param` - User ID, day and month
    ///
    /// # Returns
    /// - `Ok(Birthday)` - Stored birthday
    /// - `Err(AppError::BadRequest)` - Day outside 1..=31 or month outside 1..=12
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn register(&self, param: UpsertBirthdayParam) -> Result<Birthday, AppError> {
        validate_day_month(param.day, param.month)?;

        let birthday = BirthdayRepository::new(self.db).upsert(param).await?;

        Ok(birthday)
    }

    /// Gets the birthdays of a month ordered by day.
    ///
    /// # Returns
    /// - `Ok(Vec<Birthday>)` - Birthdays in the month, possibly empty
    /// - `Err(AppError::BadRequest)` - Month outside 1..=12
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_month(&self, month: i32) -> Result<Vec<Birthday>, AppError> {
        if month_name(month).is_none() {
            return Err(AppError::BadRequest(
                "Month must be between 1 and 12".to_string(),
            ));
        }

        Ok(BirthdayRepository::new(self.db).find_by_month(month).await?)
    }

    /// Gets the birthdays falling on `date`.
    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Birthday>, AppError> {
        let birthdays = BirthdayRepository::new(self.db)
            .find_by_day(date.day() as i32, date.month() as i32)
            .await?;

        Ok(birthdays)
    }
}

/// Checks that a day and month are within calendar bounds.
///
/// Day 31 is accepted for every month, matching how users are prompted.
pub fn validate_day_month(day: i32, month: i32) -> Result<(), AppError> {
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(
            "Please provide a valid day (1-31) and month (1-12)".to_string(),
        ));
    }

    Ok(())
}

/// English name of a month number.
pub fn month_name(month: i32) -> Option<&'static str> {
    usize::try_from(month)
        .ok()
        .and_then(|month| month.checked_sub(1))
        .and_then(|index| MONTH_NAMES.get(index).copied())
}

/// Line listing a birthday in the monthly overview, e.g. `- <@123> - (05/03)`.
pub fn format_birthday_line(birthday: &Birthday) -> String {
    format!(
        "- <@{}> - ({:02}/{:02})",
        birthday.user_id, birthday.day, birthday.month
    )
}

/// Message posted in the birthday channel on the user's birthday.
pub fn birthday_greeting(user_id: &str) -> String {
    [
        format!("🎉 **Happy Birthday** <@{}>! 🎂", user_id),
        "May your day be full of joy and accomplishments!".to_string(),
        "🎈🎊🎁".to_string(),
    ]
    .join("\n")
}
