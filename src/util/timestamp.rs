use chrono::{DateTime, Utc};
use serenity::all::Timestamp;

use crate::error::{internal::InternalError, AppError};

/// Converts a UTC time to a Discord embed timestamp at second precision.
///
/// # Returns
/// - `Ok(Timestamp)` - Timestamp usable in embeds
/// - `Err(AppError::InternalErr)` - Time is outside the range Discord accepts
pub fn to_discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        })
    })
}
