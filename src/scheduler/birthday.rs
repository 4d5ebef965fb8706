use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::birthday::Birthday,
    service::birthday::{birthday_greeting, BirthdayService},
};

/// Every day at midnight UTC.
const BIRTHDAY_SCHEDULE: &str = "0 0 0 * * *";

/// Starts the daily birthday greeting scheduler
///
/// Without a configured birthday channel there is nothing to post, so no job is
/// scheduled.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for posting greetings
/// - `channel_id`: Channel receiving the greetings
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    channel_id: Option<u64>,
) -> Result<(), AppError> {
    let Some(channel_id) = channel_id.map(ChannelId::new) else {
        tracing::info!("No birthday channel configured, birthday scheduler disabled");
        return Ok(());
    };

    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();

    let job = Job::new_async(BIRTHDAY_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            let today = Utc::now().date_naive();
            let posted = post_birthday_greetings(&db, &http, channel_id, today).await;
            tracing::info!("Posted {} birthday greetings for {}", posted, today);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Birthday scheduler started");

    Ok(())
}

/// Posts one greeting per birthday falling on `today`.
///
/// A failed post is logged and the remaining greetings are still sent.
///
/// # Returns
/// - Number of greetings posted successfully
pub async fn post_birthday_greetings(
    db: &DatabaseConnection,
    discord_http: &Http,
    channel_id: ChannelId,
    today: NaiveDate,
) -> usize {
    let mut posted = 0;

    for birthday in todays_birthdays(db, today).await {
        let message = CreateMessage::new().content(birthday_greeting(&birthday.user_id));

        match channel_id.send_message(discord_http, message).await {
            Ok(_) => posted += 1,
            Err(e) => tracing::error!(
                "Failed to post birthday greeting for {}: {}",
                birthday.user_id,
                e
            ),
        }
    }

    posted
}

/// Birthdays on `today`, treating a failed lookup as none.
async fn todays_birthdays(db: &DatabaseConnection, today: NaiveDate) -> Vec<Birthday> {
    match BirthdayService::new(db).get_by_date(today).await {
        Ok(birthdays) => birthdays,
        Err(e) => {
            tracing::error!("Failed to fetch birthdays for {}: {}", today, e);
            Vec::new()
        }
    }
}
