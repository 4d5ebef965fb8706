mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{bot::start, config::Config, error::AppError, scheduler::birthday};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting bot");

    let (bot_client, discord_http) = start::init_bot(&config, db.clone()).await?;

    let scheduler_db = db.clone();
    let scheduler_http = discord_http.clone();
    let birthday_channel = config.birthday_channel_id;
    tokio::spawn(async move {
        if let Err(e) =
            birthday::start_scheduler(scheduler_db, scheduler_http, birthday_channel).await
        {
            tracing::error!("Birthday scheduler error: {}", e);
        }
    });

    let health_config = config.clone();
    let health_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = startup::serve_health(&health_config, health_db).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    let result = start::start_bot(bot_client).await;

    db.close().await?;

    result
}
