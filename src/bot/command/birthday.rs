//! Birthday slash commands.
//!
//! `/register_birthdate` stores the caller's birthday and `/get_birthdays` lists the
//! birthdays registered for a month.

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::command::{integer_option, reply_ephemeral},
    error::AppError,
    model::birthday::{Birthday, UpsertBirthdayParam},
    service::birthday::{format_birthday_line, month_name, BirthdayService},
};

pub const REGISTER_NAME: &str = "register_birthdate";
pub const LIST_NAME: &str = "get_birthdays";

const DAY_OPTION: &str = "day";
const MONTH_OPTION: &str = "month";
const BIRTHDAY_COLOR: u32 = 0x3498db;

pub fn register_birthdate() -> CreateCommand {
    CreateCommand::new(REGISTER_NAME)
        .description("Registers your birthday")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, DAY_OPTION, "Day of your birthday")
                .min_int_value(1)
                .max_int_value(31)
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                MONTH_OPTION,
                "Month of your birthday as a number, e.g. January = 1",
            )
            .min_int_value(1)
            .max_int_value(12)
            .required(true),
        )
}

pub fn register_get_birthdays() -> CreateCommand {
    CreateCommand::new(LIST_NAME)
        .description("Lists the birthdays registered for a month")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                MONTH_OPTION,
                "Month as a number, defaults to the current month",
            )
            .min_int_value(1)
            .max_int_value(12)
            .required(false),
        )
}

pub async fn run_register_birthdate(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let (Some(day), Some(month)) = (
        integer_option(&options, DAY_OPTION),
        integer_option(&options, MONTH_OPTION),
    ) else {
        return Err(AppError::BadRequest(
            "Please provide both a day and a month".to_string(),
        ));
    };

    let birthday = BirthdayService::new(db)
        .register(UpsertBirthdayParam {
            user_id: command.user.id.to_string(),
            day: option_to_i32(day)?,
            month: option_to_i32(month)?,
        })
        .await?;

    tracing::debug!(
        "Registered birthday {:02}/{:02} for {}",
        birthday.day,
        birthday.month,
        birthday.user_id
    );

    reply_ephemeral(ctx, command, "Birthday registered successfully! 🎂").await
}

pub async fn run_get_birthdays(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let month = match integer_option(&options, MONTH_OPTION) {
        Some(month) => option_to_i32(month)?,
        None => Utc::now().month() as i32,
    };

    let birthdays = BirthdayService::new(db).get_by_month(month).await?;

    let message = match build_birthdays_embed(month, &birthdays) {
        Some(embed) => CreateInteractionResponseMessage::new().embed(embed),
        None => CreateInteractionResponseMessage::new().content(format!(
            "No birthdays found for {} /(ㄒoㄒ)/~~",
            month_name(month).unwrap_or("this month")
        )),
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Builds the monthly birthday overview, or `None` when the month has no birthdays.
pub fn build_birthdays_embed(month: i32, birthdays: &[Birthday]) -> Option<CreateEmbed> {
    if birthdays.is_empty() {
        return None;
    }

    let lines: Vec<String> = birthdays.iter().map(format_birthday_line).collect();

    Some(
        CreateEmbed::new()
            .title(format!(
                "🎈🎊🎁 Birthdays in {} 🎈🎊🎁",
                month_name(month).unwrap_or("this month")
            ))
            .description(lines.join("\n"))
            .color(BIRTHDAY_COLOR),
    )
}

fn option_to_i32(value: i64) -> Result<i32, AppError> {
    i32::try_from(value)
        .map_err(|_| AppError::BadRequest(format!("{} is not a valid date component", value)))
}
