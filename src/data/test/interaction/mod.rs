use crate::{
    data::interaction::InteractionRepository,
    model::interaction::{InteractionKey, UserInteraction},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user_interaction::UserInteractionFactory};

mod find;
mod record_counters;
mod record_voice;
