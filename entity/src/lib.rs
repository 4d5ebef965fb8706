//! SeaORM entity definitions for the bot's persisted state.

pub mod prelude;

pub mod user_birthday;
pub mod user_interaction;
