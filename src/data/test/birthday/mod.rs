use crate::{data::birthday::BirthdayRepository, model::birthday::UpsertBirthdayParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{create_birthday, user_birthday::UserBirthdayFactory},
};

mod find;
mod upsert;
