use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBirthday::Table)
                    .if_not_exists()
                    .col(string(UserBirthday::UserId).primary_key())
                    .col(integer(UserBirthday::Day))
                    .col(integer(UserBirthday::Month))
                    .col(timestamp_with_time_zone(UserBirthday::CreatedAt))
                    .col(timestamp_with_time_zone(UserBirthday::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_birthday_month_day")
                    .table(UserBirthday::Table)
                    .col(UserBirthday::Month)
                    .col(UserBirthday::Day)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_birthday_month_day")
                    .table(UserBirthday::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserBirthday::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserBirthday {
    Table,
    UserId,
    Day,
    Month,
    CreatedAt,
    UpdatedAt,
}
