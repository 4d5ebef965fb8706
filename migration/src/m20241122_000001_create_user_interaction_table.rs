use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserInteraction::Table)
                    .if_not_exists()
                    .col(string(UserInteraction::UserId))
                    .col(string(UserInteraction::GuildId))
                    .col(big_integer(UserInteraction::MessageCount).default(0))
                    .col(big_integer(UserInteraction::ReactionCount).default(0))
                    .col(double(UserInteraction::AttachmentCount).default(0.0))
                    .col(big_integer(UserInteraction::TotalTimeInVoice).default(0))
                    .col(boolean(UserInteraction::IsInVoice).default(false))
                    .col(timestamp_with_time_zone_null(UserInteraction::LastVoiceJoin))
                    .col(timestamp_with_time_zone(UserInteraction::LastInteraction))
                    .primary_key(
                        Index::create()
                            .col(UserInteraction::UserId)
                            .col(UserInteraction::GuildId),
                    )
                    .to_owned(),
            )
            .await?;

        // Leaderboard-style lookups scan a single guild
        manager
            .create_index(
                Index::create()
                    .name("idx_user_interaction_guild_id")
                    .table(UserInteraction::Table)
                    .col(UserInteraction::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_interaction_guild_id")
                    .table(UserInteraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserInteraction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserInteraction {
    Table,
    UserId,
    GuildId,
    MessageCount,
    ReactionCount,
    AttachmentCount,
    TotalTimeInVoice,
    IsInVoice,
    LastVoiceJoin,
    LastInteraction,
}
