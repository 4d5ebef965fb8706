use sea_orm::entity::prelude::*;

/// Running engagement tally for one user inside one guild.
///
/// Keyed by the natural (`user_id`, `guild_id`) pair so that the upsert used by
/// every tracked event can target the primary key directly.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_interaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub message_count: i64,
    pub reaction_count: i64,
    #[sea_orm(column_type = "Double")]
    pub attachment_count: f64,
    /// Minutes.
    pub total_time_in_voice: i64,
    pub is_in_voice: bool,
    pub last_voice_join: Option<DateTimeUtc>,
    pub last_interaction: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
