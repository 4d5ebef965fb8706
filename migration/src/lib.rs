pub use sea_orm_migration::prelude::*;

mod m20241122_000001_create_user_interaction_table;
mod m20241122_000002_create_user_birthday_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241122_000001_create_user_interaction_table::Migration),
            Box::new(m20241122_000002_create_user_birthday_table::Migration),
        ]
    }
}
