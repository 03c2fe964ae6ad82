pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_guild_config_table;
mod m20250601_000002_create_user_profile_table;
mod m20250715_000003_add_language_to_guild_config;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_guild_config_table::Migration),
            Box::new(m20250601_000002_create_user_profile_table::Migration),
            Box::new(m20250715_000003_add_language_to_guild_config::Migration),
        ]
    }
}
