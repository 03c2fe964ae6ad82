//! SeaORM entity models for the bot's persistent state.

pub mod prelude;

pub mod guild_config;
pub mod user_profile;
