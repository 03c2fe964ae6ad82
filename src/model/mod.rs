//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary, so
//! services and commands work with parsed snowflakes and typed enums instead of raw rows.

pub mod guild_config;
pub mod notice;
pub mod reply;
pub mod user_profile;
