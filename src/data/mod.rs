//! Database repository layer.
//!
//! Repositories wrap the SeaORM entities and return domain models from `crate::model`,
//! parsing stored snowflakes at the boundary. Every write is a single upsert statement
//! (or one short transaction) so concurrent handlers never lose updates to each other.

pub mod guild_config;
pub mod user_profile;

#[cfg(test)]
mod test;
