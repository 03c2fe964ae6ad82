//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of entity conversions and as default values for factories.

pub mod guild_config;

pub use guild_config::entity as guild_config_entity;
