//! Discord gateway integration.
//!
//! Slash and prefix commands run through a poise framework; raw gateway events (ready,
//! guild availability, member joins, messages) go through a serenity `EventHandler`.
//! Both share the same database connection pool.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability for configuration bootstrap
//! - `GUILD_MEMBERS` - Member joins for welcome messages (privileged intent)
//! - `GUILD_MESSAGES` - Message counting and prefix commands
//! - `MESSAGE_CONTENT` - Prefix command parsing (privileged intent)
//!
//! Privileged intents must be enabled in the Discord Developer Portal.

pub mod command;
pub mod framework;
pub mod handler;
pub mod start;
