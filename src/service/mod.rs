//! Business logic between the Discord surface and the data layer.
//!
//! Services validate input, perform at most one persistence write and one outbound Discord
//! action, and return the single `CommandReply` the invoking user should see. Discord is
//! reached only through the `DiscordApi` trait so the flows can be tested without a gateway.

pub mod discord;
pub mod moderation;
pub mod poll;
pub mod settings;
pub mod twitch;
pub mod utility;
pub mod welcome;

#[cfg(test)]
pub(crate) mod fake;
