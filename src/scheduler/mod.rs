//! Background tasks that run alongside the gateway connection.

pub mod twitch_live;
