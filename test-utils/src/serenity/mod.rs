//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_channel;
//!
//! let channel = create_test_channel(111, 222, "welcome", 0);
//! ```

pub mod channel;

pub use channel::{create_test_channel, CHANNEL_TYPE_TEXT, CHANNEL_TYPE_VOICE};
