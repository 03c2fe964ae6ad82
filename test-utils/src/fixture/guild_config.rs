//! Guild config fixtures for creating in-memory test data.

use entity::guild_config;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "987654321";

/// Default welcome message, matching the column default.
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome %MEMBER% to the server! Enjoy your stay! If you have any questions, feel free to ask.";

/// Default polls message, matching the column default.
pub const DEFAULT_POLLS_MESSAGE: &str = "A new poll has been created! @everyone";

/// Creates a guild config entity model with default values.
///
/// # Default Values
/// - guild_id: `"987654321"`
/// - welcome_enabled: `false`
/// - welcome_channel_id / polls_channel_id: `None`
/// - language: `"en"`
pub fn entity() -> guild_config::Model {
    guild_config::Model {
        guild_id: DEFAULT_GUILD_ID.to_string(),
        welcome_enabled: false,
        welcome_channel_id: None,
        welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        polls_channel_id: None,
        polls_message: DEFAULT_POLLS_MESSAGE.to_string(),
        language: "en".to_string(),
    }
}
