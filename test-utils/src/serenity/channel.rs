//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Discord channel type code for a guild text channel.
pub const CHANNEL_TYPE_TEXT: u8 = 0;

/// Discord channel type code for a guild voice channel.
pub const CHANNEL_TYPE_VOICE: u8 = 2;

/// Creates a test Serenity GuildChannel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `kind` - Discord channel type code (see `CHANNEL_TYPE_*`)
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(channel_id: u64, guild_id: u64, name: &str, kind: u8) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": kind,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
