//! Outbound Discord notices described independently of the gateway client.
//!
//! Services build these plain values and hand them to a `DiscordApi` implementation,
//! which turns them into embeds or native polls.

/// Keycap emojis used to label poll answers, in order.
pub const POLL_ANSWER_EMOJIS: [&str; 10] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Kick,
    Ban,
    Warn,
}

impl ModerationAction {
    /// Lowercase verb used in replies ("kick", "ban", "warn").
    pub fn verb(self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Warn => "warn",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Kick => "Moderation: Member Kicked",
            Self::Ban => "Moderation: Member Banned",
            Self::Warn => "Moderation: Member Warned",
        }
    }

    /// Embed description for the target mention.
    pub fn description(self, target_mention: &str) -> String {
        match self {
            Self::Kick => format!("{target_mention} has been kicked from the server."),
            Self::Ban => format!("{target_mention} has been banned from the server."),
            Self::Warn => format!("{target_mention} has been warned."),
        }
    }

    /// Embed field naming the moderator.
    pub fn moderator_field(self) -> &'static str {
        match self {
            Self::Kick => "Kicked By",
            Self::Ban => "Banned By",
            Self::Warn => "Warned By",
        }
    }

    pub fn image_url(self) -> Option<&'static str> {
        match self {
            Self::Kick => None,
            Self::Ban => Some("https://i2.kym-cdn.com/photos/images/masonry/000/791/407/40c.gif"),
            Self::Warn => Some("https://media.tenor.com/sLgNruA4tsgAAAAM/warning-lights.gif"),
        }
    }
}

/// Moderation embed posted in the invoking channel after an action succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationNotice {
    pub action: ModerationAction,
    pub target_mention: String,
    pub target_avatar_url: String,
    pub moderator_mention: String,
    pub moderator_avatar_url: String,
    pub reason: String,
}

/// Live stream announcement for the notifications channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveNotice {
    pub username: String,
    pub title: String,
    pub category: String,
}

impl LiveNotice {
    pub fn stream_url(&self) -> String {
        format!("https://www.twitch.tv/{}", self.username)
    }
}

/// A validated native poll ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollDraft {
    pub question: String,
    /// `(emoji, text)` pairs, 2 to 10 entries.
    pub answers: Vec<(String, String)>,
    pub duration_hours: u16,
    pub allow_multiple: bool,
}
