//! Guild configuration domain models.

use sea_orm::DbErr;

use crate::util::parse::parse_u64_from_string;

/// Placeholder in welcome messages replaced by the joining member's mention.
pub const MEMBER_PLACEHOLDER: &str = "%MEMBER%";

/// Maximum length, in characters, of welcome and polls messages.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome %MEMBER% to the server! Enjoy your stay! If you have any questions, feel free to ask.";

pub const DEFAULT_POLLS_MESSAGE: &str = "A new poll has been created! @everyone";

/// Languages the bot can reply in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Parses a language code such as `"en"`, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Comma separated list of every supported code, for error messages.
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|language| language.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Per-guild bot configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub welcome_enabled: bool,
    pub welcome_channel_id: Option<u64>,
    /// Template containing `%MEMBER%`.
    pub welcome_message: String,
    pub polls_channel_id: Option<u64>,
    pub polls_message: String,
    pub language: Language,
}

impl GuildConfig {
    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// Unknown stored language codes fall back to English.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The converted model
    /// - `Err(DbErr::Custom)` - A stored snowflake could not be parsed
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            welcome_enabled: entity.welcome_enabled,
            welcome_channel_id: entity
                .welcome_channel_id
                .as_deref()
                .map(parse_u64_from_string)
                .transpose()?,
            welcome_message: entity.welcome_message,
            polls_channel_id: entity
                .polls_channel_id
                .as_deref()
                .map(parse_u64_from_string)
                .transpose()?,
            polls_message: entity.polls_message,
            language: Language::from_code(&entity.language).unwrap_or_default(),
        })
    }

    /// Renders the welcome message for a member mention.
    pub fn render_welcome(&self, member_mention: &str) -> String {
        self.welcome_message
            .replace(MEMBER_PLACEHOLDER, member_mention)
    }
}

/// A single-field change applied by a `/settings` command.
#[derive(Debug, Clone, PartialEq)]
pub enum GuildConfigUpdate {
    WelcomeEnabled(bool),
    WelcomeChannel(u64),
    WelcomeMessage(String),
    PollsChannel(u64),
    PollsMessage(String),
    Language(Language),
}
