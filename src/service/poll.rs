//! Native Discord polls posted to the guild's configured polls channel.

use sea_orm::DatabaseConnection;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::{
        notice::{PollDraft, POLL_ANSWER_EMOJIS},
        reply::CommandReply,
    },
    service::discord::DiscordApi,
};

pub const MIN_POLL_ANSWERS: usize = 2;
pub const MAX_POLL_ANSWERS: usize = POLL_ANSWER_EMOJIS.len();

/// Longest poll Discord accepts, 32 days.
pub const MAX_POLL_DURATION_HOURS: i64 = 768;

/// Raw `/poll` options as entered by the user.
#[derive(Debug, Clone)]
pub struct PollRequest {
    pub question: String,
    /// Answer slots in option order; empty or missing slots are ignored.
    pub answers: Vec<Option<String>>,
    pub duration_hours: i64,
    pub allow_multiple: bool,
}

impl PollRequest {
    /// Validates the request without touching the database or Discord.
    ///
    /// Non-empty answers keep their relative order and are labelled with keycap emojis.
    pub fn into_draft(self) -> Result<PollDraft, AppError> {
        let question = self.question.trim().to_string();
        if question.is_empty() {
            return Err(AppError::Validation(
                "You must provide a question for the poll.".to_string(),
            ));
        }

        let answers: Vec<String> = self
            .answers
            .into_iter()
            .flatten()
            .map(|answer| answer.trim().to_string())
            .filter(|answer| !answer.is_empty())
            .collect();

        if !(MIN_POLL_ANSWERS..=MAX_POLL_ANSWERS).contains(&answers.len()) {
            return Err(AppError::Validation(format!(
                "You must provide at least two answer options and at most {MAX_POLL_ANSWERS} options!"
            )));
        }

        let duration_hours = u16::try_from(self.duration_hours)
            .ok()
            .filter(|hours| (1..=MAX_POLL_DURATION_HOURS).contains(&i64::from(*hours)))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "The poll duration must be between 1 and {MAX_POLL_DURATION_HOURS} hours."
                ))
            })?;

        Ok(PollDraft {
            question,
            answers: POLL_ANSWER_EMOJIS
                .iter()
                .zip(answers)
                .map(|(emoji, text)| (emoji.to_string(), text))
                .collect(),
            duration_hours,
            allow_multiple: self.allow_multiple,
        })
    }
}

pub struct PollService<'a> {
    db: &'a DatabaseConnection,
    api: &'a dyn DiscordApi,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection, api: &'a dyn DiscordApi) -> Self {
        Self { db, api }
    }

    /// Posts a poll to the guild's polls channel.
    ///
    /// The request is validated first, then the guild's polls channel is resolved. The
    /// configured polls message is sent as the content alongside the poll.
    ///
    /// # Returns
    /// - `Ok(CommandReply)` - Ephemeral confirmation, or the permission failure
    /// - `Err(AppError::Validation)` - Invalid question, answers, or duration
    /// - `Err(AppError::NotFound)` - Guild config or polls channel missing
    pub async fn create(
        &self,
        guild_id: u64,
        request: PollRequest,
    ) -> Result<CommandReply, AppError> {
        let draft = request.into_draft()?;

        let config = GuildConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "Guild configuration not found. Please set up the bot first.".to_string(),
                )
            })?;

        let channel_id = config.polls_channel_id.ok_or_else(|| {
            AppError::NotFound("Polls channel is not set. Please configure it first.".to_string())
        })?;

        if !self.api.text_channel_exists(guild_id, channel_id).await? {
            return Err(AppError::NotFound(
                "Polls channel is invalid or not found.".to_string(),
            ));
        }

        match self
            .api
            .create_poll(channel_id, &config.polls_message, &draft)
            .await
        {
            Ok(()) => {
                tracing::info!("Created poll in channel {} of guild {}", channel_id, guild_id);
                Ok(CommandReply::private(format!(
                    "Poll created successfully in <#{channel_id}>!"
                )))
            }
            Err(AppError::Forbidden) => Ok(CommandReply::failure(
                "I do not have permission to create polls in the polls channel.",
            )),
            Err(e) => Err(e),
        }
    }
}
