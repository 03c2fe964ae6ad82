use super::{discord_api, require_guild, send_reply, Context};
use crate::{
    error::AppError,
    service::poll::{PollRequest, PollService},
};

/// Create a poll in the configured polls channel
#[poise::command(slash_command, guild_only, default_member_permissions = "MANAGE_MESSAGES")]
pub async fn poll(
    ctx: Context<'_>,
    #[description = "Poll question"] question: String,
    #[description = "Answer 1"] answer_1: String,
    #[description = "Answer 2"] answer_2: String,
    #[description = "Answer 3"] answer_3: Option<String>,
    #[description = "Answer 4"] answer_4: Option<String>,
    #[description = "Answer 5"] answer_5: Option<String>,
    #[description = "Answer 6"] answer_6: Option<String>,
    #[description = "Answer 7"] answer_7: Option<String>,
    #[description = "Answer 8"] answer_8: Option<String>,
    #[description = "Answer 9"] answer_9: Option<String>,
    #[description = "Answer 10"] answer_10: Option<String>,
    #[description = "Poll duration in hours (1-768, default 24)"] duration_hours: Option<i64>,
    #[description = "Allow selecting multiple answers"] allow_multiple: Option<bool>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let api = discord_api(ctx);

    let request = PollRequest {
        question,
        answers: vec![
            Some(answer_1),
            Some(answer_2),
            answer_3,
            answer_4,
            answer_5,
            answer_6,
            answer_7,
            answer_8,
            answer_9,
            answer_10,
        ],
        duration_hours: duration_hours.unwrap_or(24),
        allow_multiple: allow_multiple.unwrap_or(false),
    };

    let reply = PollService::new(&ctx.data().db, &api)
        .create(guild_id, request)
        .await?;

    send_reply(ctx, reply).await
}
