use super::Context;
use crate::error::AppError;

/// Re-registers application commands, globally or for the current guild
#[poise::command(prefix_command, owners_only, hide_in_help)]
pub async fn sync(ctx: Context<'_>) -> Result<(), AppError> {
    poise::builtins::register_application_commands_buttons(ctx).await?;

    Ok(())
}
