//! Setup for the poise command framework.

use sea_orm::DatabaseConnection;
use serenity::all::{Context as SerenityContext, Ready};
use std::sync::Arc;

use crate::{
    bot::command::{self, Data},
    error::AppError,
    i18n::Translator,
};

/// Only this framework type is used.
pub type Framework = poise::Framework<Data, AppError>;

/// Builds the framework with every command registered globally at startup.
pub fn framework(command_prefix: String, db: DatabaseConnection, translator: Arc<Translator>) -> Framework {
    poise::Framework::builder()
        .options(framework_options(command_prefix))
        .setup(move |ctx, ready, fw| framework_setup(ctx, ready, fw, db, translator))
        .build()
}

fn framework_options(command_prefix: String) -> poise::FrameworkOptions<Data, AppError> {
    poise::FrameworkOptions {
        commands: command::list(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(command_prefix),
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        pre_command: |ctx| {
            Box::pin(async move {
                tracing::info!(
                    "Started '{}' command from {}",
                    ctx.command().qualified_name,
                    ctx.author().id
                );
            })
        },
        post_command: |ctx| {
            Box::pin(async move {
                tracing::debug!(
                    "Finished '{}' command from {}",
                    ctx.command().qualified_name,
                    ctx.author().id
                );
            })
        },
        ..Default::default()
    }
}

fn framework_setup<'a>(
    ctx: &'a SerenityContext,
    ready: &'a Ready,
    fw: &'a Framework,
    db: DatabaseConnection,
    translator: Arc<Translator>,
) -> poise::BoxFuture<'a, Result<Data, AppError>> {
    Box::pin(async move {
        poise::builtins::register_globally(ctx, &fw.options().commands).await?;

        tracing::info!(
            "Registered {} commands for {}",
            fw.options().commands.len(),
            ready.user.name
        );

        Ok(Data { db, translator })
    })
}

/// Replies once to the invoking user for command errors and logs everything else.
async fn on_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::warn!(
                "Command '{}' failed for {}: {}",
                ctx.command().qualified_name,
                ctx.author().id,
                error
            );

            let reply = poise::CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);

            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to send error reply: {:?}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling framework error: {:?}", e);
            }
        }
    }
}
