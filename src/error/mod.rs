//! Error types and user-facing error messages.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Command handlers never show
//! raw errors to members; instead `AppError::user_message()` maps each variant onto the
//! text sent back in the single ephemeral reply.

pub mod config;
pub mod twitch;

use thiserror::Error;

use crate::error::{config::ConfigError, twitch::TwitchError};

/// Generic reply for errors that carry no user-facing detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Reply used when Discord rejects an action for lack of permissions.
pub const FORBIDDEN_MESSAGE: &str = "I do not have permission to perform this action.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. Only startup-time configuration errors
/// are fatal; everything else is caught at the handler boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Twitch API or token exchange error.
    #[error(transparent)]
    TwitchErr(#[from] TwitchError),

    /// Invalid user input.
    ///
    /// # Fields
    /// - Message describing what was invalid, shown to the user verbatim
    #[error("{0}")]
    Validation(String),

    /// Discord refused the action because the bot lacks permissions.
    #[error("Missing permissions for the requested Discord action")]
    Forbidden,

    /// Resource not found or feature not configured.
    ///
    /// # Fields
    /// - Guidance message shown to the user verbatim
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    ///
    /// The message is logged but a generic message is returned to the user.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// HTTP 403 responses and cached permission checks become `AppError::Forbidden`;
/// every other error is boxed to keep the enum small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        if is_forbidden(&err) {
            return AppError::Forbidden;
        }

        AppError::DiscordErr(Box::new(err))
    }
}

fn is_forbidden(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 403
        }
        serenity::Error::Model(serenity::model::ModelError::InvalidPermissions { .. }) => true,
        _ => false,
    }
}

impl AppError {
    /// Converts the error into the text shown to the invoking user.
    ///
    /// Validation and not-found messages are passed through, permission failures map to
    /// the insufficient-permission text, and anything else is logged and replaced by a
    /// generic message so internal details never reach Discord.
    ///
    /// # Returns
    /// - `String` - Message suitable for an ephemeral reply
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Forbidden => FORBIDDEN_MESSAGE.to_string(),
            err => {
                tracing::error!("Unhandled error in command: {:?}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_passed_through() {
        let err = AppError::Validation("You must specify non-empty message.".to_string());

        assert_eq!(err.user_message(), "You must specify non-empty message.");
    }

    #[test]
    fn forbidden_maps_to_permission_text() {
        assert_eq!(AppError::Forbidden.user_message(), FORBIDDEN_MESSAGE);
    }

    #[test]
    fn internal_error_is_hidden() {
        let err = AppError::InternalError("connection reset".to_string());

        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn serenity_permission_error_becomes_forbidden() {
        let err = serenity::Error::Model(serenity::model::ModelError::InvalidPermissions {
            required: serenity::all::Permissions::KICK_MEMBERS,
            present: serenity::all::Permissions::empty(),
        });

        assert!(matches!(AppError::from(err), AppError::Forbidden));
    }
}
