use thiserror::Error;

/// Errors raised while talking to the Twitch Helix API.
#[derive(Error, Debug)]
pub enum TwitchError {
    /// The app access token was rejected (HTTP 401) and must be re-acquired.
    #[error("Twitch rejected the access token")]
    Unauthorized,

    /// The client-credentials exchange failed.
    #[error("Failed to obtain Twitch access token: {0}")]
    TokenRequest(String),
}
