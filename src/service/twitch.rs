//! Twitch Helix client used by the live-notification poller.
//!
//! Only two calls are needed: an app access token via the client-credentials grant and a
//! `GET /helix/streams` probe for the configured broadcaster.

use async_trait::async_trait;
use oauth2::{basic::BasicClient, EndpointNotSet, EndpointSet, TokenResponse};
use serde::Deserialize;

use crate::{
    config::TwitchConfig,
    error::{twitch::TwitchError, AppError},
};

pub const TWITCH_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
pub const TWITCH_STREAMS_URL: &str = "https://api.twitch.tv/helix/streams";

/// OAuth2 client for Twitch app access tokens; only the token endpoint is configured.
pub(crate) type TwitchOAuthClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// A live stream as reported by Helix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stream {
    pub user_login: String,
    pub title: String,
    pub game_name: String,
}

#[derive(Debug, Deserialize)]
struct StreamsResponse {
    data: Vec<Stream>,
}

/// Source of live status for a single broadcaster.
///
/// Implementations return `TwitchError::Unauthorized` when the access token has been
/// rejected so the caller can re-acquire it.
#[async_trait]
pub trait LiveStatusSource: Send + Sync {
    async fn fetch_access_token(&self) -> Result<String, AppError>;

    /// Returns the broadcaster's current stream, or `None` when offline.
    async fn fetch_live_stream(&self, access_token: &str) -> Result<Option<Stream>, AppError>;
}

pub struct TwitchClient {
    http: reqwest::Client,
    oauth: TwitchOAuthClient,
    client_id: String,
    username: String,
}

impl TwitchClient {
    pub fn new(http: reqwest::Client, oauth: TwitchOAuthClient, config: &TwitchConfig) -> Self {
        Self {
            http,
            oauth,
            client_id: config.client_id.clone(),
            username: config.username.clone(),
        }
    }
}

#[async_trait]
impl LiveStatusSource for TwitchClient {
    async fn fetch_access_token(&self) -> Result<String, AppError> {
        let token = self
            .oauth
            .exchange_client_credentials()
            .request_async(&self.http)
            .await
            .map_err(|e| TwitchError::TokenRequest(e.to_string()))?;

        Ok(token.access_token().secret().to_string())
    }

    async fn fetch_live_stream(&self, access_token: &str) -> Result<Option<Stream>, AppError> {
        let response = self
            .http
            .get(TWITCH_STREAMS_URL)
            .query(&[
                ("user_login", self.username.as_str()),
                ("first", "1"),
                ("type", "live"),
            ])
            .header("Client-ID", &self.client_id)
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TwitchError::Unauthorized.into());
        }

        let streams = response
            .error_for_status()?
            .json::<StreamsResponse>()
            .await?;

        Ok(streams.data.into_iter().next())
    }
}
