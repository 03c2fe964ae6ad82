//! Twitch live-notification poller.
//!
//! A single task probes Helix once a minute and posts one notification per live session.
//! The notifier holds the only mutable state of the poller: the cached app access token
//! and whether the current session has already been announced.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{watch, Notify},
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

use crate::{
    config::TwitchConfig,
    error::{twitch::TwitchError, AppError},
    model::notice::LiveNotice,
    service::{
        discord::DiscordApi,
        twitch::{LiveStatusSource, Stream, TwitchClient},
    },
    startup,
};

pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveState {
    #[default]
    NotLive,
    LiveNotified,
}

/// What a single tick did, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Token or probe failed; state unchanged.
    Skipped,
    Notified,
    /// Stream is live but the announcement could not be posted; retried next tick.
    NotificationFailed,
    StillLive,
    /// Stream ended; silent reset.
    Reset,
    Idle,
}

pub struct LiveNotifier {
    credential: Option<String>,
    state: LiveState,
    channel_id: u64,
    username: String,
}

impl LiveNotifier {
    pub fn new(channel_id: u64, username: impl Into<String>) -> Self {
        Self {
            credential: None,
            state: LiveState::NotLive,
            channel_id,
            username: username.into(),
        }
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    /// Probes the live status once and applies the state transition.
    ///
    /// Errors never escape: a failed probe is logged and the state is left untouched.
    pub async fn tick(
        &mut self,
        source: &dyn LiveStatusSource,
        api: &dyn DiscordApi,
    ) -> TickOutcome {
        let stream = match self.probe(source).await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!("Failed to check Twitch status for {}: {:?}", self.username, e);
                return TickOutcome::Skipped;
            }
        };

        match (self.state, stream) {
            (LiveState::NotLive, Some(stream)) => self.announce(api, stream).await,
            (LiveState::LiveNotified, Some(_)) => TickOutcome::StillLive,
            (LiveState::LiveNotified, None) => {
                tracing::info!("{} is no longer live", self.username);
                self.state = LiveState::NotLive;
                TickOutcome::Reset
            }
            (LiveState::NotLive, None) => TickOutcome::Idle,
        }
    }

    async fn announce(&mut self, api: &dyn DiscordApi, stream: Stream) -> TickOutcome {
        let notice = LiveNotice {
            username: stream.user_login,
            title: stream.title,
            category: stream.game_name,
        };

        match api.send_live_notification(self.channel_id, &notice).await {
            Ok(()) => {
                tracing::info!("Announced live stream of {}", notice.username);
                self.state = LiveState::LiveNotified;
                TickOutcome::Notified
            }
            Err(e) => {
                tracing::error!(
                    "Failed to post live notification to channel {}: {:?}",
                    self.channel_id,
                    e
                );
                TickOutcome::NotificationFailed
            }
        }
    }

    /// Fetches the live stream, re-acquiring the token once if it was rejected.
    async fn probe(&mut self, source: &dyn LiveStatusSource) -> Result<Option<Stream>, AppError> {
        let token = self.access_token(source).await?;

        match source.fetch_live_stream(&token).await {
            Err(AppError::TwitchErr(TwitchError::Unauthorized)) => {
                tracing::info!("Twitch access token rejected, requesting a new one");
                self.credential = None;
                let token = self.access_token(source).await?;
                source.fetch_live_stream(&token).await
            }
            result => result,
        }
    }

    async fn access_token(&mut self, source: &dyn LiveStatusSource) -> Result<String, AppError> {
        if let Some(token) = &self.credential {
            return Ok(token.clone());
        }

        let token = source.fetch_access_token().await?;
        self.credential = Some(token.clone());

        Ok(token)
    }
}

/// Runs the poller until `shutdown` changes or its sender is dropped.
///
/// Waits for `ready` before the first probe. Shutdown is only observed between ticks,
/// so an in-flight probe always completes.
pub async fn run(
    mut notifier: LiveNotifier,
    source: Arc<dyn LiveStatusSource>,
    api: Arc<dyn DiscordApi>,
    ready: Arc<Notify>,
    mut shutdown: watch::Receiver<bool>,
) {
    tokio::select! {
        _ = ready.notified() => {}
        _ = shutdown.changed() => return,
    }

    tracing::info!("Twitch live poller started for {}", notifier.username);

    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {}
        }

        let outcome = notifier.tick(source.as_ref(), api.as_ref()).await;
        tracing::debug!("Twitch poll tick: {:?}", outcome);
    }

    tracing::info!("Twitch live poller stopped");
}

/// Builds the Twitch client and spawns the poller task.
///
/// # Returns
/// - `Ok(JoinHandle)` - Handle awaited on shutdown
/// - `Err(AppError::InternalError)` - Invalid token endpoint URL
pub fn start_twitch_poller(
    config: &TwitchConfig,
    http_client: reqwest::Client,
    api: Arc<dyn DiscordApi>,
    ready: Arc<Notify>,
    shutdown: watch::Receiver<bool>,
) -> Result<JoinHandle<()>, AppError> {
    let oauth = startup::setup_twitch_oauth_client(config)?;
    let source: Arc<dyn LiveStatusSource> = Arc::new(TwitchClient::new(http_client, oauth, config));
    let notifier = LiveNotifier::new(config.notifications_channel_id, config.username.clone());

    Ok(tokio::spawn(run(notifier, source, api, ready, shutdown)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fake::{ApiCall, RecordingDiscordApi};
    use async_trait::async_trait;
    use std::{
        collections::VecDeque,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };

    /// Replays queued probe and token results; empty queues answer offline / "token".
    #[derive(Default)]
    struct ScriptedSource {
        tokens: Mutex<VecDeque<Result<String, AppError>>>,
        probes: Mutex<VecDeque<Result<Option<Stream>, AppError>>>,
        token_requests: AtomicUsize,
        probe_requests: AtomicUsize,
    }

    impl ScriptedSource {
        fn with_probes(probes: Vec<Result<Option<Stream>, AppError>>) -> Self {
            Self {
                probes: Mutex::new(probes.into()),
                ..Default::default()
            }
        }

        fn with_tokens(self, tokens: Vec<Result<String, AppError>>) -> Self {
            *self.tokens.lock().unwrap() = tokens.into();
            self
        }
    }

    #[async_trait]
    impl LiveStatusSource for ScriptedSource {
        async fn fetch_access_token(&self) -> Result<String, AppError> {
            self.token_requests.fetch_add(1, Ordering::SeqCst);
            self.tokens
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("token".to_string()))
        }

        async fn fetch_live_stream(&self, _access_token: &str) -> Result<Option<Stream>, AppError> {
            self.probe_requests.fetch_add(1, Ordering::SeqCst);
            self.probes.lock().unwrap().pop_front().unwrap_or(Ok(None))
        }
    }

    fn live() -> Result<Option<Stream>, AppError> {
        Ok(Some(Stream {
            user_login: "progandbot".to_string(),
            title: "Rust night".to_string(),
            game_name: "Software and Game Development".to_string(),
        }))
    }

    fn offline() -> Result<Option<Stream>, AppError> {
        Ok(None)
    }

    fn notifications(api: &RecordingDiscordApi) -> usize {
        api.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::LiveNotification { .. }))
            .count()
    }

    #[tokio::test]
    async fn notifies_once_per_live_session() {
        let source =
            ScriptedSource::with_probes(vec![offline(), live(), live(), offline(), live()]);
        let api = RecordingDiscordApi::new();
        let mut notifier = LiveNotifier::new(42, "progandbot");

        let mut outcomes = Vec::new();
        for _ in 0..5 {
            outcomes.push(notifier.tick(&source, &api).await);
        }

        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Idle,
                TickOutcome::Notified,
                TickOutcome::StillLive,
                TickOutcome::Reset,
                TickOutcome::Notified,
            ]
        );
        assert_eq!(notifications(&api), 2);
        assert_eq!(source.token_requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn live_notice_targets_configured_channel() {
        let source = ScriptedSource::with_probes(vec![live()]);
        let api = RecordingDiscordApi::new();
        let mut notifier = LiveNotifier::new(42, "progandbot");

        notifier.tick(&source, &api).await;

        assert_eq!(
            api.calls(),
            vec![ApiCall::LiveNotification {
                channel_id: 42,
                notice: LiveNotice {
                    username: "progandbot".to_string(),
                    title: "Rust night".to_string(),
                    category: "Software and Game Development".to_string(),
                },
            }]
        );
    }

    #[tokio::test]
    async fn rejected_token_is_refreshed_once_and_probe_retried() {
        let source = ScriptedSource::with_probes(vec![
            offline(),
            Err(TwitchError::Unauthorized.into()),
            live(),
        ]);
        let api = RecordingDiscordApi::new();
        let mut notifier = LiveNotifier::new(42, "progandbot");

        assert_eq!(notifier.tick(&source, &api).await, TickOutcome::Idle);
        assert_eq!(notifier.tick(&source, &api).await, TickOutcome::Notified);

        assert_eq!(source.token_requests.load(Ordering::SeqCst), 2);
        assert_eq!(source.probe_requests.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn failed_token_request_skips_tick() {
        let source = ScriptedSource::with_probes(vec![live()]).with_tokens(vec![Err(
            TwitchError::TokenRequest("invalid client".to_string()).into(),
        )]);
        let api = RecordingDiscordApi::new();
        let mut notifier = LiveNotifier::new(42, "progandbot");

        assert_eq!(notifier.tick(&source, &api).await, TickOutcome::Skipped);
        assert_eq!(notifier.state(), LiveState::NotLive);
        assert_eq!(source.probe_requests.load(Ordering::SeqCst), 0);

        // The queued live probe is still delivered on the next tick
        assert_eq!(notifier.tick(&source, &api).await, TickOutcome::Notified);
    }

    #[tokio::test]
    async fn probe_failure_keeps_state() {
        let source = ScriptedSource::with_probes(vec![
            live(),
            Err(AppError::InternalError("connection reset".to_string())),
            live(),
        ]);
        let api = RecordingDiscordApi::new();
        let mut notifier = LiveNotifier::new(42, "progandbot");

        notifier.tick(&source, &api).await;
        assert_eq!(notifier.tick(&source, &api).await, TickOutcome::Skipped);
        assert_eq!(notifier.state(), LiveState::LiveNotified);
        assert_eq!(notifier.tick(&source, &api).await, TickOutcome::StillLive);
        assert_eq!(notifications(&api), 1);
    }

    #[tokio::test]
    async fn failed_notification_is_retried_next_tick() {
        let source = ScriptedSource::with_probes(vec![live(), live()]);
        let failing = RecordingDiscordApi::new().failing_sends();
        let working = RecordingDiscordApi::new();
        let mut notifier = LiveNotifier::new(42, "progandbot");

        assert_eq!(
            notifier.tick(&source, &failing).await,
            TickOutcome::NotificationFailed
        );
        assert_eq!(notifier.state(), LiveState::NotLive);

        assert_eq!(notifier.tick(&source, &working).await, TickOutcome::Notified);
        assert_eq!(notifications(&working), 1);
    }

    #[tokio::test]
    async fn run_waits_for_ready_and_stops_on_shutdown() {
        let source = Arc::new(ScriptedSource::default());
        let api = Arc::new(RecordingDiscordApi::new());
        let ready = Arc::new(Notify::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(run(
            LiveNotifier::new(42, "progandbot"),
            source.clone(),
            api,
            ready.clone(),
            shutdown_rx,
        ));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(source.probe_requests.load(Ordering::SeqCst), 0);

        ready.notify_one();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(source.probe_requests.load(Ordering::SeqCst), 1);

        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("poller did not stop after shutdown")
            .unwrap();
    }

    #[tokio::test]
    async fn shutdown_before_ready_exits_without_probing() {
        let source = Arc::new(ScriptedSource::default());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(
            Duration::from_secs(1),
            run(
                LiveNotifier::new(42, "progandbot"),
                source.clone(),
                Arc::new(RecordingDiscordApi::new()),
                Arc::new(Notify::new()),
                shutdown_rx,
            ),
        )
        .await
        .unwrap();

        assert_eq!(source.probe_requests.load(Ordering::SeqCst), 0);
    }
}
