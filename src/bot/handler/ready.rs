//! Ready event handler.
//!
//! The `ready` event fires after the gateway handshake completes, including after a
//! reconnect that could not resume the previous session.

use serenity::all::{Context, Ready};
use tokio::sync::Notify;

/// Logs the session and releases tasks waiting for the gateway.
///
/// # Arguments
/// - `gate` - Notified once per ready event; the live poller waits on it before its first tick
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(gate: &Notify, _ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    gate.notify_one();
}
