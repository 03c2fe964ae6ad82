mod bot;
mod config;
mod data;
mod error;
mod i18n;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tokio::sync::{watch, Notify};

use crate::{
    config::Config, error::AppError, i18n::Translator, scheduler::twitch_live,
    service::discord::SerenityDiscordApi,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::setup_tracing(&config.log_level);

    let db = startup::connect_to_database(&config).await?;
    let translator = Arc::new(Translator::load(&config.locales_dir));
    let ready = Arc::new(Notify::new());

    tracing::info!("Starting bot");

    let mut client = bot::start::init_bot(&config, db, translator, ready.clone()).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = match &config.twitch {
        Some(twitch) => {
            let http_client = startup::setup_reqwest_client()?;
            let api = Arc::new(SerenityDiscordApi::new(client.http.clone()));
            Some(twitch_live::start_twitch_poller(
                twitch,
                http_client,
                api,
                ready,
                shutdown_rx,
            )?)
        }
        None => {
            tracing::info!("Twitch notifications disabled");
            None
        }
    };

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {:?}", e);
            return;
        }

        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    let result = client.start().await;

    // Poller may already be gone when Twitch is disabled
    let _ = shutdown_tx.send(true);
    if let Some(poller) = poller {
        if let Err(e) = poller.await {
            tracing::error!("Twitch poller task failed: {:?}", e);
        }
    }

    result?;

    Ok(())
}
