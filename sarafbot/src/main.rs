use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::client::Notifier;
use crate::service::monitor::{self, Monitor, SystemClock};
use crate::service::rate::sarafi;

mod api;
mod client;
mod db;
mod error;
mod service;

const STARTUP_MESSAGE: &str = "✅ تست ارسال مستقیم موفق بود";

#[derive(Deserialize, Debug)]
struct Config {
    bot_token: String,
    channel_username: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_state_file")]
    state_file: String,
    #[serde(default = "default_rates_url")]
    rates_url: String,
    #[serde(default = "default_poll_interval_secs")]
    poll_interval_secs: u64,
    #[serde(default = "default_startup_ping")]
    startup_ping: bool,
}

fn default_port() -> u16 {
    5000
}

fn default_state_file() -> String {
    db::json::DEFAULT_PATH.into()
}

fn default_rates_url() -> String {
    sarafi::DEFAULT_URL.into()
}

fn default_poll_interval_secs() -> u64 {
    monitor::DEFAULT_INTERVAL.as_secs()
}

fn default_startup_ping() -> bool {
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = dotenv {
        debug!("no .env file loaded: {err}");
    }

    let cfg = envy::from_env::<Config>().context("unable to parse env variables")?;

    let telegram = client::telegram::Client::new(&cfg.bot_token, &cfg.channel_username);
    if cfg.startup_ping {
        match telegram.notify(STARTUP_MESSAGE).await {
            Ok(()) => info!("startup message sent to {}", cfg.channel_username),
            Err(err) => warn!("startup message failed: {err}"),
        }
    }

    let monitor = Monitor::new(
        sarafi::Provider::new(cfg.rates_url),
        db::json::Client::new(&cfg.state_file),
        telegram,
        SystemClock::new(chrono_tz::Asia::Kabul),
    );
    tokio::spawn(monitor.run(Duration::from_secs(cfg.poll_interval_secs)));

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    info!("starting web server on address={}...", addr);
    api::server::run(addr).await.context("unable to serve liveness endpoint")?;
    info!("web server has been closed...");

    Ok(())
}
