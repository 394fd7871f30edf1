//! Warden - Telegram group moderation bot.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - MongoDB integration (settings, warns, admin actions, users)
//! - `permissions` - Live admin/owner checks against the Telegram API
//! - `bot` - Dispatcher wiring (with Throttle for API rate limiting)
//! - `plugins` - Command handlers
//! - `events` - Event handlers (welcome, lock enforcement, anti-abuse)
//! - `utils` - Utility functions

mod bot;
mod config;
mod database;
mod error;
mod events;
mod permissions;
mod plugins;
mod utils;

use std::sync::Arc;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use database::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warden=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting Warden bot...");

    let config = Config::from_env();
    info!("Configuration loaded successfully");

    // An unreachable store at startup is fatal; everything downstream needs it.
    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    let db = Arc::new(db);
    info!("Database connected");

    // Throttle respects Telegram's rate limits:
    // - 30 messages per second globally
    // - 1 message per second to the same chat
    // - 20 messages per minute to the same group
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    info!(
        "Admin action limit: {} per {}h window",
        config.admin_action_limit,
        database::ACTION_WINDOW_SECS / 3600
    );

    let mut dispatcher = bot::build_dispatcher(bot, db, config.admin_action_limit);

    info!("Starting bot in polling mode...");
    dispatcher.dispatch().await;

    Ok(())
}
