//! Configuration module for Warden bot.
//!
//! Loads configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,

    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,

    /// How many ban/kick actions an admin may perform inside one
    /// 24h window before being auto-demoted.
    pub admin_action_limit: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if required environment variables are not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_action_limit = env::var("ADMIN_ACTION_LIMIT")
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(10);

        Self {
            bot_token: env::var("BOT_TOKEN").expect("BOT_TOKEN must be set"),
            mongodb_uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "warden".to_string()),
            admin_action_limit,
        }
    }
}
