//! Welcome configuration model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Welcome configuration stored in the `welcome` collection.
///
/// Absent documents mean "enabled with the default template"; records are
/// created lazily on first write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeSettings {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (indexed)
    pub chat_id: i64,

    /// Whether welcome messages are enabled (default on)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Custom welcome message template, `None` = built-in default
    #[serde(default)]
    pub message: Option<String>,
}

fn default_enabled() -> bool {
    true
}
