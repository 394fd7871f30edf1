//! Tracked user model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use teloxide::types::User;

/// A user seen by the bot, stored in the `users` collection.
///
/// Backs @username/id target resolution for moderation commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedUser {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram user ID (indexed)
    pub user_id: i64,

    pub first_name: String,

    /// Username without @, lowercased for case-insensitive lookup
    #[serde(default)]
    pub username: Option<String>,
}

impl TrackedUser {
    /// Build from a Telegram user.
    pub fn from_telegram(user: &User) -> Self {
        Self {
            id: None,
            user_id: user.id.0 as i64,
            first_name: user.first_name.clone(),
            username: user.username.as_ref().map(|u| u.to_lowercase()),
        }
    }
}
