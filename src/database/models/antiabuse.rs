//! Anti-abuse toggle model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Per-chat anti-abuse toggle, stored in the `antiabuse` collection.
/// Default off; the group owner opts in with /anticheater on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntiAbuseSettings {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (indexed)
    pub chat_id: i64,

    #[serde(default)]
    pub enabled: bool,
}
