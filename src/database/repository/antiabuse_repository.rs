//! Anti-abuse toggle repository.

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::Collection;
use tracing::debug;

use crate::database::models::AntiAbuseSettings;
use crate::database::Database;

/// Repository for the per-chat anti-abuse toggle.
pub struct AntiAbuseRepository {
    collection: Collection<AntiAbuseSettings>,
}

impl AntiAbuseRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("antiabuse"),
        }
    }

    /// Whether anti-abuse protection is on. Absent records default to OFF.
    pub async fn get_enabled(&self, chat_id: i64) -> Result<bool> {
        let filter = doc! { "chat_id": chat_id };
        let settings = self.collection.find_one(filter).await?;
        Ok(settings.map(|s| s.enabled).unwrap_or(false))
    }

    /// Toggle anti-abuse protection (single-field upsert).
    pub async fn set_enabled(&self, chat_id: i64, enabled: bool) -> Result<()> {
        let filter = doc! { "chat_id": chat_id };
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(filter, doc! { "$set": { "enabled": enabled } })
            .with_options(options)
            .await?;

        debug!("Set antiabuse enabled={} for chat {}", enabled, chat_id);
        Ok(())
    }

    /// Drop the toggle for a chat (bulk chat cleanup).
    pub async fn clear_chat(&self, chat_id: i64) -> Result<()> {
        self.collection.delete_one(doc! { "chat_id": chat_id }).await?;
        Ok(())
    }
}
