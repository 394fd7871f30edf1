//! Welcome settings repository.

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::Collection;
use tracing::debug;

use crate::database::models::WelcomeSettings;
use crate::database::Database;

/// Repository for per-chat welcome configuration.
pub struct WelcomeRepository {
    collection: Collection<WelcomeSettings>,
}

impl WelcomeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("welcome"),
        }
    }

    /// Get welcome settings, returning None if never configured.
    pub async fn get(&self, chat_id: i64) -> Result<Option<WelcomeSettings>> {
        let filter = doc! { "chat_id": chat_id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// Whether welcome messages are enabled. Absent records default to ON.
    pub async fn get_status(&self, chat_id: i64) -> Result<bool> {
        Ok(self.get(chat_id).await?.map(|s| s.enabled).unwrap_or(true))
    }

    /// The custom welcome template, if one was set.
    pub async fn get_message(&self, chat_id: i64) -> Result<Option<String>> {
        Ok(self.get(chat_id).await?.and_then(|s| s.message))
    }

    /// Enable or disable welcome messages (single-field upsert).
    pub async fn set_status(&self, chat_id: i64, enabled: bool) -> Result<()> {
        self.upsert_field(chat_id, doc! { "enabled": enabled }).await?;
        debug!("Set welcome enabled={} for chat {}", enabled, chat_id);
        Ok(())
    }

    /// Store a custom welcome template (single-field upsert).
    pub async fn set_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.upsert_field(chat_id, doc! { "message": text }).await?;
        debug!("Set welcome message for chat {}", chat_id);
        Ok(())
    }

    /// Drop all welcome config for a chat (bulk chat cleanup).
    pub async fn clear_chat(&self, chat_id: i64) -> Result<()> {
        self.collection.delete_one(doc! { "chat_id": chat_id }).await?;
        Ok(())
    }

    async fn upsert_field(&self, chat_id: i64, fields: mongodb::bson::Document) -> Result<()> {
        let filter = doc! { "chat_id": chat_id };
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(filter, doc! { "$set": fields })
            .with_options(options)
            .await?;

        Ok(())
    }
}
