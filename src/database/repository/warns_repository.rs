//! Warns repository.
//!
//! The counter is read-then-write rather than atomic; two admins warning
//! the same user in the same instant can lose one increment, an accepted
//! risk at human action rates.

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::Collection;
use tracing::debug;

use crate::database::models::WarnRecord;
use crate::database::Database;

/// Repository for per-(chat, user) warn counters.
pub struct WarnsRepository {
    collection: Collection<WarnRecord>,
}

impl WarnsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("warns"),
        }
    }

    /// Add one warn, returning the new count.
    pub async fn add_warn(&self, chat_id: i64, user_id: i64) -> Result<u32> {
        let filter = doc! { "chat_id": chat_id, "user_id": user_id };

        let mut record = self
            .collection
            .find_one(filter.clone())
            .await?
            .unwrap_or_else(|| WarnRecord::new(chat_id, user_id));
        let count = record.add();

        let options = UpdateOptions::builder().upsert(true).build();
        self.collection
            .update_one(filter, doc! { "$set": { "count": count } })
            .with_options(options)
            .await?;

        debug!("User {} in chat {} now has {} warns", user_id, chat_id, count);
        Ok(count)
    }

    /// Current warn count, defaulting to 0 when absent.
    pub async fn get_warns(&self, chat_id: i64, user_id: i64) -> Result<u32> {
        let filter = doc! { "chat_id": chat_id, "user_id": user_id };
        let record = self.collection.find_one(filter).await?;
        Ok(record.map(|r| r.count).unwrap_or(0))
    }

    /// Reset a user's warns by deleting the record. Readers default an
    /// absent record to 0, so delete and set-to-zero are equivalent; delete
    /// keeps the collection clean.
    pub async fn reset_warns(&self, chat_id: i64, user_id: i64) -> Result<()> {
        let filter = doc! { "chat_id": chat_id, "user_id": user_id };
        self.collection.delete_one(filter).await?;
        debug!("Reset warns for user {} in chat {}", user_id, chat_id);
        Ok(())
    }

    /// Drop every warn record of a chat (bulk chat cleanup).
    pub async fn clear_chat(&self, chat_id: i64) -> Result<()> {
        self.collection.delete_many(doc! { "chat_id": chat_id }).await?;
        Ok(())
    }
}
