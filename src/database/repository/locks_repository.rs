//! Locks repository.

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::Collection;
use tracing::debug;

use crate::database::models::{LockFlags, LockSettings, LockType};
use crate::database::Database;

/// Repository for per-chat content locks.
pub struct LocksRepository {
    collection: Collection<LockSettings>,
}

impl LocksRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("locks"),
        }
    }

    /// Get the chat's lock flags. Absent records mean nothing is locked.
    pub async fn get(&self, chat_id: i64) -> Result<LockFlags> {
        let filter = doc! { "chat_id": chat_id };
        let settings = self.collection.find_one(filter).await?;
        Ok(settings.map(|s| s.locks).unwrap_or_default())
    }

    /// Flip a single lock flag (dotted-path upsert, so concurrent writers
    /// to different lock types never clobber each other).
    pub async fn set_lock(&self, chat_id: i64, lock: LockType, enabled: bool) -> Result<()> {
        let filter = doc! { "chat_id": chat_id };
        let options = UpdateOptions::builder().upsert(true).build();
        let path = lock.field_path();

        self.collection
            .update_one(filter, doc! { "$set": { path: enabled } })
            .with_options(options)
            .await?;

        debug!("Set lock {}={} for chat {}", lock, enabled, chat_id);
        Ok(())
    }

    /// Drop all lock config for a chat (bulk chat cleanup).
    pub async fn clear_chat(&self, chat_id: i64) -> Result<()> {
        self.collection.delete_one(doc! { "chat_id": chat_id }).await?;
        Ok(())
    }
}
