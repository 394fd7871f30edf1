//! Admin actions repository.
//!
//! Persists the rolling-window counter behind the anti-abuse limiter.
//! The threshold policy (demote + alert + reset) belongs to the caller.

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::Collection;
use tracing::debug;

use crate::database::models::AdminActionRecord;
use crate::database::Database;

/// Repository for per-(chat, admin) action counters.
pub struct AdminActionsRepository {
    collection: Collection<AdminActionRecord>,
}

impl AdminActionsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("admin_actions"),
        }
    }

    /// Count one moderation action at time `now` (unix seconds), returning
    /// the admin's tally for the current window. A missing record or an
    /// expired window both start a fresh window at 1.
    pub async fn record_action(&self, chat_id: i64, admin_id: i64, now: i64) -> Result<u32> {
        let filter = doc! { "chat_id": chat_id, "admin_id": admin_id };

        let mut record = match self.collection.find_one(filter.clone()).await? {
            Some(existing) => existing,
            None => {
                let fresh = AdminActionRecord::new(chat_id, admin_id, now);
                self.save(&fresh).await?;
                debug!("Opened action window for admin {} in chat {}", admin_id, chat_id);
                return Ok(fresh.count);
            }
        };

        let count = record.register(now);
        self.save(&record).await?;

        debug!(
            "Admin {} in chat {} at {} actions this window",
            admin_id, chat_id, count
        );
        Ok(count)
    }

    /// Forget an admin's tally entirely. Called after an auto-demotion so
    /// the slate is clean if the admin is ever re-promoted.
    pub async fn reset(&self, chat_id: i64, admin_id: i64) -> Result<()> {
        let filter = doc! { "chat_id": chat_id, "admin_id": admin_id };
        self.collection.delete_one(filter).await?;
        debug!("Reset action counter for admin {} in chat {}", admin_id, chat_id);
        Ok(())
    }

    /// Drop every action record of a chat (bulk chat cleanup).
    pub async fn clear_chat(&self, chat_id: i64) -> Result<()> {
        self.collection.delete_many(doc! { "chat_id": chat_id }).await?;
        Ok(())
    }

    async fn save(&self, record: &AdminActionRecord) -> Result<()> {
        let filter = doc! { "chat_id": record.chat_id, "admin_id": record.admin_id };
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(
                filter,
                doc! { "$set": {
                    "count": record.count,
                    "window_start": record.window_start,
                }},
            )
            .with_options(options)
            .await?;

        Ok(())
    }
}
