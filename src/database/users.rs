//! User repository.
//!
//! Stores every user the bot sees so moderation commands can resolve
//! `@username` and numeric-id arguments without a platform round-trip.

use std::sync::Arc;

use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::Collection;
use teloxide::types::User;
use tokio::spawn;
use tracing::{debug, warn};

use super::models::TrackedUser;
use super::Database;

/// Repository for tracked users.
pub struct UserRepo {
    collection: Collection<TrackedUser>,
}

impl UserRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// Upsert user data (update or insert).
    pub async fn upsert(&self, user: &User) -> Result<()> {
        let tracked = TrackedUser::from_telegram(user);

        let filter = doc! { "user_id": tracked.user_id };
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(
                filter,
                doc! { "$set": {
                    "first_name": &tracked.first_name,
                    "username": &tracked.username,
                }},
            )
            .with_options(options)
            .await?;

        debug!("Upserted user {} (@{:?})", tracked.user_id, tracked.username);
        Ok(())
    }

    /// Upsert user in background (non-blocking, runs before all handlers).
    pub fn upsert_background(self: Arc<Self>, user: User) {
        spawn(async move {
            if let Err(e) = self.upsert(&user).await {
                warn!("Failed to upsert user {}: {}", user.id, e);
            }
        });
    }

    /// Get user by ID.
    pub async fn get_by_id(&self, user_id: i64) -> Result<Option<TrackedUser>> {
        let filter = doc! { "user_id": user_id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// Get user by username (case-insensitive, with or without @).
    pub async fn get_by_username(&self, username: &str) -> Result<Option<TrackedUser>> {
        let username_lower = username.trim_start_matches('@').to_lowercase();
        let filter = doc! { "username": &username_lower };
        Ok(self.collection.find_one(filter).await?)
    }
}
