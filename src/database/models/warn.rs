//! Warn counter model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A per-(chat, user) strike counter, stored in the `warns` collection.
///
/// Resetting a user's warns deletes the record outright; readers treat an
/// absent record as zero, so the two are indistinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarnRecord {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (part of the composite key)
    pub chat_id: i64,

    /// Telegram user ID (part of the composite key)
    pub user_id: i64,

    #[serde(default)]
    pub count: u32,
}

impl WarnRecord {
    /// Fresh record with no strikes.
    pub fn new(chat_id: i64, user_id: i64) -> Self {
        Self {
            id: None,
            chat_id,
            user_id,
            count: 0,
        }
    }

    /// Count one warn, returning the new total.
    pub fn add(&mut self) -> u32 {
        self.count += 1;
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_warns_count_up() {
        let mut rec = WarnRecord::new(-100, 7);
        assert_eq!(rec.count, 0);

        for expected in 1..=5 {
            assert_eq!(rec.add(), expected);
        }
        assert_eq!(rec.count, 5);
    }

    #[test]
    fn test_fresh_record_after_reset_counts_from_one() {
        // A reset deletes the record; the next warn recreates it.
        let mut rec = WarnRecord::new(-100, 7);
        rec.add();
        rec.add();

        let mut rec = WarnRecord::new(rec.chat_id, rec.user_id);
        assert_eq!(rec.count, 0);
        assert_eq!(rec.add(), 1);
    }
}
