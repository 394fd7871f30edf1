//! Admin action counter model.
//!
//! Tracks how many ban/kick actions an admin has performed inside the
//! current rolling window. The window fully resets once expired rather
//! than decaying, which keeps storage and updates O(1) per admin; the
//! limiter exists for coarse mass-ban detection, not precise rate
//! accounting.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Length of the rolling counting window.
pub const ACTION_WINDOW_SECS: i64 = 24 * 60 * 60;

/// A per-(chat, admin) action counter, stored in the `admin_actions`
/// collection. Deleted when the admin is auto-demoted, so a re-promoted
/// admin starts with a clean slate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminActionRecord {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (part of the composite key)
    pub chat_id: i64,

    /// Telegram user ID of the acting admin (part of the composite key)
    pub admin_id: i64,

    /// Actions performed inside the current window. Only ever increases
    /// while the window is open.
    pub count: u32,

    /// Unix timestamp (seconds) when the current window opened.
    pub window_start: i64,
}

impl AdminActionRecord {
    /// Open a fresh window with one action counted.
    pub fn new(chat_id: i64, admin_id: i64, now: i64) -> Self {
        Self {
            id: None,
            chat_id,
            admin_id,
            count: 1,
            window_start: now,
        }
    }

    /// Count one action at time `now`, returning the new count.
    ///
    /// If the window has expired the record rolls over to a fresh window
    /// with `count = 1`; otherwise the count increments and the window
    /// start is left untouched.
    pub fn register(&mut self, now: i64) -> u32 {
        if now - self.window_start > ACTION_WINDOW_SECS {
            self.count = 1;
            self.window_start = now;
        } else {
            self.count += 1;
        }
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    #[test]
    fn test_counts_increase_within_window() {
        let mut rec = AdminActionRecord::new(-100, 42, T0);
        assert_eq!(rec.count, 1);

        // Ten more actions spread over a few hours, all inside the window.
        for expected in 2..=11 {
            let now = T0 + (expected as i64) * 600;
            assert_eq!(rec.register(now), expected);
        }
        assert_eq!(rec.window_start, T0);
    }

    #[test]
    fn test_window_expiry_resets_count() {
        let mut rec = AdminActionRecord::new(-100, 42, T0);
        rec.register(T0 + 3600);
        assert_eq!(rec.count, 2);

        // 25 hours later the window has expired: back to 1, new window.
        let later = T0 + 25 * 3600;
        assert_eq!(rec.register(later), 1);
        assert_eq!(rec.window_start, later);
    }

    #[test]
    fn test_action_exactly_at_boundary_still_counts() {
        let mut rec = AdminActionRecord::new(-100, 42, T0);
        // Strictly greater-than comparison: the boundary second is in-window.
        assert_eq!(rec.register(T0 + ACTION_WINDOW_SECS), 2);
        assert_eq!(rec.register(T0 + ACTION_WINDOW_SECS + 1), 1);
    }

    #[test]
    fn test_fresh_record_after_reset_starts_at_one() {
        // A reset deletes the record; the next action recreates it.
        let rec = AdminActionRecord::new(-100, 42, T0 + 90_000);
        assert_eq!(rec.count, 1);
    }
}
