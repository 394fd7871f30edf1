//! Content lock model.
//!
//! Each chat carries a set of boolean flags, one per lockable content
//! category. Absent documents mean "nothing locked".

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A lockable content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockType {
    /// Embedded links (url/text_link entities, bare t.me links)
    Url,
    Sticker,
    /// Photos, videos, documents, animations
    Media,
    /// "@"-mentions in text
    Mention,
    /// Forwarded content
    Forward,
}

impl LockType {
    pub const ALL: [LockType; 5] = [
        LockType::Url,
        LockType::Sticker,
        LockType::Media,
        LockType::Mention,
        LockType::Forward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LockType::Url => "url",
            LockType::Sticker => "sticker",
            LockType::Media => "media",
            LockType::Mention => "mention",
            LockType::Forward => "forward",
        }
    }

    /// Parse a lock type from a command argument.
    ///
    /// `username` is accepted as a legacy alias for `mention`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "url" | "link" | "links" => Some(LockType::Url),
            "sticker" | "stickers" => Some(LockType::Sticker),
            "media" => Some(LockType::Media),
            "mention" | "mentions" | "username" => Some(LockType::Mention),
            "forward" | "forwards" => Some(LockType::Forward),
            _ => None,
        }
    }

    /// Dotted field path for a partial `$set` update.
    pub fn field_path(&self) -> String {
        format!("locks.{}", self.as_str())
    }
}

impl fmt::Display for LockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-chat lock flags, stored as an embedded document so each flag
/// can be flipped with a single-field upsert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LockFlags {
    #[serde(default)]
    pub url: bool,
    #[serde(default)]
    pub sticker: bool,
    #[serde(default)]
    pub media: bool,
    #[serde(default)]
    pub mention: bool,
    #[serde(default)]
    pub forward: bool,
}

impl LockFlags {
    pub fn get(&self, lock: LockType) -> bool {
        match lock {
            LockType::Url => self.url,
            LockType::Sticker => self.sticker,
            LockType::Media => self.media,
            LockType::Mention => self.mention,
            LockType::Forward => self.forward,
        }
    }

    /// True if no lock is enabled (the fast path for every message).
    pub fn is_empty(&self) -> bool {
        !(self.url || self.sticker || self.media || self.mention || self.forward)
    }
}

/// Lock configuration stored in the `locks` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockSettings {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (indexed)
    pub chat_id: i64,

    #[serde(default)]
    pub locks: LockFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lock_type() {
        assert_eq!(LockType::parse("url"), Some(LockType::Url));
        assert_eq!(LockType::parse("STICKER"), Some(LockType::Sticker));
        assert_eq!(LockType::parse("username"), Some(LockType::Mention));
        assert_eq!(LockType::parse("mention"), Some(LockType::Mention));
        assert_eq!(LockType::parse("forward"), Some(LockType::Forward));
        assert_eq!(LockType::parse("bogus"), None);
    }

    #[test]
    fn test_field_path() {
        assert_eq!(LockType::Url.field_path(), "locks.url");
        assert_eq!(LockType::Mention.field_path(), "locks.mention");
    }

    #[test]
    fn test_empty_flags() {
        let flags = LockFlags::default();
        assert!(flags.is_empty());
        for lock in LockType::ALL {
            assert!(!flags.get(lock));
        }

        let flags = LockFlags { url: true, ..Default::default() };
        assert!(!flags.is_empty());
        assert!(flags.get(LockType::Url));
        assert!(!flags.get(LockType::Media));
    }
}
