//! Message content classification.
//!
//! Each inbound message is classified exactly once into a tagged
//! `MessageContent`, which the lock-enforcement logic then matches
//! exhaustively. This replaces per-lock duck-typed field probing.

use teloxide::types::{Message, MessageEntity, MessageEntityKind};

use crate::database::{LockFlags, LockType};

/// Raw per-category facts about a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentFlags {
    pub link: bool,
    pub mention: bool,
    pub sticker: bool,
    pub media: bool,
    pub forward: bool,
}

impl ContentFlags {
    fn category_count(&self) -> usize {
        let text_like = self.link || self.mention;
        [text_like, self.sticker, self.media, self.forward]
            .iter()
            .filter(|b| **b)
            .count()
    }
}

/// What a message contains, decided once per inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageContent {
    /// Nothing lockable.
    Plain,
    /// Text (or caption) only.
    Text { link: bool, mention: bool },
    Sticker,
    Media,
    Forward,
    /// More than one category at once (e.g. a forwarded photo).
    Mixed(ContentFlags),
}

impl MessageContent {
    /// Classify a Telegram message.
    pub fn classify(msg: &Message) -> Self {
        let text = msg.text().or_else(|| msg.caption()).unwrap_or("");
        let entities = msg.entities().or_else(|| msg.caption_entities()).unwrap_or(&[]);
        let (link, mention) = text_flags(text, entities);

        let flags = ContentFlags {
            link,
            mention,
            sticker: msg.sticker().is_some(),
            media: msg.photo().is_some()
                || msg.video().is_some()
                || msg.document().is_some()
                || msg.animation().is_some(),
            forward: msg.forward_origin().is_some(),
        };

        Self::from_flags(flags)
    }

    /// Collapse raw flags into the tagged union.
    pub fn from_flags(flags: ContentFlags) -> Self {
        match flags.category_count() {
            0 => MessageContent::Plain,
            1 => {
                if flags.sticker {
                    MessageContent::Sticker
                } else if flags.media {
                    MessageContent::Media
                } else if flags.forward {
                    MessageContent::Forward
                } else {
                    MessageContent::Text { link: flags.link, mention: flags.mention }
                }
            }
            _ => MessageContent::Mixed(flags),
        }
    }

    fn flags(&self) -> ContentFlags {
        match *self {
            MessageContent::Plain => ContentFlags::default(),
            MessageContent::Text { link, mention } => {
                ContentFlags { link, mention, ..Default::default() }
            }
            MessageContent::Sticker => ContentFlags { sticker: true, ..Default::default() },
            MessageContent::Media => ContentFlags { media: true, ..Default::default() },
            MessageContent::Forward => ContentFlags { forward: true, ..Default::default() },
            MessageContent::Mixed(flags) => flags,
        }
    }

    /// The first enabled lock this content violates, if any.
    ///
    /// One match wins; a message is deleted at most once even when it
    /// trips several categories.
    pub fn first_violation(&self, locks: &LockFlags) -> Option<LockType> {
        let flags = self.flags();

        for lock in LockType::ALL {
            let present = match lock {
                LockType::Url => flags.link,
                LockType::Sticker => flags.sticker,
                LockType::Media => flags.media,
                LockType::Mention => flags.mention,
                LockType::Forward => flags.forward,
            };
            if present && locks.get(lock) {
                return Some(lock);
            }
        }

        None
    }
}

/// Extract (has_link, has_mention) from message text and entities.
///
/// Links are url/text_link entities plus bare `t.me/` shortlinks that
/// the platform did not mark up; mentions are any "@" in the text.
fn text_flags(text: &str, entities: &[MessageEntity]) -> (bool, bool) {
    let mut link = entities.iter().any(|e| {
        matches!(
            e.kind,
            MessageEntityKind::Url | MessageEntityKind::TextLink { .. }
        )
    });

    if !link {
        let lower = text.to_lowercase();
        link = lower.contains("t.me/") || lower.contains("telegram.me/");
    }

    let mention = text.contains('@');

    (link, mention)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locks(url: bool, sticker: bool, media: bool, mention: bool, forward: bool) -> LockFlags {
        LockFlags { url, sticker, media, mention, forward }
    }

    #[test]
    fn test_text_flags_detects_shortlinks() {
        let (link, mention) = text_flags("join t.me/xyz now", &[]);
        assert!(link);
        assert!(!mention);

        let (link, _) = text_flags("plain chatter", &[]);
        assert!(!link);
    }

    #[test]
    fn test_text_flags_detects_mentions() {
        let (_, mention) = text_flags("hey @somebody", &[]);
        assert!(mention);
    }

    #[test]
    fn test_from_flags_single_categories() {
        assert_eq!(
            MessageContent::from_flags(ContentFlags::default()),
            MessageContent::Plain
        );
        assert_eq!(
            MessageContent::from_flags(ContentFlags { sticker: true, ..Default::default() }),
            MessageContent::Sticker
        );
        assert_eq!(
            MessageContent::from_flags(ContentFlags { link: true, ..Default::default() }),
            MessageContent::Text { link: true, mention: false }
        );
    }

    #[test]
    fn test_from_flags_combination_is_mixed() {
        let flags = ContentFlags { media: true, forward: true, ..Default::default() };
        assert_eq!(MessageContent::from_flags(flags), MessageContent::Mixed(flags));
    }

    #[test]
    fn test_url_lock_catches_shortlink_message() {
        let content = MessageContent::Text { link: true, mention: false };
        let hit = content.first_violation(&locks(true, false, false, false, false));
        assert_eq!(hit, Some(LockType::Url));
    }

    #[test]
    fn test_no_enabled_lock_means_no_violation() {
        let content = MessageContent::Text { link: true, mention: true };
        assert_eq!(content.first_violation(&LockFlags::default()), None);
    }

    #[test]
    fn test_first_match_wins_no_compounding() {
        // Forwarded photo with a caption link; url lock comes first.
        let content = MessageContent::Mixed(ContentFlags {
            link: true,
            media: true,
            forward: true,
            ..Default::default()
        });
        let hit = content.first_violation(&locks(true, false, true, false, true));
        assert_eq!(hit, Some(LockType::Url));
    }

    #[test]
    fn test_forward_lock_on_forwarded_media() {
        let content = MessageContent::Mixed(ContentFlags {
            media: true,
            forward: true,
            ..Default::default()
        });
        let hit = content.first_violation(&locks(false, false, false, false, true));
        assert_eq!(hit, Some(LockType::Forward));
    }

    #[test]
    fn test_sticker_lock() {
        assert_eq!(
            MessageContent::Sticker.first_violation(&locks(false, true, false, false, false)),
            Some(LockType::Sticker)
        );
        assert_eq!(
            MessageContent::Media.first_violation(&locks(false, true, false, false, false)),
            None
        );
    }
}
