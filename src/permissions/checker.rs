//! Permission checker.
//!
//! Every check is a live `getChatMember` lookup; admin status is never
//! cached, so a demotion takes effect on the very next command.

use teloxide::prelude::*;
use teloxide::types::{ChatId, ChatMemberKind, UserId};

/// Live permission checker against the Telegram API.
#[derive(Clone)]
pub struct Permissions {
    bot: Bot,
}

impl Permissions {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    async fn member_kind(&self, chat_id: ChatId, user_id: UserId) -> anyhow::Result<ChatMemberKind> {
        let member = self.bot.get_chat_member(chat_id, user_id).await?;
        Ok(member.kind)
    }

    /// Check if a user is an admin or the chat owner.
    pub async fn is_admin(&self, chat_id: ChatId, user_id: UserId) -> anyhow::Result<bool> {
        Ok(matches!(
            self.member_kind(chat_id, user_id).await?,
            ChatMemberKind::Owner(_) | ChatMemberKind::Administrator(_)
        ))
    }

    /// Check if a user is the chat owner.
    pub async fn is_owner(&self, chat_id: ChatId, user_id: UserId) -> anyhow::Result<bool> {
        Ok(matches!(
            self.member_kind(chat_id, user_id).await?,
            ChatMemberKind::Owner(_)
        ))
    }
}
