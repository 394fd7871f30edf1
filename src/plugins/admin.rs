//! Admin management commands.
//!
//! Promotion grants the standard moderation rights; demotion clears
//! them all. The group owner can never be demoted through the bot.

use teloxide::prelude::*;
use teloxide::types::ChatMemberKind;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::error::ActionError;
use crate::plugins::{in_group, require_admin, respond};
use crate::utils::mention_html;
use crate::utils::target::resolve_target;

/// Handle /promote command.
pub async fn promote_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    if !in_group(&msg) {
        return Ok(());
    }
    let user = match msg.from.as_ref() {
        Some(user) => user.clone(),
        None => return Ok(()),
    };
    let chat_id = msg.chat.id;

    let outcome = async {
        require_admin(&state, &msg, &user).await?;

        let target = resolve_target(&msg, &state.users).await?;

        bot.promote_chat_member(chat_id, target.user_id)
            .can_manage_chat(true)
            .can_delete_messages(true)
            .can_restrict_members(true)
            .can_change_info(true)
            .can_invite_users(true)
            .can_pin_messages(true)
            .await?;

        Ok(format!(
            "⭐ {} has been promoted to admin.",
            mention_html(target.user_id.0, &target.first_name)
        ))
    }
    .await;

    respond(&bot, &msg, outcome).await
}

/// Handle /demote command.
pub async fn demote_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    if !in_group(&msg) {
        return Ok(());
    }
    let user = match msg.from.as_ref() {
        Some(user) => user.clone(),
        None => return Ok(()),
    };
    let chat_id = msg.chat.id;

    let outcome = async {
        require_admin(&state, &msg, &user).await?;

        let target = resolve_target(&msg, &state.users).await?;

        if target.user_id == user.id {
            return Err(ActionError::rejected("❌ You cannot demote yourself."));
        }

        let member = bot.get_chat_member(chat_id, target.user_id).await?;
        if matches!(member.kind, ChatMemberKind::Owner(_)) {
            return Err(ActionError::rejected("❌ The group owner cannot be demoted."));
        }

        // Promote with every right off = demote
        bot.promote_chat_member(chat_id, target.user_id)
            .can_manage_chat(false)
            .can_delete_messages(false)
            .can_restrict_members(false)
            .can_promote_members(false)
            .can_change_info(false)
            .can_invite_users(false)
            .can_pin_messages(false)
            .await?;

        Ok(format!(
            "⬇️ {} has been demoted.",
            mention_html(target.user_id.0, &target.first_name)
        ))
    }
    .await;

    respond(&bot, &msg, outcome).await
}
