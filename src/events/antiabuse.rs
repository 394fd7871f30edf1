//! Anti-abuse audit of admin actions.
//!
//! When enabled for a chat, every ban performed by an admin is tallied
//! against a 24-hour rolling window. An admin who exceeds the limit is
//! automatically demoted and the chat is alerted.

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatMemberUpdated, ParseMode};
use tracing::{info, warn};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::utils::mention_html;

/// Returns the handler for admin ban events.
pub fn handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(is_admin_ban).endpoint(antiabuse_handler)
}

/// Only explicit member-to-banned transitions count as admin actions.
/// Leaves, unbans and bot-performed bans never do.
fn is_admin_ban(update: ChatMemberUpdated) -> bool {
    update.old_chat_member.is_member() && update.new_chat_member.is_banned() && !update.from.is_bot
}

/// Tally a ban against its performing admin; demote past the limit.
async fn antiabuse_handler(
    bot: ThrottledBot,
    update: ChatMemberUpdated,
    state: AppState,
) -> anyhow::Result<()> {
    let chat_id = update.chat.id;

    if !state.antiabuse.get_enabled(chat_id.0).await? {
        return Ok(());
    }

    let admin = &update.from;

    // The owner cannot be demoted, so their actions are not tallied.
    if state
        .permissions
        .is_owner(chat_id, admin.id)
        .await
        .unwrap_or(false)
    {
        return Ok(());
    }

    let now = chrono::Utc::now().timestamp();
    let count = state
        .admin_actions
        .record_action(chat_id.0, admin.id.0 as i64, now)
        .await?;

    if count <= state.admin_action_limit {
        return Ok(());
    }

    // Over the limit: demote first. If the platform refuses (e.g. the
    // bot lost its promote right) keep the tally so the next action
    // triggers another attempt.
    if let Err(e) = bot
        .promote_chat_member(chat_id, admin.id)
        .can_manage_chat(false)
        .can_delete_messages(false)
        .can_restrict_members(false)
        .can_promote_members(false)
        .can_change_info(false)
        .can_invite_users(false)
        .can_pin_messages(false)
        .await
    {
        warn!(
            "Failed to demote admin {} in chat {}: {}",
            admin.id, chat_id, e
        );
        return Ok(());
    }

    info!(
        "Auto-demoted admin {} in chat {} after {} actions (limit {})",
        admin.id, chat_id, count, state.admin_action_limit
    );

    let alert = format!(
        "🚨 <b>ANTI-ABUSE ALERT</b>\n\n\
         👤 Admin: {}\n\
         📊 Actions in 24h: {}/{}\n\n\
         ❌ Admin has been automatically demoted.\n\
         🛡️ The group is protected.",
        mention_html(admin.id.0, &admin.first_name),
        count,
        state.admin_action_limit
    );

    if let Err(e) = bot
        .send_message(chat_id, alert)
        .parse_mode(ParseMode::Html)
        .await
    {
        warn!("Failed to post anti-abuse alert in chat {}: {}", chat_id, e);
    }

    // Fresh start after the demotion took effect.
    state.admin_actions.reset(chat_id.0, admin.id.0 as i64).await?;

    Ok(())
}
