//! Ban management commands.
//!
//! Commands for banning, unbanning, and kicking users.

use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::error::ActionError;
use crate::plugins::{in_group, require_admin, respond};
use crate::utils::mention_html;
use crate::utils::target::resolve_target;

#[derive(PartialEq, Clone, Copy)]
enum BanMode {
    Ban,
    Unban,
    Kick,
}

/// Handle /ban command.
pub async fn ban_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    ban_action(bot, msg, state, BanMode::Ban).await
}

/// Handle /unban command.
pub async fn unban_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    ban_action(bot, msg, state, BanMode::Unban).await
}

/// Handle /kick command.
pub async fn kick_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    ban_action(bot, msg, state, BanMode::Kick).await
}

async fn ban_action(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    mode: BanMode,
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
        let mention = mention_html(target.user_id.0, &target.first_name);

        // Anti-admin check (except for unban)
        if mode != BanMode::Unban
            && state
                .permissions
                .is_admin(chat_id, target.user_id)
                .await
                .unwrap_or(false)
        {
            return Err(ActionError::rejected("❌ I'm not going to do that to an admin."));
        }

        match mode {
            BanMode::Ban => {
                bot.ban_chat_member(chat_id, target.user_id).await?;
                Ok(format!("🚨 {} has been banned.", mention))
            }
            BanMode::Unban => {
                bot.unban_chat_member(chat_id, target.user_id).await?;
                Ok(format!("✅ {} has been unbanned.", mention))
            }
            BanMode::Kick => {
                // Ban then unban = kick. A rejected unban would leave the
                // target banned, so it must surface, not report a kick.
                bot.ban_chat_member(chat_id, target.user_id).await?;
                bot.unban_chat_member(chat_id, target.user_id).await?;
                Ok(format!("👢 {} has been kicked.", mention))
            }
        }
    }
    .await;

    respond(&bot, &msg, outcome).await
}
