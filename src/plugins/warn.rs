//! Warning system commands.
//!
//! Warnings accumulate per user per chat; reaching the limit mutes the
//! user.

use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::error::ActionError;
use crate::plugins::{in_group, mute, require_admin, respond};
use crate::utils::mention_html;
use crate::utils::target::{resolve_target, Target};

/// Warnings before the user is muted.
pub const WARN_LIMIT: u32 = 3;

/// Handle /warn command.
pub async fn warn_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
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

        if state
            .permissions
            .is_admin(chat_id, target.user_id)
            .await
            .unwrap_or(false)
        {
            return Err(ActionError::rejected("❌ I'm not going to warn an admin."));
        }

        // The counter write happens first; a failed mute leaves it intact.
        let count = state
            .warns
            .add_warn(chat_id.0, target.user_id.0 as i64)
            .await?;

        if count >= WARN_LIMIT {
            mute::mute_member(&bot, chat_id, target.user_id).await?;
            Ok(format!(
                "🚫 {} reached {}/{} warnings and has been muted.",
                mention, count, WARN_LIMIT
            ))
        } else {
            Ok(format!("⚠️ {} now has {}/{} warnings.", mention, count, WARN_LIMIT))
        }
    }
    .await;

    respond(&bot, &msg, outcome).await
}

/// Handle /warns command - show a user's warning count.
pub async fn warns_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !in_group(&msg) {
        return Ok(());
    }
    let user = match msg.from.as_ref() {
        Some(user) => user.clone(),
        None => return Ok(()),
    };

    let outcome = async {
        require_admin(&state, &msg, &user).await?;

        let target = resolve_target(&msg, &state.users).await?;
        let count = state
            .warns
            .get_warns(msg.chat.id.0, target.user_id.0 as i64)
            .await?;

        Ok(format!(
            "⚠️ {} has {}/{} warnings.",
            mention_of(&target),
            count,
            WARN_LIMIT
        ))
    }
    .await;

    respond(&bot, &msg, outcome).await
}

/// Handle /resetwarns command.
pub async fn resetwarns_command(
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

    let outcome = async {
        require_admin(&state, &msg, &user).await?;

        let target = resolve_target(&msg, &state.users).await?;
        state
            .warns
            .reset_warns(msg.chat.id.0, target.user_id.0 as i64)
            .await?;

        Ok(format!("✅ Warnings for {} have been reset.", mention_of(&target)))
    }
    .await;

    respond(&bot, &msg, outcome).await
}

fn mention_of(target: &Target) -> String {
    mention_html(target.user_id.0, &target.first_name)
}
