//! Content lock commands.

use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::LockType;
use crate::error::ActionError;
use crate::plugins::{in_group, reply_html, require_admin, respond};
use crate::utils::command_args;

fn lock_usage(command: &str) -> String {
    let types = LockType::ALL
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Usage: /{} &lt;type&gt;\nTypes: {}", command, types)
}

/// Handle /lock command.
pub async fn lock_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    set_lock_action(bot, msg, state, true).await
}

/// Handle /unlock command.
pub async fn unlock_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    set_lock_action(bot, msg, state, false).await
}

async fn set_lock_action(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    enable: bool,
) -> anyhow::Result<()> {
    if !in_group(&msg) {
        return Ok(());
    }
    let user = match msg.from.as_ref() {
        Some(user) => user.clone(),
        None => return Ok(()),
    };
    let command = if enable { "lock" } else { "unlock" };

    let outcome = async {
        require_admin(&state, &msg, &user).await?;

        let args = msg.text().map(command_args).unwrap_or_default();
        let lock = args
            .first()
            .and_then(|a| LockType::parse(a))
            .ok_or_else(|| ActionError::rejected(lock_usage(command)))?;

        state.locks.set_lock(msg.chat.id.0, lock, enable).await?;

        if enable {
            Ok(format!("🔒 {} messages are now locked.", capitalize(lock.as_str())))
        } else {
            Ok(format!("🔓 {} messages are now unlocked.", capitalize(lock.as_str())))
        }
    }
    .await;

    respond(&bot, &msg, outcome).await
}

/// Handle /locks command - list active locks. Open to everyone.
pub async fn locks_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !in_group(&msg) {
        return Ok(());
    }

    let flags = state.locks.get(msg.chat.id.0).await?;

    let text = if flags.is_empty() {
        "🔓 No locks are active in this chat.".to_string()
    } else {
        let mut lines = vec!["🔐 <b>Active locks</b>".to_string()];
        for lock in LockType::ALL {
            let mark = if flags.get(lock) { "🔒" } else { "🔓" };
            lines.push(format!("{} {}", mark, lock.as_str()));
        }
        lines.join("\n")
    };

    reply_html(&bot, &msg, &text).await
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
