//! Content lock enforcement.
//!
//! Runs for every non-command group message: classify the content,
//! find the first enabled lock it violates, and delete the message
//! unless the sender is an admin.

use teloxide::prelude::*;
use tracing::{info, warn};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::events::content::MessageContent;

/// Delete the message if it violates an enabled lock.
pub async fn enforce_locks(bot: &ThrottledBot, msg: &Message, state: &AppState) -> anyhow::Result<()> {
    let user = match msg.from.as_ref() {
        Some(user) => user,
        None => return Ok(()),
    };

    // Commands were already consumed by the command branch; anything
    // starting with '/' that fell through is not ours to police.
    if msg.text().map(|t| t.starts_with('/')).unwrap_or(false) {
        return Ok(());
    }

    let locks = state.locks.get(msg.chat.id.0).await?;
    if locks.is_empty() {
        return Ok(());
    }

    let violation = match MessageContent::classify(msg).first_violation(&locks) {
        Some(lock) => lock,
        None => return Ok(()),
    };

    // Admins are exempt; checked last so most messages cost no API call.
    if state
        .permissions
        .is_admin(msg.chat.id, user.id)
        .await
        .unwrap_or(false)
    {
        return Ok(());
    }

    match bot.delete_message(msg.chat.id, msg.id).await {
        Ok(_) => info!(
            "Deleted message {} from {} in chat {} ({} lock)",
            msg.id, user.id, msg.chat.id, violation
        ),
        // Typically the bot lacks delete rights; the lock stays on.
        Err(e) => warn!(
            "Could not delete message {} in chat {}: {}",
            msg.id, msg.chat.id, e
        ),
    }

    Ok(())
}
