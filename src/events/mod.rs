//! Event handler system.
//!
//! Add new event handlers by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_event;` below
//! 3. Adding the handler to `event_handler()`

pub mod antiabuse;
pub mod content;
pub mod locks;
pub mod welcome;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::ChatMemberUpdated;
use tracing::{error, info};

use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Build the combined event handler for chat member updates.
pub fn event_handler() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(welcome::handler())
        .branch(antiabuse::handler())
}

/// Build the message event handler (lock enforcement).
pub fn message_event_handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(|msg: Message| msg.chat.is_group() || msg.chat.is_supergroup())
        .endpoint(group_message_handler)
}

/// Build the handler for the bot's own membership updates.
pub fn removal_handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(|update: ChatMemberUpdated| {
        update.old_chat_member.is_present() && !update.new_chat_member.is_present()
    })
    .endpoint(chat_cleanup_handler)
}

/// Run per-message group checks. Handler failures are logged, never
/// propagated, so one bad message cannot wedge the update stream.
async fn group_message_handler(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    if let Err(e) = locks::enforce_locks(&bot, &msg, &state).await {
        error!("Lock enforcement error in chat {}: {:#}", msg.chat.id, e);
    }

    Ok(())
}

/// Drop all stored settings for a chat once the bot is removed from it.
async fn chat_cleanup_handler(update: ChatMemberUpdated, state: AppState) -> anyhow::Result<()> {
    let chat_id = update.chat.id.0;

    state.welcome.clear_chat(chat_id).await?;
    state.locks.clear_chat(chat_id).await?;
    state.warns.clear_chat(chat_id).await?;
    state.antiabuse.clear_chat(chat_id).await?;
    state.admin_actions.clear_chat(chat_id).await?;

    info!("Removed from chat {}, cleared stored settings", chat_id);
    Ok(())
}
