//! Welcome event handler.
//!
//! Greets members when they join, using the chat's custom template when
//! one is set.

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatMemberUpdated, ParseMode};
use tracing::{debug, warn};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::utils::{render_welcome, WelcomeContext};

/// Returns the handler for new member events.
pub fn handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(is_new_member).endpoint(welcome_handler)
}

/// Check if this is a member joining.
///
/// Covers fresh joins and the restricted-to-member transition (an
/// unmuted user effectively rejoining the conversation). Bots are
/// never greeted.
fn is_new_member(update: ChatMemberUpdated) -> bool {
    let old = &update.old_chat_member;
    let new = &update.new_chat_member;

    let is_joining = !old.is_present() && new.is_present();
    let is_unrestricted = old.is_restricted() && new.is_member();

    (is_joining || is_unrestricted) && !new.user.is_bot
}

/// Handle a member join event.
async fn welcome_handler(
    bot: ThrottledBot,
    update: ChatMemberUpdated,
    state: AppState,
) -> anyhow::Result<()> {
    let chat = update.chat;
    let user = &update.new_chat_member.user;

    debug!("Member {} joined chat {}", user.id, chat.id);

    // Absent settings default to enabled with the stock template.
    if !state.welcome.get_status(chat.id.0).await? {
        debug!("Welcome disabled for chat {}", chat.id);
        return Ok(());
    }

    let template = state.welcome.get_message(chat.id.0).await?;
    let ctx = WelcomeContext::new(user, chat.title().unwrap_or("this group"));
    let text = render_welcome(template.as_deref(), &ctx);

    // A failed greeting is not worth retrying or crashing over.
    if let Err(e) = bot
        .send_message(chat.id, text)
        .parse_mode(ParseMode::Html)
        .await
    {
        warn!("Failed to welcome {} in chat {}: {}", user.id, chat.id, e);
    }

    Ok(())
}
