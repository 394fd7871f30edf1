//! Mute management commands.

use teloxide::prelude::*;
use teloxide::types::{ChatId, ChatPermissions, UserId};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::error::ActionError;
use crate::plugins::{in_group, require_admin, respond};
use crate::utils::mention_html;
use crate::utils::target::resolve_target;

/// Permissions restored on unmute.
fn speaking_permissions() -> ChatPermissions {
    ChatPermissions::SEND_MESSAGES
        | ChatPermissions::SEND_AUDIOS
        | ChatPermissions::SEND_DOCUMENTS
        | ChatPermissions::SEND_PHOTOS
        | ChatPermissions::SEND_VIDEOS
        | ChatPermissions::SEND_VIDEO_NOTES
        | ChatPermissions::SEND_VOICE_NOTES
        | ChatPermissions::SEND_POLLS
        | ChatPermissions::SEND_OTHER_MESSAGES
        | ChatPermissions::ADD_WEB_PAGE_PREVIEWS
}

/// Restrict a user to read-only.
pub(crate) async fn mute_member(
    bot: &ThrottledBot,
    chat_id: ChatId,
    user_id: UserId,
) -> Result<(), teloxide::RequestError> {
    bot.restrict_chat_member(chat_id, user_id, ChatPermissions::empty())
        .await?;
    Ok(())
}

/// Handle /mute command.
pub async fn mute_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    mute_action(bot, msg, state, true).await
}

/// Handle /unmute command.
pub async fn unmute_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    mute_action(bot, msg, state, false).await
}

async fn mute_action(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    mute: bool,
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

        if mute {
            if state
                .permissions
                .is_admin(chat_id, target.user_id)
                .await
                .unwrap_or(false)
            {
                return Err(ActionError::rejected("❌ I'm not going to mute an admin."));
            }

            mute_member(&bot, chat_id, target.user_id).await?;
            Ok(format!("🔇 {} has been muted.", mention))
        } else {
            bot.restrict_chat_member(chat_id, target.user_id, speaking_permissions())
                .await?;
            Ok(format!("🔊 {} has been unmuted.", mention))
        }
    }
    .await;

    respond(&bot, &msg, outcome).await
}
