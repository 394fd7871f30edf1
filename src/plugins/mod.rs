//! Plugin system for command handlers.
//!
//! Add new plugins by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_plugin;` below
//! 3. Adding the handler to `command_handler()`

pub mod admin;
pub mod antiabuse;
pub mod ban;
pub mod locks;
pub mod mute;
pub mod start;
pub mod warn;
pub mod welcome;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters, User};
use teloxide::utils::command::BotCommands;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::error::ActionError;

/// All bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,

    #[command(description = "Show this help")]
    Help,

    // Welcome commands
    #[command(description = "Toggle welcome messages (on/off)")]
    Welcome,

    #[command(description = "Set a custom welcome message")]
    Setwelcome,

    // Lock commands
    #[command(description = "Enable a content lock")]
    Lock,

    #[command(description = "Disable a content lock")]
    Unlock,

    #[command(description = "Show active locks")]
    Locks,

    // Ban commands
    #[command(description = "Ban a user")]
    Ban,

    #[command(description = "Unban a user")]
    Unban,

    #[command(description = "Kick a user")]
    Kick,

    // Mute commands
    #[command(description = "Mute a user")]
    Mute,

    #[command(description = "Unmute a user")]
    Unmute,

    // Warning commands
    #[command(description = "Warn a user")]
    Warn,

    #[command(description = "Show a user's warnings")]
    Warns,

    #[command(description = "Reset a user's warnings")]
    Resetwarns,

    // Admin commands
    #[command(description = "Promote a user to admin")]
    Promote,

    #[command(description = "Demote an admin")]
    Demote,

    // Anti-abuse
    #[command(description = "Toggle anti-abuse protection (owner only)")]
    Anticheater,
}

/// Build the combined command handler.
pub fn command_handler() -> UpdateHandler<anyhow::Error> {
    use dptree::case;

    teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(start::start_command))
        .branch(case![Command::Help].endpoint(start::help_command))
        // Welcome
        .branch(case![Command::Welcome].endpoint(welcome::welcome_command))
        .branch(case![Command::Setwelcome].endpoint(welcome::setwelcome_command))
        // Locks
        .branch(case![Command::Lock].endpoint(locks::lock_command))
        .branch(case![Command::Unlock].endpoint(locks::unlock_command))
        .branch(case![Command::Locks].endpoint(locks::locks_command))
        // Ban
        .branch(case![Command::Ban].endpoint(ban::ban_command))
        .branch(case![Command::Unban].endpoint(ban::unban_command))
        .branch(case![Command::Kick].endpoint(ban::kick_command))
        // Mute
        .branch(case![Command::Mute].endpoint(mute::mute_command))
        .branch(case![Command::Unmute].endpoint(mute::unmute_command))
        // Warnings
        .branch(case![Command::Warn].endpoint(warn::warn_command))
        .branch(case![Command::Warns].endpoint(warn::warns_command))
        .branch(case![Command::Resetwarns].endpoint(warn::resetwarns_command))
        // Admin
        .branch(case![Command::Promote].endpoint(admin::promote_command))
        .branch(case![Command::Demote].endpoint(admin::demote_command))
        // Anti-abuse
        .branch(case![Command::Anticheater].endpoint(antiabuse::anticheater_command))
}

/// Send an HTML reply to the command message.
pub(crate) async fn reply_html(
    bot: &ThrottledBot,
    msg: &Message,
    text: &str,
) -> anyhow::Result<()> {
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;
    Ok(())
}

/// Post the outcome of a moderation action: success text on Ok, the
/// error's own display text on Err.
pub(crate) async fn respond(
    bot: &ThrottledBot,
    msg: &Message,
    outcome: Result<String, ActionError>,
) -> anyhow::Result<()> {
    match outcome {
        Ok(text) => reply_html(bot, msg, &text).await,
        Err(e) => reply_html(bot, msg, &e.to_string()).await,
    }
}

/// Commands below only make sense in groups.
pub(crate) fn in_group(msg: &Message) -> bool {
    msg.chat.is_group() || msg.chat.is_supergroup()
}

/// Gate a command on admin rights of the invoking user.
pub(crate) async fn require_admin(
    state: &AppState,
    msg: &Message,
    user: &User,
) -> Result<(), ActionError> {
    let is_admin = state
        .permissions
        .is_admin(msg.chat.id, user.id)
        .await
        .unwrap_or(false);

    if is_admin {
        Ok(())
    } else {
        Err(ActionError::AdminRequired)
    }
}

/// Gate a command on ownership of the chat.
pub(crate) async fn require_owner(
    state: &AppState,
    msg: &Message,
    user: &User,
) -> Result<(), ActionError> {
    let is_owner = state
        .permissions
        .is_owner(msg.chat.id, user.id)
        .await
        .unwrap_or(false);

    if is_owner {
        Ok(())
    } else {
        Err(ActionError::OwnerRequired)
    }
}
