//! Start and help commands.

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::dispatcher::ThrottledBot;
use crate::plugins::{reply_html, Command};

const START_TEXT: &str = "\
👋 Hi! I'm a group moderation bot.\n\n\
Add me to a group and promote me to admin, then use /help to see \
what I can do: welcome messages, content locks, warnings, bans and \
anti-abuse protection.";

/// Handle /start command.
pub async fn start_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    reply_html(&bot, &msg, START_TEXT).await
}

/// Handle /help command.
pub async fn help_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    reply_html(&bot, &msg, &Command::descriptions().to_string()).await
}
