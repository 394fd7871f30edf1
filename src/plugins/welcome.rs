//! Welcome configuration commands.

use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::error::ActionError;
use crate::plugins::{in_group, require_admin, respond};
use crate::utils::command_args;

const WELCOME_USAGE: &str = "Usage: /welcome on|off";

const SETWELCOME_USAGE: &str = "\
Usage: /setwelcome &lt;text&gt;\n\n\
Placeholders: {first_name}, {username}, {mention}, {title}";

/// Handle /welcome command (toggle or show status).
pub async fn welcome_command(
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

        let args = msg.text().map(command_args).unwrap_or_default();
        match args.first().copied() {
            None => {
                let enabled = state.welcome.get_status(msg.chat.id.0).await?;
                let status = if enabled { "ON ✅" } else { "OFF ❌" };
                Ok(format!("👋 Welcome messages: {}\n\n{}", status, WELCOME_USAGE))
            }
            Some("on") => {
                state.welcome.set_status(msg.chat.id.0, true).await?;
                Ok("✅ Welcome messages enabled.".to_string())
            }
            Some("off") => {
                state.welcome.set_status(msg.chat.id.0, false).await?;
                Ok("❌ Welcome messages disabled.".to_string())
            }
            Some(_) => Err(ActionError::rejected(WELCOME_USAGE)),
        }
    }
    .await;

    respond(&bot, &msg, outcome).await
}

/// Handle /setwelcome command.
pub async fn setwelcome_command(
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

        let text = msg.text().unwrap_or("");
        // Everything after the command word, whitespace preserved.
        let template = match text.split_once(char::is_whitespace) {
            Some((_, rest)) if !rest.trim().is_empty() => rest.trim(),
            _ => return Err(ActionError::rejected(SETWELCOME_USAGE)),
        };

        state.welcome.set_message(msg.chat.id.0, template).await?;
        Ok("✅ Custom welcome message saved!".to_string())
    }
    .await;

    respond(&bot, &msg, outcome).await
}
