//! Anti-abuse toggle command.

use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::error::ActionError;
use crate::plugins::{in_group, require_owner, respond};
use crate::utils::command_args;

const USAGE: &str = "Usage: /anticheater on|off";

/// Handle /anticheater command. Owner only: the feature demotes admins,
/// so admins must not be able to switch it off.
pub async fn anticheater_command(
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
        require_owner(&state, &msg, &user).await?;

        let args = msg.text().map(command_args).unwrap_or_default();
        match args.first().copied() {
            None => {
                let enabled = state.antiabuse.get_enabled(msg.chat.id.0).await?;
                let status = if enabled { "ON ✅" } else { "OFF ❌" };
                Ok(format!(
                    "🛡️ Anti-abuse protection: {}\n\
                     Limit: {} admin actions per 24h\n\n{}",
                    status, state.admin_action_limit, USAGE
                ))
            }
            Some("on") => {
                state.antiabuse.set_enabled(msg.chat.id.0, true).await?;
                Ok(format!(
                    "🛡️ Anti-abuse protection ENABLED.\n\
                     Admins exceeding {} actions in 24h will be demoted.",
                    state.admin_action_limit
                ))
            }
            Some("off") => {
                state.antiabuse.set_enabled(msg.chat.id.0, false).await?;
                Ok("⚠️ Anti-abuse protection DISABLED.".to_string())
            }
            Some(_) => Err(ActionError::rejected(USAGE)),
        }
    }
    .await;

    respond(&bot, &msg, outcome).await
}
