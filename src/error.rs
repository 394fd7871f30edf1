//! Domain error types for moderation commands.
//!
//! Command handlers resolve targets and issue platform actions through
//! explicit `Result` types; the `Display` text of each error is what the
//! bot posts back into the chat.

use thiserror::Error;

/// Why a command target could not be resolved.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No reply and no argument was given.
    #[error("⚠️ Reply to a user or pass @username / a numeric id.")]
    MissingTarget,

    /// The argument did not resolve to any known user.
    #[error("⚠️ Could not find user {0}.")]
    UnknownUser(String),
}

/// Why a moderation command failed.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The invoking user lacks the required role.
    #[error("❌ Only group admins can use this command.")]
    AdminRequired,

    /// The invoking user is not the group owner.
    #[error("❌ Only the group owner can use this command.")]
    OwnerRequired,

    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Telegram rejected the requested mutation (e.g. the bot lacks
    /// the needed privilege). Already-applied state is never rolled back.
    #[error("❌ Action failed: {0}")]
    Platform(#[from] teloxide::RequestError),

    /// Anything else the handler wants to surface verbatim.
    #[error("{0}")]
    Rejected(String),
}

impl ActionError {
    pub fn rejected(text: impl Into<String>) -> Self {
        Self::Rejected(text.into())
    }
}

// Storage failures inside a command handler get a generic chat-visible
// message; the real cause goes to the log.
impl From<anyhow::Error> for ActionError {
    fn from(e: anyhow::Error) -> Self {
        tracing::error!("Storage error in command handler: {:#}", e);
        Self::rejected("⚠️ Internal error, try again later.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_rejection_is_chat_visible() {
        // A refused API call (e.g. the unban half of a kick) must surface
        // as a failure message, never as a success report.
        let err = ActionError::from(teloxide::RequestError::Api(teloxide::ApiError::BotBlocked));
        assert!(err.to_string().starts_with("❌ Action failed:"));
    }

    #[test]
    fn test_lookup_errors_pass_through() {
        let err = ActionError::from(LookupError::MissingTarget);
        assert_eq!(
            err.to_string(),
            "⚠️ Reply to a user or pass @username / a numeric id."
        );
    }
}
