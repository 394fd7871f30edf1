//! Target user resolution for moderation commands.
//!
//! A target comes from (in order): the replied-to message, a numeric id
//! argument, a text-mention entity, or an `@username` argument resolved
//! through the users collection.

use teloxide::types::{Message, MessageEntityKind, UserId};

use crate::database::UserRepo;
use crate::error::LookupError;
use crate::utils::command_args;

/// A resolved command target.
pub struct Target {
    pub user_id: UserId,
    pub first_name: String,
}

impl Target {
    fn new(user_id: UserId, first_name: String) -> Self {
        Self { user_id, first_name }
    }
}

/// Resolve the target of a moderation command.
pub async fn resolve_target(msg: &Message, users: &UserRepo) -> Result<Target, LookupError> {
    // 1. Reply takes precedence
    if let Some(reply) = msg.reply_to_message() {
        if let Some(user) = &reply.from {
            return Ok(Target::new(user.id, user.first_name.clone()));
        }
    }

    let text = msg.text().unwrap_or("");
    let args = command_args(text);
    let arg = match args.first() {
        Some(a) => *a,
        None => return Err(LookupError::MissingTarget),
    };

    // 2. Numeric ID
    if let Ok(id) = arg.parse::<u64>() {
        let name = match users.get_by_id(id as i64).await {
            Ok(Some(user)) => user.first_name,
            _ => format!("User {}", id),
        };
        return Ok(Target::new(UserId(id), name));
    }

    // 3. Text-mention entity (users without a username)
    if let Some(entities) = msg.entities() {
        for entity in entities {
            if let MessageEntityKind::TextMention { user } = &entity.kind {
                return Ok(Target::new(user.id, user.first_name.clone()));
            }
        }
    }

    // 4. @username via the users collection
    if let Some(username) = arg.strip_prefix('@') {
        if let Ok(Some(user)) = users.get_by_username(username).await {
            return Ok(Target::new(UserId(user.user_id as u64), user.first_name));
        }
    }

    Err(LookupError::UnknownUser(arg.to_string()))
}
