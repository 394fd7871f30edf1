//! Message dispatcher setup.
//!
//! Builds the dispatcher with all command handlers and event handlers.

use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::database::{
    AdminActionsRepository, AntiAbuseRepository, Database, LocksRepository, UserRepo,
    WarnsRepository, WelcomeRepository,
};
use crate::events;
use crate::permissions::Permissions;
use crate::plugins;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Live permission checker (no caching).
    pub permissions: Permissions,

    /// User repository for tracking and resolving users.
    pub users: Arc<UserRepo>,

    /// Per-chat welcome settings.
    pub welcome: Arc<WelcomeRepository>,

    /// Per-chat content locks.
    pub locks: Arc<LocksRepository>,

    /// Per-user warning counters.
    pub warns: Arc<WarnsRepository>,

    /// Rolling-window admin action tallies.
    pub admin_actions: Arc<AdminActionsRepository>,

    /// Per-chat anti-abuse toggle.
    pub antiabuse: Arc<AntiAbuseRepository>,

    /// Admin actions allowed per rolling window before auto-demotion.
    pub admin_action_limit: u32,
}

impl AppState {
    /// Create a new application state.
    pub fn new(bot: ThrottledBot, db: &Database, admin_action_limit: u32) -> Self {
        // Permissions needs the inner Bot for API calls
        let permissions = Permissions::new(bot.inner().clone());

        let users = Arc::new(UserRepo::new(db));
        let welcome = Arc::new(WelcomeRepository::new(db));
        let locks = Arc::new(LocksRepository::new(db));
        let warns = Arc::new(WarnsRepository::new(db));
        let admin_actions = Arc::new(AdminActionsRepository::new(db));
        let antiabuse = Arc::new(AntiAbuseRepository::new(db));

        Self {
            permissions,
            users,
            welcome,
            locks,
            warns,
            admin_actions,
            antiabuse,
            admin_action_limit,
        }
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(
    bot: ThrottledBot,
    db: Arc<Database>,
    admin_action_limit: u32,
) -> Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey> {
    let state = AppState::new(bot.clone(), &db, admin_action_limit);

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
fn schema() -> UpdateHandler<anyhow::Error> {
    use teloxide::dispatching::UpdateFilterExt;

    // Message handlers: user tracking first, then commands, then lock
    // enforcement on everything else.
    let message_handler = Update::filter_message()
        .inspect_async(track_user)
        .branch(plugins::command_handler())
        .branch(events::message_event_handler());

    // Chat member events (welcome new members, audit admin bans)
    let member_handler = Update::filter_chat_member().branch(events::event_handler());

    // The bot's own membership: drop chat data when removed
    let my_member_handler = Update::filter_my_chat_member().branch(events::removal_handler());

    dptree::entry()
        .branch(message_handler)
        .branch(member_handler)
        .branch(my_member_handler)
}

/// Track user from message (runs before all handlers).
async fn track_user(msg: Message, state: AppState) {
    if let Some(user) = msg.from.as_ref() {
        state.users.clone().upsert_background(user.clone());
    }
}
