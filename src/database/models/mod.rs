//! Database models.

mod admin_action;
mod antiabuse;
mod locks;
mod user;
mod warn;
mod welcome;

pub use admin_action::{AdminActionRecord, ACTION_WINDOW_SECS};
pub use antiabuse::AntiAbuseSettings;
pub use locks::{LockFlags, LockSettings, LockType};
pub use user::TrackedUser;
pub use warn::WarnRecord;
pub use welcome::WelcomeSettings;
