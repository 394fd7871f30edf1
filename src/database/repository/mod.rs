//! Repositories, one per collection.
//!
//! Every write is a field-level `$set` upsert, so concurrent writers to
//! different fields of the same document never clobber each other.

mod admin_actions_repository;
mod antiabuse_repository;
mod locks_repository;
mod warns_repository;
mod welcome_repository;

pub use admin_actions_repository::AdminActionsRepository;
pub use antiabuse_repository::AntiAbuseRepository;
pub use locks_repository::LocksRepository;
pub use warns_repository::WarnsRepository;
pub use welcome_repository::WelcomeRepository;
