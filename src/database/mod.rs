//! Database module exports.

mod models;
mod mongo;
mod repository;
mod users;

pub use models::*;
pub use mongo::Database;
pub use repository::{
    AdminActionsRepository, AntiAbuseRepository, LocksRepository, WarnsRepository,
    WelcomeRepository,
};
pub use users::UserRepo;
