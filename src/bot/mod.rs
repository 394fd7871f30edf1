//! Bot setup and dispatching.

pub mod dispatcher;

pub use dispatcher::{build_dispatcher, AppState, ThrottledBot};
