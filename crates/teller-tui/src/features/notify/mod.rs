//! Notification feature slice.
//!
//! One transient banner at a time: errors and successes are shown the same
//! way and auto-dismiss after a fixed timer. A newer notification replaces
//! the current one immediately.

mod render;
mod state;

pub use render::banner;
pub use state::{NOTICE_TTL, Notice, NoticeKind, NoticeState};
