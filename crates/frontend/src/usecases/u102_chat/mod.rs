//! u102: chat with the selected backend
//!
//! - api.rs: HTTP call
//! - turn.rs: per-turn state machine
//! - quick_actions.rs: canned prompts
//! - view.rs: `ChatPanel`

pub mod api;
pub mod quick_actions;
pub mod turn;
pub mod view;

pub use view::ChatPanel;
