//! u101: staging study documents and sending them for processing
//!
//! - api.rs: HTTP calls
//! - batch.rs: submit state machine
//! - view.rs: `UploadPanel`

pub mod api;
pub mod batch;
pub mod view;

pub use view::UploadPanel;
