//! Backend debug status, checked once on page load

pub mod api;

pub use api::fetch_status;
