pub mod status;

pub use status::{SystemStatus, STATUS_ENDPOINT};
