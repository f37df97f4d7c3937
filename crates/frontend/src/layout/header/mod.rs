pub mod header;
pub mod model_toggle;

pub use header::Header;
pub use model_toggle::ModelToggle;
