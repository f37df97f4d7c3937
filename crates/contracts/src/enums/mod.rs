pub mod model_backend;

pub use model_backend::ModelBackend;
