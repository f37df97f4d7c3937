use crate::enums::ModelBackend;
use serde::{Deserialize, Serialize};

/// Тело `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// `true`: Perplexity AI, `false`: локальная модель
    pub use_perplexity: bool,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, backend: ModelBackend) -> Self {
        Self {
            message: message.into(),
            use_perplexity: backend.use_remote(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let req = ChatRequest::new("What is entropy?", ModelBackend::Remote);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "What is entropy?", "use_perplexity": true})
        );
    }

    #[test]
    fn test_local_flag() {
        let req = ChatRequest::new("hi", ModelBackend::Local);
        assert!(!req.use_perplexity);
    }
}
