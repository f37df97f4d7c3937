use serde::{Deserialize, Serialize};

/// Бэкенд инференса, на который уходит запрос чата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelBackend {
    /// Локальная модель через Ollama
    #[default]
    Local,
    /// Удалённый Perplexity AI
    Remote,
}

impl ModelBackend {
    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelBackend::Local => "Local Ollama",
            ModelBackend::Remote => "Perplexity AI",
        }
    }

    /// Значение флага `use_perplexity` в запросе `/chat`
    pub fn use_remote(&self) -> bool {
        matches!(self, ModelBackend::Remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_local() {
        assert_eq!(ModelBackend::default(), ModelBackend::Local);
        assert!(!ModelBackend::default().use_remote());
    }

    #[test]
    fn test_wire_flag() {
        assert!(ModelBackend::Remote.use_remote());
        assert!(!ModelBackend::Local.use_remote());
    }

    #[test]
    fn test_display_names_differ() {
        assert_ne!(
            ModelBackend::Local.display_name(),
            ModelBackend::Remote.display_name()
        );
    }
}
