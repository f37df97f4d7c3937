//! Отладочный статус бэкенда (`GET /debug/status`)
//!
//! Формат ответа не зафиксирован: известные поля разбираются, остальное
//! складывается в `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATUS_ENDPOINT: &str = "/debug/status";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_store_loaded: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_exists: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_exists: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama_available: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SystemStatus {
    /// Короткая строка для лога
    pub fn summary(&self) -> String {
        fn flag(v: Option<bool>) -> &'static str {
            match v {
                Some(true) => "yes",
                Some(false) => "no",
                None => "?",
            }
        }
        format!(
            "documents={} vector_store_loaded={} index={} ollama={}",
            self.processed_files.as_ref().map(|f| f.len()).unwrap_or(0),
            flag(self.vector_store_loaded),
            flag(self.index_exists),
            flag(self.ollama_available),
        )
    }
}
