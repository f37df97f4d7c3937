use serde::{Deserialize, Serialize};

/// Фрагмент документа, на который опирается ответ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub filename: String,

    /// Релевантность фрагмента, если бэкенд её посчитал
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default)]
    pub content: String,
}

/// Ответ `POST /chat`
///
/// Ни одно поле не обязательно: бэкенд присылает либо `response`, либо `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceCitation>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_with_sources() {
        let body = r#"{
            "response": "Paris is the capital",
            "sources": [
                {"filename": "geo.pdf", "score": 0.842, "content": "France ..."},
                {"filename": "notes.txt", "content": "Europe ..."}
            ]
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.response.as_deref(), Some("Paris is the capital"));
        let sources = resp.sources.unwrap();
        assert_eq!(sources[0].score, Some(0.842));
        assert_eq!(sources[1].score, None);
        assert_eq!(sources[1].filename, "notes.txt");
    }

    #[test]
    fn test_error_only() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"error": "No documents processed yet."}"#).unwrap();
        assert_eq!(resp.response, None);
        assert_eq!(resp.error.as_deref(), Some("No documents processed yet."));
    }

    #[test]
    fn test_null_score() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"response": "ok", "sources": [{"filename": "a.pdf", "score": null, "content": ""}]}"#,
        )
        .unwrap();
        assert_eq!(resp.sources.unwrap()[0].score, None);
    }
}
