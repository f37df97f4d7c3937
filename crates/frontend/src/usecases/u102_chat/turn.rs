//! One chat turn: `awaiting-response` -> `resolved`

use crate::session::transcript::{Transcript, TranscriptEntry};
use contracts::enums::ModelBackend;
use contracts::usecases::u102_chat::{ChatRequest, ChatResponse};
use uuid::Uuid;

pub const UNEXPECTED_REPLY: &str = "Sorry, I encountered an unexpected error. Please try again.";

/// "Powered by" label for answers of this backend
pub fn model_label(backend: ModelBackend, local_model: &str) -> String {
    match backend {
        ModelBackend::Local => format!("{} ({})", backend.display_name(), local_model),
        ModelBackend::Remote => backend.display_name().to_string(),
    }
}

/// A turn whose request is in flight
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub request: ChatRequest,
    pub backend: ModelBackend,
    loading_id: Uuid,
    model_label: String,
}

impl ChatTurn {
    /// Records the user message and the loading placeholder.
    ///
    /// Returns `None` for empty or whitespace-only input; the transcript is
    /// then left untouched and no request must be sent.
    pub fn begin(
        transcript: &mut Transcript,
        input: &str,
        backend: ModelBackend,
        local_model: &str,
    ) -> Option<Self> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        transcript.push(TranscriptEntry::user(message));
        let loading_id =
            transcript.show_loading(format!("Thinking with {}...", backend.display_name()));

        Some(Self {
            request: ChatRequest::new(message, backend),
            backend,
            loading_id,
            model_label: model_label(backend, local_model),
        })
    }

    /// Replaces the placeholder with the answer, the backend error or the
    /// transport error.
    pub fn resolve(self, transcript: &mut Transcript, outcome: Result<ChatResponse, String>) {
        transcript.hide_loading(self.loading_id);
        let entry = self.reply_entry(outcome);
        transcript.push(entry);
    }

    fn reply_entry(self, outcome: Result<ChatResponse, String>) -> TranscriptEntry {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => return TranscriptEntry::bot(format!("Network error: {}", e)),
        };

        if let Some(error) = response.error.filter(|e| !e.is_empty()) {
            return TranscriptEntry::bot(format!("Error: {}", error));
        }

        match response.response.filter(|text| !text.is_empty()) {
            Some(text) => TranscriptEntry::bot(text)
                .with_sources(response.sources.unwrap_or_default())
                .with_model_label(self.model_label),
            None => TranscriptEntry::bot(UNEXPECTED_REPLY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::transcript::Speaker;
    use crate::shared::format::source_heading;
    use contracts::usecases::u102_chat::SourceCitation;

    const MODEL: &str = "llama3.1:8b";

    #[test]
    fn test_whitespace_input_is_noop() {
        let mut transcript = Transcript::new();
        for input in ["", "   ", "\t\n "] {
            assert!(ChatTurn::begin(&mut transcript, input, ModelBackend::Local, MODEL).is_none());
        }
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_begin_records_user_and_placeholder() {
        let mut transcript = Transcript::new();
        let turn = ChatTurn::begin(&mut transcript, "  What is osmosis? ", ModelBackend::Local, MODEL)
            .unwrap();

        assert_eq!(turn.request.message, "What is osmosis?");
        assert!(!turn.request.use_perplexity);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::User);
        assert_eq!(transcript.entries()[0].body, "What is osmosis?");
        let loading = transcript.loading().unwrap();
        assert_eq!(loading.body, "Thinking with Local Ollama...");
    }

    #[test]
    fn test_remote_answer_with_sources() {
        let mut transcript = Transcript::new();
        let turn =
            ChatTurn::begin(&mut transcript, "Capital of France?", ModelBackend::Remote, MODEL)
                .unwrap();
        assert!(turn.request.use_perplexity);

        let response = ChatResponse {
            response: Some("Paris is the capital".to_string()),
            sources: Some(vec![SourceCitation {
                filename: "geo.pdf".to_string(),
                score: Some(0.842),
                content: "...".to_string(),
            }]),
            error: None,
        };
        turn.resolve(&mut transcript, Ok(response));

        assert!(transcript.loading().is_none());
        assert_eq!(transcript.len(), 2);
        let answer = transcript.last().unwrap();
        assert_eq!(answer.speaker, Speaker::Bot);
        assert_eq!(answer.body, "Paris is the capital");
        assert_eq!(source_heading(&answer.sources[0]), "geo.pdf (Score: 0.842)");
        assert_eq!(answer.model_label.as_deref(), Some("Perplexity AI"));
    }

    #[test]
    fn test_local_answer_label_names_model() {
        let mut transcript = Transcript::new();
        let turn = ChatTurn::begin(&mut transcript, "hi", ModelBackend::Local, MODEL).unwrap();
        turn.resolve(
            &mut transcript,
            Ok(ChatResponse {
                response: Some("hello".to_string()),
                ..Default::default()
            }),
        );
        let answer = transcript.last().unwrap();
        assert_eq!(answer.model_label.as_deref(), Some("Local Ollama (llama3.1:8b)"));
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_backend_error_wins_over_response() {
        let mut transcript = Transcript::new();
        let turn = ChatTurn::begin(&mut transcript, "hi", ModelBackend::Local, MODEL).unwrap();
        turn.resolve(
            &mut transcript,
            Ok(ChatResponse {
                response: Some("ignored".to_string()),
                sources: None,
                error: Some("No documents processed yet.".to_string()),
            }),
        );
        let entry = transcript.last().unwrap();
        assert_eq!(entry.body, "Error: No documents processed yet.");
        assert_eq!(entry.model_label, None);
    }

    #[test]
    fn test_empty_reply_is_unexpected() {
        let mut transcript = Transcript::new();
        let turn = ChatTurn::begin(&mut transcript, "hi", ModelBackend::Remote, MODEL).unwrap();
        turn.resolve(&mut transcript, Ok(ChatResponse::default()));
        assert_eq!(transcript.last().unwrap().body, UNEXPECTED_REPLY);
    }

    #[test]
    fn test_transport_failure() {
        let mut transcript = Transcript::new();
        transcript.push(TranscriptEntry::bot("earlier"));
        let before = transcript.len();

        let turn = ChatTurn::begin(&mut transcript, "hi", ModelBackend::Local, MODEL).unwrap();
        turn.resolve(&mut transcript, Err("Failed to fetch".to_string()));

        assert_eq!(transcript.len(), before + 2);
        assert!(transcript.loading().is_none());
        let errors = transcript
            .entries()
            .iter()
            .filter(|e| e.body.starts_with("Network error:"))
            .count();
        assert_eq!(errors, 1);
        assert_eq!(transcript.last().unwrap().body, "Network error: Failed to fetch");
    }
}
