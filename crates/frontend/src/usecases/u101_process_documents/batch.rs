//! Submission of the Pending File Set for processing

use crate::session::pending_files::{PendingFiles, StagedFile};
use crate::session::transcript::{Transcript, TranscriptEntry};
use contracts::usecases::u101_process_documents::ProcessDocumentsResponse;
use uuid::Uuid;

pub const EMPTY_SELECTION_ALERT: &str = "Please upload at least one file first!";
pub const PROCESSING_MESSAGE: &str = "Processing documents and building knowledge base...";

/// Snapshot of the staged files being sent
#[derive(Debug, Clone)]
pub struct DocumentBatch<F> {
    files: Vec<F>,
    loading_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BatchResult {
    /// Knowledge base rebuilt; carries the processed document names
    Processed { count: u32, files: Vec<String> },
    Failed,
}

impl<F: StagedFile> DocumentBatch<F> {
    /// Fails with the alert text when nothing is staged. Touches nothing.
    pub fn begin(pending: &PendingFiles<F>) -> Result<Self, &'static str> {
        if pending.is_empty() {
            return Err(EMPTY_SELECTION_ALERT);
        }
        Ok(Self {
            files: pending.files().to_vec(),
            loading_id: None,
        })
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    /// Shows the processing placeholder.
    pub fn announce(&mut self, transcript: &mut Transcript) {
        self.loading_id = Some(transcript.show_loading(PROCESSING_MESSAGE));
    }

    /// On success the staging queue is cleared; on any failure it is kept so
    /// the user can retry without picking the files again.
    pub fn resolve(
        self,
        pending: &mut PendingFiles<F>,
        transcript: &mut Transcript,
        outcome: Result<ProcessDocumentsResponse, String>,
    ) -> BatchResult {
        if let Some(id) = self.loading_id {
            transcript.hide_loading(id);
        }

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                transcript.push(TranscriptEntry::bot(format!(
                    "Error processing documents: {}",
                    e
                )));
                return BatchResult::Failed;
            }
        };

        if !response.success {
            let error = response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            transcript.push(TranscriptEntry::bot(format!("Error: {}", error)));
            return BatchResult::Failed;
        }

        let count = response
            .processed_files
            .unwrap_or(self.files.len() as u32);
        transcript.push(TranscriptEntry::bot(format!(
            "Successfully processed {} documents! You can now ask questions about your study materials.",
            count
        )));
        pending.clear();

        BatchResult::Processed {
            count,
            files: response.files.unwrap_or_default(),
        }
    }
}
