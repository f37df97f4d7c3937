//! EduGPT session controller
//!
//! Structure:
//! - mod.rs: `EduGptSession`, the one controller object of a page session
//! - in_flight.rs: one outstanding request per stream
//! - pending_files.rs: Pending File Set
//! - transcript.rs: Transcript and its entries
//!
//! The state machines themselves live in the use cases
//! (`u101_process_documents::batch`, `u102_chat::turn`); the session owns the
//! signals, fires the requests and applies the outcomes.

pub mod in_flight;
pub mod pending_files;
pub mod transcript;

use crate::shared::config::ClientConfig;
use crate::system::status::api::fetch_status;
use crate::usecases::u101_process_documents::api::{fetch_uploaded_files, process_documents};
use crate::usecases::u101_process_documents::batch::{BatchResult, DocumentBatch};
use crate::usecases::u102_chat::api::send_chat;
use crate::usecases::u102_chat::quick_actions::QuickAction;
use crate::usecases::u102_chat::turn::ChatTurn;
use contracts::enums::ModelBackend;
use leptos::prelude::*;
use in_flight::{InFlight, Stream};
use leptos::task::spawn_local;
use pending_files::PendingFiles;
use transcript::Transcript;

/// What the status indicator next to the toggles shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendStatus {
    pub label: String,
    pub dot_class: &'static str,
    pub color: &'static str,
}

impl BackendStatus {
    pub fn of(backend: ModelBackend, local_model: &str) -> Self {
        match backend {
            ModelBackend::Local => Self {
                label: format!("{} ({})", backend.display_name(), local_model),
                dot_class: "status-dot status-local",
                color: "#28a745",
            },
            ModelBackend::Remote => Self {
                label: format!("{} (Online)", backend.display_name()),
                dot_class: "status-dot status-perplexity",
                color: "#007bff",
            },
        }
    }
}

/// Backend selected after the control for `control` changed to `checked`.
/// Unchecking one control selects the other, so exactly one stays on.
pub fn toggled(control: ModelBackend, checked: bool) -> ModelBackend {
    match (control, checked) {
        (backend, true) => backend,
        (ModelBackend::Local, false) => ModelBackend::Remote,
        (ModelBackend::Remote, false) => ModelBackend::Local,
    }
}

#[derive(Clone, Copy)]
pub struct EduGptSession {
    pub backend: RwSignal<ModelBackend>,
    pub local_model: StoredValue<String>,
    pub pending: RwSignal<PendingFiles<web_sys::File>, LocalStorage>,
    pub transcript: RwSignal<Transcript>,
    pub input: RwSignal<String>,
    /// Documents already in the knowledge base
    pub processed_files: RwSignal<Vec<String>>,
    pub drag_active: RwSignal<bool>,
    pub in_flight: RwSignal<InFlight>,
}

impl EduGptSession {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            backend: RwSignal::new(ModelBackend::default()),
            local_model: StoredValue::new(config.local_model.clone()),
            pending: RwSignal::new_local(PendingFiles::new()),
            transcript: RwSignal::new(Transcript::new()),
            input: RwSignal::new(String::new()),
            processed_files: RwSignal::new(Vec::new()),
            drag_active: RwSignal::new(false),
            in_flight: RwSignal::new(InFlight::default()),
        }
    }

    // ---- Model selection ----

    pub fn set_backend(&self, backend: ModelBackend) {
        if self.backend.get_untracked() != backend {
            log::info!("Backend switched to {}", backend.display_name());
        }
        self.backend.set(backend);
    }

    pub fn toggle_local(&self, checked: bool) {
        self.set_backend(toggled(ModelBackend::Local, checked));
    }

    pub fn toggle_remote(&self, checked: bool) {
        self.set_backend(toggled(ModelBackend::Remote, checked));
    }

    /// Reactive: re-evaluates when the backend changes
    pub fn status(&self) -> BackendStatus {
        let backend = self.backend.get();
        self.local_model
            .with_value(|model| BackendStatus::of(backend, model))
    }

    // ---- File staging ----

    pub fn stage(&self, files: Vec<web_sys::File>) {
        let offered = files.len();
        let mut accepted = 0;
        self.pending.update(|pending| accepted = pending.stage(files));
        if accepted < offered {
            log::debug!("Skipped {} unsupported file(s)", offered - accepted);
        }
    }

    pub fn stage_file_list(&self, list: &web_sys::FileList) {
        let files = (0..list.length()).filter_map(|i| list.get(i)).collect();
        self.stage(files);
    }

    pub fn unstage(&self, name: &str) {
        self.pending.update(|pending| {
            pending.unstage(name);
        });
    }

    /// Reactive
    pub fn is_busy(&self, stream: Stream) -> bool {
        self.in_flight.with(|in_flight| in_flight.is_busy(stream))
    }

    pub fn submit_documents(&self) {
        let mut batch = None;
        self.in_flight.maybe_update(|in_flight| {
            batch = in_flight.start(Stream::Upload, || {
                match self.pending.with_untracked(DocumentBatch::begin) {
                    Ok(batch) => Some(batch),
                    Err(alert) => {
                        show_alert(alert);
                        None
                    }
                }
            });
            batch.is_some()
        });
        let Some(mut batch) = batch else {
            return;
        };
        self.transcript.update(|transcript| batch.announce(transcript));

        let session = *self;
        spawn_local(async move {
            let outcome = process_documents(batch.files()).await;
            if let Err(e) = &outcome {
                log::error!("Document processing failed: {}", e);
            }

            let mut result = BatchResult::Failed;
            session.pending.update(|pending| {
                session
                    .transcript
                    .update(|transcript| result = batch.resolve(pending, transcript, outcome));
            });

            if let BatchResult::Processed { count, files } = result {
                log::info!("Processed {} document(s)", count);
                if files.is_empty() {
                    session.refresh_processed_files();
                } else {
                    session.processed_files.set(files);
                }
            }
            session.in_flight.update(|in_flight| in_flight.finish(Stream::Upload));
        });
    }

    // ---- Chat ----

    pub fn send_message(&self) {
        let input = self.input.get_untracked();
        let backend = self.backend.get_untracked();
        let local_model = self.local_model.get_value();

        let mut turn = None;
        self.in_flight.maybe_update(|in_flight| {
            turn = in_flight.start(Stream::Chat, || {
                let mut turn = None;
                self.transcript.maybe_update(|transcript| {
                    turn = ChatTurn::begin(transcript, &input, backend, &local_model);
                    turn.is_some()
                });
                turn
            });
            turn.is_some()
        });
        let Some(turn) = turn else {
            return;
        };

        self.input.set(String::new());

        let session = *self;
        spawn_local(async move {
            log::debug!("Chat request via {}", turn.backend.display_name());
            let outcome = send_chat(&turn.request).await;
            if let Err(e) = &outcome {
                log::error!("Chat request failed: {}", e);
            }
            session
                .transcript
                .update(|transcript| turn.resolve(transcript, outcome));
            session.in_flight.update(|in_flight| in_flight.finish(Stream::Chat));
        });
    }

    pub fn quick_action(&self, action: QuickAction) {
        self.input.set(action.prompt().to_string());
        self.send_message();
    }

    // ---- Backend state ----

    pub fn refresh_processed_files(&self) {
        let session = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_uploaded_files().await {
                Ok(files) => session.processed_files.set(files),
                Err(e) => log::warn!("Could not load processed documents: {}", e),
            }
        });
    }

    /// Logs the backend status once; failures are swallowed.
    pub fn check_system_status(&self) {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_status().await {
                Ok(status) => {
                    log::info!("System status: {}", status.summary());
                    if let Ok(raw) = serde_json::to_string(&status) {
                        log::debug!("System status payload: {}", raw);
                    }
                }
                Err(e) => log::warn!("Could not check system status: {}", e),
            }
        });
    }
}

/// Session of the current page
pub fn use_session() -> EduGptSession {
    use_context::<EduGptSession>().expect("EduGptSession not provided")
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
