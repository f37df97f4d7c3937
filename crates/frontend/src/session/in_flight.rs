//! One outstanding request per stream.
//!
//! Chat and document processing are guarded separately, so an upload may run
//! while a chat answer is pending and the other way round.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Chat,
    Upload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    chat: bool,
    upload: bool,
}

impl InFlight {
    pub fn is_busy(&self, stream: Stream) -> bool {
        match stream {
            Stream::Chat => self.chat,
            Stream::Upload => self.upload,
        }
    }

    /// Runs `begin` only while `stream` is idle. The stream is marked busy
    /// when `begin` yields a request; `None` from `begin` leaves it idle.
    pub fn start<T>(&mut self, stream: Stream, begin: impl FnOnce() -> Option<T>) -> Option<T> {
        if self.is_busy(stream) {
            log::debug!("{:?} request already in flight, ignoring", stream);
            return None;
        }
        let started = begin();
        if started.is_some() {
            self.set(stream, true);
        }
        started
    }

    pub fn finish(&mut self, stream: Stream) {
        self.set(stream, false);
    }

    fn set(&mut self, stream: Stream, busy: bool) {
        match stream {
            Stream::Chat => self.chat = busy,
            Stream::Upload => self.upload = busy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::pending_files::tests::{staged, FakeFile};
    use crate::session::pending_files::PendingFiles;
    use crate::session::transcript::Transcript;
    use crate::usecases::u101_process_documents::batch::DocumentBatch;
    use crate::usecases::u102_chat::turn::ChatTurn;
    use contracts::enums::ModelBackend;

    const MODEL: &str = "llama3.1:8b";

    #[test]
    fn test_second_send_while_chat_in_flight_is_ignored() {
        let mut in_flight = InFlight::default();
        let mut transcript = Transcript::new();

        let first = in_flight.start(Stream::Chat, || {
            ChatTurn::begin(&mut transcript, "first", ModelBackend::Local, MODEL)
        });
        assert!(first.is_some());
        assert!(in_flight.is_busy(Stream::Chat));
        let entries_after_first = transcript.len();

        let mut attempted = false;
        let second = in_flight.start(Stream::Chat, || {
            attempted = true;
            ChatTurn::begin(&mut transcript, "second", ModelBackend::Local, MODEL)
        });
        assert!(second.is_none());
        assert!(!attempted);
        assert_eq!(transcript.len(), entries_after_first);
    }

    #[test]
    fn test_chat_accepted_again_after_finish() {
        let mut in_flight = InFlight::default();
        let mut transcript = Transcript::new();

        let turn = in_flight
            .start(Stream::Chat, || {
                ChatTurn::begin(&mut transcript, "first", ModelBackend::Remote, MODEL)
            })
            .unwrap();
        turn.resolve(&mut transcript, Err("Failed to fetch".into()));
        in_flight.finish(Stream::Chat);

        assert!(!in_flight.is_busy(Stream::Chat));
        let next = in_flight.start(Stream::Chat, || {
            ChatTurn::begin(&mut transcript, "again", ModelBackend::Remote, MODEL)
        });
        assert!(next.is_some());
    }

    #[test]
    fn test_upload_and_chat_overlap() {
        let mut in_flight = InFlight::default();
        let mut transcript = Transcript::new();
        let pending = staged(&["notes.pdf"]);

        let turn = in_flight.start(Stream::Chat, || {
            ChatTurn::begin(&mut transcript, "hi", ModelBackend::Local, MODEL)
        });
        let batch = in_flight.start(Stream::Upload, || DocumentBatch::begin(&pending).ok());

        assert!(turn.is_some());
        assert!(batch.is_some());
        assert!(in_flight.is_busy(Stream::Chat));
        assert!(in_flight.is_busy(Stream::Upload));

        in_flight.finish(Stream::Upload);
        assert!(in_flight.is_busy(Stream::Chat));
        assert!(!in_flight.is_busy(Stream::Upload));
    }

    #[test]
    fn test_second_upload_while_in_flight_is_ignored() {
        let mut in_flight = InFlight::default();
        let pending = staged(&["a.pdf"]);

        assert!(in_flight
            .start(Stream::Upload, || DocumentBatch::begin(&pending).ok())
            .is_some());
        assert!(in_flight
            .start(Stream::Upload, || DocumentBatch::begin(&pending).ok())
            .is_none());
    }

    #[test]
    fn test_rejected_begin_leaves_stream_idle() {
        let mut in_flight = InFlight::default();
        let mut transcript = Transcript::new();
        let empty: PendingFiles<FakeFile> = PendingFiles::new();

        let turn = in_flight.start(Stream::Chat, || {
            ChatTurn::begin(&mut transcript, "   ", ModelBackend::Local, MODEL)
        });
        let batch = in_flight.start(Stream::Upload, || DocumentBatch::begin(&empty).ok());

        assert!(turn.is_none());
        assert!(batch.is_none());
        assert_eq!(in_flight, InFlight::default());
        assert!(transcript.is_empty());
    }
}
