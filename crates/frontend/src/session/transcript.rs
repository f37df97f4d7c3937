//! Transcript: the append-only list of chat turns shown to the user

use contracts::usecases::u102_chat::SourceCitation;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Prefix shown before the message body
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "EduGPT",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Speaker::User => "user-message",
            Speaker::Bot => "bot-message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Message,
    /// Placeholder shown while a request is outstanding
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub speaker: Speaker,
    pub kind: EntryKind,
    pub body: String,
    pub sources: Vec<SourceCitation>,
    /// "Powered by" line of bot answers
    pub model_label: Option<String>,
}

impl TranscriptEntry {
    fn new(speaker: Speaker, kind: EntryKind, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            kind,
            body: body.into(),
            sources: Vec::new(),
            model_label: None,
        }
    }

    pub fn user(body: impl Into<String>) -> Self {
        Self::new(Speaker::User, EntryKind::Message, body)
    }

    pub fn bot(body: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, EntryKind::Message, body)
    }

    pub fn loading(body: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, EntryKind::Loading, body)
    }

    pub fn with_sources(mut self, sources: Vec<SourceCitation>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_model_label(mut self, label: impl Into<String>) -> Self {
        self.model_label = Some(label.into());
        self
    }

    pub fn is_loading(&self) -> bool {
        self.kind == EntryKind::Loading
    }
}

/// Entries are never edited once pushed. The only removal is of the
/// loading placeholder, and at most one placeholder exists at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// Appends a message entry.
    pub fn push(&mut self, entry: TranscriptEntry) {
        debug_assert!(!entry.is_loading(), "use show_loading for placeholders");
        self.entries.push(entry);
    }

    /// Appends a loading placeholder, replacing the previous one if any.
    /// Returns the id needed to hide it again.
    pub fn show_loading(&mut self, text: impl Into<String>) -> Uuid {
        self.entries.retain(|entry| !entry.is_loading());
        let entry = TranscriptEntry::loading(text);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes the placeholder with this id. A placeholder that was already
    /// replaced by a newer request stays untouched.
    pub fn hide_loading(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(entry.is_loading() && entry.id == id));
        before != self.entries.len()
    }

    pub fn loading(&self) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|entry| entry.is_loading())
    }
}
