//! Pending File Set: files picked by the user and not yet sent for processing

use contracts::usecases::u101_process_documents::is_supported_file_name;

/// Anything that can sit in the staging queue
pub trait StagedFile: Clone {
    fn file_name(&self) -> String;
}

impl StagedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Ordered staging queue.
///
/// Insertion keeps duplicates; removal drops every file with the given name.
#[derive(Debug, Clone)]
pub struct PendingFiles<F> {
    files: Vec<F>,
}

impl<F> Default for PendingFiles<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: StagedFile> PendingFiles<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the supported candidates, silently skipping the rest.
    /// Returns how many were accepted.
    pub fn stage<I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let before = self.files.len();
        self.files.extend(
            candidates
                .into_iter()
                .filter(|file| is_supported_file_name(&file.file_name())),
        );
        self.files.len() - before
    }

    /// Removes every file named exactly `name`. Returns how many were removed.
    pub fn unstage(&mut self, name: &str) -> usize {
        let before = self.files.len();
        self.files.retain(|file| file.file_name() != name);
        before - self.files.len()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    /// Names in staging order, as rendered in the file list
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(StagedFile::file_name).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
