use crate::domain::{Document, DocumentId};

use super::DocumentStoreError;

/// Persisted text documents addressed by id.
pub trait DocumentStore: Send + Sync {
    fn fetch(&self, id: &DocumentId) -> Result<Document, DocumentStoreError>;

    /// Replace `current` with a new title and content.
    ///
    /// Takes the fetched document rather than an id so stores that key content
    /// by title (a gist file name) can rename in place.
    fn update(
        &self,
        current: &Document,
        title: &str,
        content: &str,
    ) -> Result<(), DocumentStoreError>;
}
