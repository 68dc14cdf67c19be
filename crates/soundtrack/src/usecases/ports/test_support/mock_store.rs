use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{Document, DocumentId};
use crate::usecases::ports::{DocumentStore, DocumentStoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    pub id: DocumentId,
    pub previous_title: String,
    pub title: String,
    pub content: String,
}

pub struct MockDocumentStore {
    documents: HashMap<String, Document>,
    update_error: Option<DocumentStoreError>,
    updates: Mutex<Vec<RecordedUpdate>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            update_error: None,
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn with_document(mut self, id: &str, title: &str, content: &str) -> Self {
        self.documents.insert(
            id.to_string(),
            Document {
                id: DocumentId::new(id),
                title: title.to_string(),
                content: content.to_string(),
            },
        );
        self
    }

    pub fn with_update_error(mut self, error: DocumentStoreError) -> Self {
        self.update_error = Some(error);
        self
    }

    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

impl DocumentStore for MockDocumentStore {
    fn fetch(&self, id: &DocumentId) -> Result<Document, DocumentStoreError> {
        self.documents
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| DocumentStoreError::NotFound(id.to_string()))
    }

    fn update(
        &self,
        current: &Document,
        title: &str,
        content: &str,
    ) -> Result<(), DocumentStoreError> {
        if let Some(error) = &self.update_error {
            return Err(error.clone());
        }
        self.updates.lock().unwrap().push(RecordedUpdate {
            id: current.id.clone(),
            previous_title: current.title.clone(),
            title: title.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}
