//! Publish use case.

use std::sync::Arc;

use crate::domain::DocumentId;
use crate::usecases::ports::{DocumentStore, DocumentStoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishInput {
    pub document_id: DocumentId,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutput {
    pub document_id: DocumentId,
    pub previous_title: String,
    pub title: String,
}

pub trait PublishChartUseCase: Send + Sync {
    fn execute(&self, input: PublishInput) -> Result<PublishOutput, DocumentStoreError>;
}

pub struct PublishChartUseCaseImpl<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> PublishChartUseCaseImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: DocumentStore> PublishChartUseCase for PublishChartUseCaseImpl<S> {
    fn execute(&self, input: PublishInput) -> Result<PublishOutput, DocumentStoreError> {
        let current = self.store.fetch(&input.document_id)?;

        self.store.update(&current, &input.title, &input.content)?;

        Ok(PublishOutput {
            document_id: current.id,
            previous_title: current.title,
            title: input.title,
        })
    }
}
