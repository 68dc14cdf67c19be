pub mod clock;
pub mod document_store;
pub mod errors;
pub mod listening_history;
#[cfg(test)]
pub(crate) mod test_support;

pub use clock::Clock;
pub use document_store::DocumentStore;
pub use errors::{DocumentStoreError, ListeningHistoryError};
pub use listening_history::ListeningHistory;
