mod fixed_clock;
mod mock_history;
mod mock_store;

pub use fixed_clock::FixedClock;
pub use mock_history::{HistoryCall, MockListeningHistory};
pub use mock_store::{MockDocumentStore, RecordedUpdate};
