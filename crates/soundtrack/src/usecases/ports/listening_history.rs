use crate::domain::{ArtistStats, ListeningWindow, TopArtist};

use super::ListeningHistoryError;

/// Source of a user's scrobbled listening history.
pub trait ListeningHistory: Send + Sync {
    /// Most-played artists in `window`, best first, at most `limit` of them.
    fn top_artists(
        &self,
        user: &str,
        window: ListeningWindow,
        limit: usize,
    ) -> Result<Vec<TopArtist>, ListeningHistoryError>;

    fn artist_info(&self, user: &str, artist: &str) -> Result<ArtistStats, ListeningHistoryError>;
}
