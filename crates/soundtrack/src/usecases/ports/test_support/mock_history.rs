use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{ArtistStats, ListeningWindow, TopArtist};
use crate::usecases::ports::{ListeningHistory, ListeningHistoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCall {
    TopArtists {
        user: String,
        window: ListeningWindow,
        limit: usize,
    },
    ArtistInfo {
        user: String,
        artist: String,
    },
}

pub struct MockListeningHistory {
    top_artists: Result<Vec<TopArtist>, ListeningHistoryError>,
    stats: HashMap<String, Result<ArtistStats, ListeningHistoryError>>,
    calls: Mutex<Vec<HistoryCall>>,
}

impl MockListeningHistory {
    pub fn new() -> Self {
        Self {
            top_artists: Ok(Vec::new()),
            stats: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_artist(mut self, name: &str, play_count: u64) -> Self {
        if let Ok(artists) = &mut self.top_artists {
            let rank = artists.len() as u32 + 1;
            artists.push(TopArtist {
                name: name.to_string(),
                play_count,
                rank,
            });
        }
        self
    }

    pub fn with_top_artists_error(mut self, error: ListeningHistoryError) -> Self {
        self.top_artists = Err(error);
        self
    }

    pub fn with_user_play_count(mut self, name: &str, user_play_count: u64) -> Self {
        self.stats.insert(
            name.to_string(),
            Ok(ArtistStats {
                user_play_count: Some(user_play_count),
            }),
        );
        self
    }

    pub fn with_artist_info_error(mut self, name: &str, error: ListeningHistoryError) -> Self {
        self.stats.insert(name.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<HistoryCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ListeningHistory for MockListeningHistory {
    fn top_artists(
        &self,
        user: &str,
        window: ListeningWindow,
        limit: usize,
    ) -> Result<Vec<TopArtist>, ListeningHistoryError> {
        self.calls.lock().unwrap().push(HistoryCall::TopArtists {
            user: user.to_string(),
            window,
            limit,
        });
        self.top_artists.clone()
    }

    fn artist_info(&self, user: &str, artist: &str) -> Result<ArtistStats, ListeningHistoryError> {
        self.calls.lock().unwrap().push(HistoryCall::ArtistInfo {
            user: user.to_string(),
            artist: artist.to_string(),
        });
        self.stats
            .get(artist)
            .cloned()
            .unwrap_or(Ok(ArtistStats::default()))
    }
}
