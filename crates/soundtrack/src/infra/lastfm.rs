//! Last.fm web service client.
//!
//! Only the two read-only methods the chart needs are implemented:
//! `user.gettopartists` and `artist.getinfo`. Every response body is checked
//! for the `{ "error": n, "message": "..." }` envelope before the HTTP status,
//! because Last.fm reports API errors with both.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{ArtistStats, ListeningWindow, TopArtist};
use crate::usecases::ports::{ListeningHistory, ListeningHistoryError};

pub const DEFAULT_LASTFM_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

pub struct LastfmClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl LastfmClient {
    pub fn new(http: Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    fn method_url(&self, method: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("method", method);
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("api_key", &self.api_key);
            query.append_pair("format", "json");
        }
        url
    }

    fn top_artists_url(&self, user: &str, window: ListeningWindow, limit: usize) -> Url {
        let limit = limit.to_string();
        self.method_url(
            "user.gettopartists",
            &[
                ("user", user),
                ("period", window.as_period()),
                ("limit", &limit),
            ],
        )
    }

    fn artist_info_url(&self, user: &str, artist: &str) -> Url {
        self.method_url("artist.getinfo", &[("artist", artist), ("username", user)])
    }

    fn get<T: DeserializeOwned>(&self, method: &str, url: Url) -> Result<T, ListeningHistoryError> {
        debug!(method, "Last.fm request");
        let response = self.http.get(url).send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;
        debug!(method, status, bytes = body.len(), "Last.fm response");
        decode_response(status, &body)
    }
}

impl ListeningHistory for LastfmClient {
    fn top_artists(
        &self,
        user: &str,
        window: ListeningWindow,
        limit: usize,
    ) -> Result<Vec<TopArtist>, ListeningHistoryError> {
        let url = self.top_artists_url(user, window, limit);
        let response: TopArtistsResponse = self.get("user.gettopartists", url)?;
        response.into_top_artists()
    }

    fn artist_info(&self, user: &str, artist: &str) -> Result<ArtistStats, ListeningHistoryError> {
        let url = self.artist_info_url(user, artist);
        let response: ArtistInfoResponse = self.get("artist.getinfo", url)?;
        response.into_stats()
    }
}

fn transport_error(err: reqwest::Error) -> ListeningHistoryError {
    if err.is_timeout() {
        ListeningHistoryError::Timeout
    } else {
        ListeningHistoryError::Transport(err.to_string())
    }
}

fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ListeningHistoryError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(ListeningHistoryError::Api {
            code: envelope.error,
            message: envelope.message,
        });
    }
    if !(200..300).contains(&status) {
        return Err(ListeningHistoryError::Http { status });
    }
    serde_json::from_str(body).map_err(|err| ListeningHistoryError::Decode(err.to_string()))
}

fn parse_count(field: &str, artist: &str, raw: &str) -> Result<u64, ListeningHistoryError> {
    raw.trim().parse().map_err(|_| {
        ListeningHistoryError::Decode(format!("invalid {field} {raw:?} for artist {artist:?}"))
    })
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: i64,
    #[serde(default)]
    message: String,
}

// A page holding one artist can come back as a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
struct TopArtistsResponse {
    topartists: TopArtistsPage,
}

#[derive(Debug, Deserialize)]
struct TopArtistsPage {
    #[serde(default)]
    artist: OneOrMany<ArtistDto>,
}

#[derive(Debug, Deserialize)]
struct ArtistDto {
    name: String,
    playcount: String,
    #[serde(rename = "@attr", default)]
    attr: Option<RankAttr>,
}

#[derive(Debug, Deserialize)]
struct RankAttr {
    rank: String,
}

impl TopArtistsResponse {
    fn into_top_artists(self) -> Result<Vec<TopArtist>, ListeningHistoryError> {
        self.topartists
            .artist
            .into_vec()
            .into_iter()
            .enumerate()
            .map(|(index, dto)| {
                let play_count = parse_count("playcount", &dto.name, &dto.playcount)?;
                let fallback_rank = u32::try_from(index + 1).unwrap_or(u32::MAX);
                let rank = dto
                    .attr
                    .and_then(|attr| attr.rank.trim().parse().ok())
                    .unwrap_or(fallback_rank);
                Ok(TopArtist {
                    name: dto.name,
                    play_count,
                    rank,
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ArtistInfoResponse {
    artist: ArtistInfoDto,
}

#[derive(Debug, Deserialize)]
struct ArtistInfoDto {
    name: String,
    #[serde(default)]
    stats: Option<StatsDto>,
}

#[derive(Debug, Deserialize)]
struct StatsDto {
    #[serde(default)]
    userplaycount: Option<String>,
}

impl ArtistInfoResponse {
    fn into_stats(self) -> Result<ArtistStats, ListeningHistoryError> {
        let name = self.artist.name;
        let user_play_count = self
            .artist
            .stats
            .and_then(|stats| stats.userplaycount)
            .map(|raw| parse_count("userplaycount", &name, &raw))
            .transpose()?;
        Ok(ArtistStats { user_play_count })
    }
}
