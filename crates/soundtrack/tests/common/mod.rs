#![allow(dead_code, reason = "Test harness helpers are used selectively.")]

//! Test harness exports.

pub mod mock_http;

pub use mock_http::{MockHttpServer, MockResponse, RecordedRequest};

use assert_cmd::Command;
use serde_json::{Value, json};

const INHERITED_ENV: &[&str] = &[
    "LASTFM_USERNAME",
    "LASTFM_KEY",
    "GIST_ID",
    "GH_TOKEN",
    "RUST_LOG",
    "SOUNDTRACK_LOG",
    "SOUNDTRACK_LOG_FORMAT",
    "SOUNDTRACK_LOG_STREAM",
    "SOUNDTRACK_LASTFM_API_URL",
    "SOUNDTRACK_GITHUB_API_URL",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// The CLI binary with a clean, offline environment.
pub fn soundtrack_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("soundtrack"));
    for key in INHERITED_ENV {
        cmd.env_remove(key);
    }
    cmd.env("NO_PROXY", "127.0.0.1,localhost")
        .env("NO_COLOR", "1")
        .env("SOUNDTRACK_HTTP_TIMEOUT", "5");
    cmd
}

/// Last.fm stand-in: one top-artists page plus per-artist all-time counts.
///
/// Artists missing from `user_counts` get a server error on lookup.
pub fn lastfm_server(
    artists: &'static [(&'static str, u64)],
    user_counts: &'static [(&'static str, u64)],
) -> MockHttpServer {
    MockHttpServer::start(move |request| {
        match request.query("method").as_deref() {
            Some("user.gettopartists") => {
                let artist: Vec<Value> = artists
                    .iter()
                    .enumerate()
                    .map(|(index, (name, plays))| {
                        json!({
                            "name": name,
                            "playcount": plays.to_string(),
                            "@attr": { "rank": (index + 1).to_string() }
                        })
                    })
                    .collect();
                MockResponse::json(200, json!({ "topartists": { "artist": artist } }))
            }
            Some("artist.getinfo") => {
                let name = request.query("artist").unwrap_or_default();
                match user_counts.iter().find(|(artist, _)| *artist == name) {
                    Some((_, count)) => MockResponse::json(
                        200,
                        json!({
                            "artist": {
                                "name": name,
                                "stats": {
                                    "listeners": "1000",
                                    "playcount": "5000",
                                    "userplaycount": count.to_string()
                                }
                            }
                        }),
                    ),
                    None => MockResponse::json(500, json!({ "message": "boom" })),
                }
            }
            _ => MockResponse::json(400, json!({ "error": 3, "message": "Invalid Method" })),
        }
    })
}

/// GitHub stand-in holding a single gist.
pub fn github_server(gist_id: &'static str, file_name: &'static str) -> MockHttpServer {
    MockHttpServer::start(move |request| {
        if request.path() != format!("/gists/{gist_id}") {
            return MockResponse::json(404, json!({ "message": "Not Found" }));
        }
        match request.method.as_str() {
            "GET" => MockResponse::json(
                200,
                json!({
                    "id": gist_id,
                    "files": {
                        file_name: { "filename": file_name, "content": "old chart" }
                    }
                }),
            ),
            "PATCH" => MockResponse::json(200, json!({ "id": gist_id })),
            _ => MockResponse::json(405, json!({ "message": "Method Not Allowed" })),
        }
    })
}
