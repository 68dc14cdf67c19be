pub mod clock;
pub mod gist;
pub mod http;
pub mod lastfm;

pub use clock::SystemClock;
pub use gist::{DEFAULT_GITHUB_API_URL, GistClient};
pub use http::HttpConfig;
pub use lastfm::{DEFAULT_LASTFM_API_URL, LastfmClient};
