//! GitHub gist document store.
//!
//! A gist is treated as a single document: its first file in file-name order.
//! Updating renames that file to the new title and replaces its content.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::domain::{Document, DocumentId};
use crate::usecases::ports::{DocumentStore, DocumentStoreError};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const GITHUB_API_VERSION: &str = "2022-11-28";

pub struct GistClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl GistClient {
    pub fn new(http: Client, base_url: Url, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            token: token.into(),
        }
    }

    fn gist_url(&self, id: &DocumentId) -> Result<Url, DocumentStoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DocumentStoreError::Transport(format!("invalid GitHub API URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("gists")
            .push(id.as_str());
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
    }

    fn send(&self, request: RequestBuilder, id: &DocumentId) -> Result<Response, DocumentStoreError> {
        let response = self.authorized(request).send().map_err(transport_error)?;
        check_status(response.status(), id)?;
        Ok(response)
    }
}

impl DocumentStore for GistClient {
    fn fetch(&self, id: &DocumentId) -> Result<Document, DocumentStoreError> {
        let url = self.gist_url(id)?;
        debug!(gist_id = %id, "Fetching gist");
        let response = self.send(self.http.get(url), id)?;
        let body = response.text().map_err(transport_error)?;
        let gist: GistDto = serde_json::from_str(&body)
            .map_err(|err| DocumentStoreError::Decode(err.to_string()))?;
        gist.into_document(id)
    }

    fn update(
        &self,
        current: &Document,
        title: &str,
        content: &str,
    ) -> Result<(), DocumentStoreError> {
        let url = self.gist_url(&current.id)?;
        let body = update_body(&current.title, title, content);
        debug!(gist_id = %current.id, file = %current.title, "Updating gist");
        self.send(self.http.patch(url).json(&body), &current.id)?;
        info!(gist_id = %current.id, title, "Gist updated");
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> DocumentStoreError {
    if err.is_timeout() {
        DocumentStoreError::Timeout
    } else {
        DocumentStoreError::Transport(err.to_string())
    }
}

fn check_status(status: StatusCode, id: &DocumentId) -> Result<(), DocumentStoreError> {
    match status.as_u16() {
        200..=299 => Ok(()),
        401 | 403 => Err(DocumentStoreError::Unauthorized),
        404 => Err(DocumentStoreError::NotFound(id.to_string())),
        status => Err(DocumentStoreError::Http { status }),
    }
}

#[derive(Debug, Deserialize)]
struct GistDto {
    #[serde(default)]
    files: BTreeMap<String, Option<GistFileDto>>,
}

#[derive(Debug, Deserialize)]
struct GistFileDto {
    #[serde(default)]
    content: Option<String>,
}

impl GistDto {
    fn into_document(self, id: &DocumentId) -> Result<Document, DocumentStoreError> {
        let (title, file) = self
            .files
            .into_iter()
            .next()
            .ok_or_else(|| DocumentStoreError::NoFiles(id.to_string()))?;
        Ok(Document {
            id: id.clone(),
            title,
            content: file.and_then(|file| file.content).unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
struct UpdateGistBody<'a> {
    files: BTreeMap<&'a str, FileUpdate<'a>>,
}

#[derive(Debug, Serialize)]
struct FileUpdate<'a> {
    filename: &'a str,
    content: &'a str,
}

fn update_body<'a>(current_file: &'a str, title: &'a str, content: &'a str) -> UpdateGistBody<'a> {
    let mut files = BTreeMap::new();
    files.insert(
        current_file,
        FileUpdate {
            filename: title,
            content,
        },
    );
    UpdateGistBody { files }
}
