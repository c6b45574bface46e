//! GitHub blob URL resolution and raw-content fetching.

use std::time::Duration;
use thiserror::Error;

const WEB_HOST: &str = "github.com";
const WEB_PREFIX: &str = "https://github.com/";
const BLOB_MARKER: &str = "/blob/";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Descriptor for one raw-content request against the contents API.
/// Derived deterministically from a blob URL; no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContentRequest {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub path: String,
}

impl RawContentRequest {
    pub fn api_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}?ref={}",
            self.owner, self.repo, self.path, self.branch
        )
    }
}

/// Parse a blob URL like `https://github.com/user/repo/blob/main/src/lib.rs`
/// into a content request. Best-effort utility: any other shape yields
/// `None`, never a panic. Only the first two components of the owner/repo
/// segment are taken; the first segment after `/blob/` is the branch and
/// the remainder re-joins into the file path.
pub fn parse_blob_url(url: &str) -> Option<RawContentRequest> {
    if !url.contains(WEB_HOST) || !url.contains(BLOB_MARKER) {
        return None;
    }

    let (base, tail) = url.split_once(BLOB_MARKER)?;

    let base = base.replace(WEB_PREFIX, "");
    let mut repo_segments = base.split('/');
    let owner = repo_segments.next()?;
    let repo = repo_segments.next()?;

    let mut tail_segments = tail.split('/');
    let branch = tail_segments.next()?;
    let path = tail_segments.collect::<Vec<_>>().join("/");

    Some(RawContentRequest {
        owner: owner.to_string(),
        repo: repo.to_string(),
        branch: branch.to_string(),
        path,
    })
}

/// Fetch failure, surfaced explicitly so callers handle both arms.
/// Terminal for the case in hand; never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Issues a single GET for raw file content, optionally bearer-authenticated.
/// Unauthenticated requests are subject to the forge's public rate limits.
pub struct ContentFetcher {
    client: reqwest::Client,
    token: Option<String>,
}

impl ContentFetcher {
    pub fn new(token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("http client construction");
        Self { client, token }
    }

    pub async fn fetch(&self, request: &RawContentRequest) -> Result<String, FetchError> {
        let url = request.api_url();
        tracing::debug!(%url, authenticated = self.token.is_some(), "fetching raw content");

        let mut req = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, RAW_MEDIA_TYPE);
        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.text().await?)
    }
}
