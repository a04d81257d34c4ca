//! Repository listing: fetch from GitHub, sort by recency, deliver once.
//!
//! The page issues exactly one request at initialization. The request is
//! wrapped in a task the caller spawns on whatever executor it has (tokio
//! natively, `spawn_local` in the browser); the result lands in a one-shot
//! slot read through [`PendingListing`].
//!
//! ```rust,ignore
//! let client = GithubClient::new("octocat")?;
//! let (task, pending) = start_listing_fetch(client);
//! tokio::spawn(task);
//! let state = pending.resolve().await;
//! ```

use std::future::Future;

use futures::channel::oneshot;
use reqwest::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{ListingState, RepoRecord, RepositoryListing};

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("portfolio-page/", env!("CARGO_PKG_VERSION"));

/// Ways the listing request can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, TLS or body-read failure
    #[error("request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status
    #[error("endpoint returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },
    /// The body was not a JSON array of repository records
    #[error("malformed repository listing: {0}")]
    Decode(String),
}

impl FetchError {
    fn transport(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Client for the "list repositories for a user" endpoint.
#[derive(Clone, Debug)]
pub struct GithubClient {
    client: Client,
    api_base: String,
    account: String,
}

impl GithubClient {
    /// Client for `account` against the public GitHub API.
    pub fn new(account: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_API_BASE, account)
    }

    /// Client against a custom API root (mirrors, test servers).
    pub fn with_base_url(
        api_base: impl Into<String>,
        account: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let api_base: String = api_base.into();
        let client = Client::builder().build().map_err(FetchError::transport)?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            account: account.into(),
        })
    }

    /// Account whose repositories are listed.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Full URL of the listing endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/users/{}/repos", self.api_base, self.account)
    }

    /// Issue the single GET and decode the records in source order.
    ///
    /// No retry, no timeout, no pagination.
    pub async fn fetch_repos(&self) -> Result<Vec<RepoRecord>, FetchError> {
        let url = self.endpoint();
        debug!(%url, "requesting repository listing");

        let request = self.client.get(&url).header(ACCEPT, GITHUB_ACCEPT);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.header(reqwest::header::USER_AGENT, USER_AGENT);

        let response = request.send().await.map_err(FetchError::transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::transport)?;
        let records: Vec<RepoRecord> =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(count = records.len(), "repository listing received");
        Ok(records)
    }
}

/// Order records by `updated_at`, most recent first.
///
/// The sort is stable: equal timestamps keep source order. Records without a
/// timestamp go after every dated record.
pub fn sort_by_recency(mut records: Vec<RepoRecord>) -> RepositoryListing {
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    RepositoryListing(records)
}

/// Fetch and sort, folding any failure into [`ListingState::Failed`].
pub async fn load_listing(client: &GithubClient) -> ListingState {
    match client.fetch_repos().await {
        Ok(records) => ListingState::Loaded(sort_by_recency(records)),
        Err(err) => {
            warn!(account = client.account(), error = %err, "repository listing unavailable");
            ListingState::Failed(err)
        }
    }
}

/// Write side of the single-assignment result slot.
///
/// `fill` consumes the slot, so a listing is delivered at most once.
#[derive(Debug)]
pub struct ListingSlot {
    tx: oneshot::Sender<ListingState>,
}

impl ListingSlot {
    /// Deliver the result. Dropped silently if nobody is waiting any more.
    pub fn fill(self, state: ListingState) {
        if self.tx.send(state).is_err() {
            debug!("listing receiver gone, result discarded");
        }
    }
}

/// Read side of the single-assignment result slot.
#[derive(Debug)]
pub struct PendingListing {
    rx: oneshot::Receiver<ListingState>,
}

impl PendingListing {
    /// Wait for the result. A task dropped before delivering resolves to
    /// [`ListingState::Loading`], which renders as an empty project grid.
    pub async fn resolve(self) -> ListingState {
        self.rx.await.unwrap_or_default()
    }

    /// Take the result if it has already arrived.
    pub fn try_take(&mut self) -> Option<ListingState> {
        self.rx.try_recv().ok().flatten()
    }
}

/// Create an empty slot pair.
pub fn listing_slot() -> (ListingSlot, PendingListing) {
    let (tx, rx) = oneshot::channel();
    (ListingSlot { tx }, PendingListing { rx })
}

/// Build the page-load fetch task and the handle its result arrives on.
///
/// The returned future does nothing until spawned.
pub fn start_listing_fetch(
    client: GithubClient,
) -> (impl Future<Output = ()> + 'static, PendingListing) {
    let (slot, pending) = listing_slot();
    let task = async move {
        let state = load_listing(&client).await;
        slot.fill(state);
    };
    (task, pending)
}
