//! Client for the upstream card pricing API
//!
//! `PricingApi` is the seam the web layer talks to; `JustTcgClient` is the
//! real implementation. Failures are reported as `ClientError` and callers
//! decide how to degrade (the page renders an empty list).

pub mod cache;
pub mod error;
pub mod justtcg;

use async_trait::async_trait;
use tcgsearch_core::{Card, Game};

pub use cache::TtlCache;
pub use error::{ClientError, ClientResult};
pub use justtcg::{JustTcgClient, API_KEY_HEADER};

/// Normalized search input: trimmed text plus an optional game slug
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    game: Option<String>,
}

impl SearchQuery {
    pub fn new(text: Option<&str>, game: Option<&str>) -> Self {
        Self {
            text: text.map(str::trim).unwrap_or_default().to_string(),
            game: game
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn game(&self) -> Option<&str> {
        self.game.as_deref()
    }

    /// No search text means no upstream search
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Upstream pricing API
#[async_trait]
pub trait PricingApi: Send + Sync {
    /// All games, used to populate the filter dropdown
    async fn games(&self) -> ClientResult<Vec<Game>>;

    /// Cards matching the query
    async fn search_cards(&self, query: &SearchQuery) -> ClientResult<Vec<Card>>;
}

/// Turn a failed upstream call into an empty list, logging why.
pub fn or_empty<T>(result: ClientResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            log::warn!(target: "tcgsearch::upstream", "{} unavailable, rendering empty: {}", what, e);
            Vec::new()
        }
    }
}
