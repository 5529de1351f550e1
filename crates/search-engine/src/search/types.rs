use serde::Serialize;
use store_catalog::{EncodingError, SearchResults};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    NotSearchedYet,
    Loading,
    NoResults,
    Results(SearchResults),
}

impl SearchState {
    pub(crate) fn from_results(results: SearchResults) -> Self {
        if results.is_empty() {
            SearchState::NoResults
        } else {
            SearchState::Results(results)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn results(&self) -> &[crate::SearchResult] {
        match self {
            SearchState::Results(results) => results,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The request finished and its results were applied.
    Completed,
    /// Transport failure or unexpected status; state was reset.
    Failed,
    /// A newer search took over; state was left alone.
    Superseded,
    /// Blank input, nothing happened.
    Skipped,
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Completed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
