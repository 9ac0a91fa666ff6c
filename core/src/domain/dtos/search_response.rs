use serde::{Deserialize, Serialize};

/// The outcome of a query that completed without a precondition failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum SearchResponse<T> {
    /// At least one qualifying result.
    Found(Vec<T>),

    /// The query ran but nothing qualified.
    NotFound,
}

impl<T> SearchResponse<T> {
    pub(crate) fn from_results(results: Vec<T>) -> Self {
        match results.is_empty() {
            true => SearchResponse::NotFound,
            false => SearchResponse::Found(results),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchResponse::Found(_))
    }

    /// The results, empty when nothing was found.
    pub fn into_results(self) -> Vec<T> {
        match self {
            SearchResponse::Found(results) => results,
            SearchResponse::NotFound => Vec::new(),
        }
    }
}
