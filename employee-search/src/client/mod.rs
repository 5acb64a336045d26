//! Engine-facing clients.
//!
//! Both clients hold their configuration and HTTP handle explicitly;
//! nothing here is global or lazily shared. [`IndexManager`] owns the
//! index lifecycle, [`EmployeeSearchClient`] the read side.

mod data;
mod manage;

pub use data::EmployeeSearchClient;
pub use manage::IndexManager;

use serde::Deserialize;

use crate::errors::SearchError;

/// Hits returned by a search, with the engine's total-hit count.
#[derive(Debug, Clone)]
pub struct SearchResult<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Wire shape of a search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse<T> {
    pub hits: HitsEnvelope<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HitsEnvelope<T> {
    pub total: TotalHits,
    pub hits: Vec<Hit<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TotalHits {
    pub value: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hit<T> {
    #[serde(rename = "_source")]
    pub source: T,
}

impl<T> From<SearchResponse<T>> for SearchResult<T> {
    fn from(response: SearchResponse<T>) -> Self {
        Self {
            total: response.hits.total.value,
            items: response
                .hits
                .hits
                .into_iter()
                .map(|hit| hit.source)
                .collect(),
        }
    }
}

/// Verify the engine answers at all.
pub(crate) async fn ping(http: &reqwest::Client, url: &str) -> Result<(), SearchError> {
    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        return Err(SearchError::Engine {
            message: format!("ping returned {}", response.status()),
        });
    }
    Ok(())
}

/// Render a failed response as `status` or `status: body` for error
/// messages.
pub(crate) async fn response_detail(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.is_empty() => format!("{status}: {body}"),
        _ => status.to_string(),
    }
}
