//! Read-side access to the employees index.

use log::debug;
use std::time::Duration;

use super::{SearchResponse, SearchResult};
use crate::{
    config::EngineConfig,
    document::Employee,
    errors::SearchError,
    filter::EmployeeSearchFilter,
    query::{Query, QueryClause},
};

const SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Issues compiled queries against the employees index.
pub struct EmployeeSearchClient {
    config: EngineConfig,
    http: reqwest::Client,
}

impl EmployeeSearchClient {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Build a client and verify the engine answers.
    pub async fn connect(config: EngineConfig) -> Result<Self, SearchError> {
        let client = Self::new(config);
        client.ping().await?;
        Ok(client)
    }

    pub async fn ping(&self) -> Result<(), SearchError> {
        super::ping(&self.http, &self.config.url).await
    }

    /// Look up employees by record number.
    pub async fn get_by_no(&self, no: i64) -> Result<SearchResult<Employee>, SearchError> {
        let query = Query::Bool {
            must: vec![QueryClause::matches("no", no)],
        };
        self.execute(&query).await
    }

    /// Compile the filter and run it. An all-empty filter matches every
    /// document in the index.
    pub async fn search(
        &self,
        filter: &EmployeeSearchFilter,
    ) -> Result<SearchResult<Employee>, SearchError> {
        filter.validate()?;
        let query = Query::compile(filter);
        debug!("compiled query: {}", serde_json::to_string(&query)?);
        self.execute(&query).await
    }

    async fn execute(&self, query: &Query) -> Result<SearchResult<Employee>, SearchError> {
        let response = self
            .http
            .post(format!(
                "{}/{}/_search",
                self.config.url, self.config.index
            ))
            .timeout(SEARCH_TIMEOUT)
            .json(&query.to_request_body())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Engine {
                message: format!(
                    "search against '{}' failed: {}",
                    self.config.index,
                    super::response_detail(response).await
                ),
            });
        }

        let parsed: SearchResponse<Employee> = response.json().await?;
        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_rejects_inverted_bounds_before_any_io() {
        // No engine is running here; validation must fail first.
        let client = EmployeeSearchClient::new(EngineConfig::default());
        let filter = EmployeeSearchFilter::new()
            .with_salary_gte(38000.0)
            .with_salary_lte(28000.0);

        let err = client.search(&filter).await.expect_err("must not reach the engine");
        assert!(matches!(err, SearchError::InvalidFilterRange { .. }));
    }
}
