//! Index lifecycle management.

use log::{info, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::{config::EngineConfig, errors::SearchError, ingest};

/// Creates, deletes, and populates the employees index.
pub struct IndexManager {
    config: EngineConfig,
    http: reqwest::Client,
}

impl IndexManager {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Build a manager and verify the engine answers.
    pub async fn connect(config: EngineConfig) -> Result<Self, SearchError> {
        let manager = Self::new(config);
        manager.ping().await?;
        Ok(manager)
    }

    pub fn index(&self) -> &str {
        &self.config.index
    }

    pub async fn ping(&self) -> Result<(), SearchError> {
        super::ping(&self.http, &self.config.url).await
    }

    pub async fn index_exists(&self) -> Result<bool, SearchError> {
        let response = self.http.head(self.index_url()).send().await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(SearchError::Engine {
                message: format!(
                    "unexpected status {status} checking index '{}'",
                    self.config.index
                ),
            }),
        }
    }

    pub async fn delete_index(&self) -> Result<(), SearchError> {
        let response = self.http.delete(self.index_url()).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::IndexDelete {
                index: self.config.index.clone(),
                message: super::response_detail(response).await,
            });
        }
        Ok(())
    }

    /// Create the index from a mapping payload, deleting any existing
    /// index of the same name first.
    pub async fn create_index(&self, mapping: &Value) -> Result<(), SearchError> {
        if self.index_exists().await? {
            info!("index '{}' already exists, deleting it", self.config.index);
            self.delete_index().await?;
        }

        info!("creating index '{}'", self.config.index);
        let response = self.http.put(self.index_url()).json(mapping).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::IndexCreate {
                index: self.config.index.clone(),
                message: super::response_detail(response).await,
            });
        }
        Ok(())
    }

    /// Force the index to publish pending writes now rather than on the
    /// engine's own refresh schedule.
    pub async fn refresh(&self) -> Result<(), SearchError> {
        let response = self
            .http
            .post(format!("{}/_refresh", self.index_url()))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SearchError::Engine {
                message: format!(
                    "refresh of '{}' failed: {}",
                    self.config.index,
                    super::response_detail(response).await
                ),
            });
        }
        Ok(())
    }

    /// Bulk-load documents from a CSV file. Returns the number of
    /// documents submitted. The index is refreshed afterwards even when
    /// the bulk call fails, since the engine may have accepted a prefix
    /// of the batch.
    pub async fn populate_index(&self, path: &Path) -> Result<u64, SearchError> {
        let employees = ingest::read_employees(path)?;
        info!(
            "writing {} documents to index '{}'",
            employees.len(),
            self.config.index
        );

        let body = ingest::bulk_body(&employees)?;
        let bulk_result = self.send_bulk(body).await;
        let refresh_result = self.refresh().await;

        let indexed = bulk_result?;
        refresh_result?;
        Ok(indexed)
    }

    async fn send_bulk(&self, body: String) -> Result<u64, SearchError> {
        let response = self
            .http
            .post(format!("{}/_bulk", self.index_url()))
            .header("content-type", "application/x-ndjson")
            .body(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SearchError::Engine {
                message: format!("bulk load failed: {}", super::response_detail(response).await),
            });
        }

        let summary: BulkSummary = response.json().await?;
        if summary.errors {
            warn!(
                "bulk load into '{}' reported per-document errors",
                self.config.index
            );
        }
        Ok(summary.items.len() as u64)
    }

    fn index_url(&self) -> String {
        format!("{}/{}", self.config.url, self.config.index)
    }
}

#[derive(Debug, Deserialize)]
struct BulkSummary {
    errors: bool,
    #[serde(default)]
    items: Vec<Value>,
}
