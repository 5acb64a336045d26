//! Employee search demo client.
//!
//! A thin client for a document search engine: it recreates the
//! employees index from a static mapping, bulk-loads documents from CSV,
//! and compiles sparse search filters into the boolean queries the engine
//! executes. The compiler ([`query::Query::compile`]) is the only piece
//! with real branching; everything else is engine glue.

pub mod client;
pub mod config;
pub mod document;
pub mod errors;
pub mod filter;
pub mod ingest;
pub mod mapping;
pub mod query;

pub use client::{EmployeeSearchClient, IndexManager, SearchResult};
pub use config::EngineConfig;
pub use document::Employee;
pub use errors::SearchError;
pub use filter::EmployeeSearchFilter;
pub use query::{MatchValue, Query, QueryClause};
