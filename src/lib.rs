//! Client library for the 5calls.org issues API, plus the CLI surface
//! built on top of it.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod query;
pub mod responses;
pub mod types;

pub use client::FiveCallsClient;
pub use error::{FiveCallsError, Result};
pub use query::{IssueQuery, Location};
pub use responses::{FetchedIssues, IssuesList, ResponseMetadata};
