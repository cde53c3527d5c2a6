//! # octorest
//!
//! A typed async client for the GitHub REST API:
//! - Resource clients for repositories, issues, pull requests, Actions,
//!   organizations, codespaces, users, gists, search, the Git database,
//!   GitHub Apps and miscellaneous endpoints
//! - Anonymous, Basic, token and GitHub App authentication
//! - Pagination that follows `Link: rel="next"` headers
//! - Typed errors keyed off the response status and body
//! - Rate limit and scope metadata from the last response
//!
//! Requests are sent once; the client never retries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octorest::services::ListReposParams;
//! use octorest::{ApiOptions, AuthMethod, GitHubClient, GitHubConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GitHubConfig::builder()
//!         .auth(AuthMethod::pat("ghp_xxxxxxxxxxxx"))
//!         .build()?;
//!
//!     let client = GitHubClient::new(config)?;
//!
//!     let repos = client
//!         .repositories()
//!         .list_for_user("octocat", &ListReposParams::default(), ApiOptions::new())
//!         .await?;
//!     for repo in repos {
//!         println!("{}", repo.full_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication
pub mod auth;

// Connection and endpoint paths
pub mod client;
pub mod urls;

// Pagination handling
pub mod pagination;

// API Services
pub mod services;

// Observability
pub mod observability;

// Re-exports for convenience
pub use auth::{
    AuthManager, AuthMethod, CredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
};
pub use client::{ApiInfo, GitHubClient, GitHubClientBuilder, RateLimitInfo};
pub use config::{GitHubConfig, GitHubConfigBuilder};
pub use errors::{GitHubError, GitHubErrorKind, GitHubResult};
pub use pagination::{ApiOptions, ListEnvelope, Page, PageIterator, PaginationLinks, SearchResults};
pub use types::*;
