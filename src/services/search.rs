//! GitHub Search API operations.
//!
//! Each call returns one page of [`SearchResults`]. GitHub caps every
//! search at 1000 results; use `page`/`per_page` to move through them.

use crate::client::GitHubClient;
use crate::config::MAX_PAGE_SIZE;
use crate::errors::{ensure_not_empty, GitHubError, GitHubResult};
use crate::pagination::SearchResults;
use crate::services::repositories::{CommitDetail, CommitParent};
use crate::types::{Issue, Repository, User};
use crate::urls;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Service for search operations.
pub struct SearchService<'a> {
    client: &'a GitHubClient,
}

impl<'a> SearchService<'a> {
    /// Creates a new search service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Searches repositories.
    pub async fn repositories(
        &self,
        request: &SearchRequest,
    ) -> GitHubResult<SearchResults<Repository>> {
        self.search(&urls::search_repositories(), request).await
    }

    /// Searches code.
    pub async fn code(
        &self,
        request: &SearchRequest,
    ) -> GitHubResult<SearchResults<CodeSearchItem>> {
        self.search(&urls::search_code(), request).await
    }

    /// Searches issues and pull requests.
    pub async fn issues(&self, request: &SearchRequest) -> GitHubResult<SearchResults<Issue>> {
        self.search(&urls::search_issues(), request).await
    }

    /// Searches users.
    pub async fn users(&self, request: &SearchRequest) -> GitHubResult<SearchResults<User>> {
        self.search(&urls::search_users(), request).await
    }

    /// Searches commits.
    pub async fn commits(
        &self,
        request: &SearchRequest,
    ) -> GitHubResult<SearchResults<CommitSearchItem>> {
        self.search(&urls::search_commits(), request).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &SearchRequest,
    ) -> GitHubResult<SearchResults<T>> {
        request.validate()?;
        self.client.get_with_params(path, request).await
    }
}

/// A search query with sorting and paging.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchRequest {
    /// Query with qualifiers, e.g. `tokio language:rust stars:>100`.
    pub q: String,
    /// Sort field; valid values depend on the search kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort order. Ignored by GitHub unless `sort` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SearchOrder>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Results per page, at most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl SearchRequest {
    /// Creates a request for a query.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    /// Sets the sort field and order.
    pub fn sort(mut self, field: impl Into<String>, order: SearchOrder) -> Self {
        self.sort = Some(field.into());
        self.order = Some(order);
        self
    }

    /// Sets the page and page size.
    pub fn page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    fn validate(&self) -> GitHubResult<()> {
        ensure_not_empty("q", &self.q)?;
        if self.page == Some(0) {
            return Err(GitHubError::invalid_parameter("'page' starts at 1"));
        }
        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > MAX_PAGE_SIZE {
                return Err(GitHubError::invalid_parameter(format!(
                    "'per_page' must be between 1 and {}",
                    MAX_PAGE_SIZE
                )));
            }
        }
        Ok(())
    }
}

/// Search sort order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    Asc,
    Desc,
}

/// A code search result item.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeSearchItem {
    /// File name.
    pub name: String,
    /// Path.
    pub path: String,
    /// Blob SHA.
    pub sha: String,
    /// HTML URL.
    pub html_url: String,
    /// Repository.
    pub repository: Repository,
    /// Relevance score.
    pub score: f64,
    /// Text matches, when requested with the text-match media type.
    pub text_matches: Option<Vec<TextMatch>>,
}

/// A text match in search results.
#[derive(Debug, Clone, Deserialize)]
pub struct TextMatch {
    /// Object URL.
    pub object_url: Option<String>,
    /// Object type.
    pub object_type: Option<String>,
    /// Property.
    pub property: String,
    /// Fragment.
    pub fragment: String,
    /// Matches.
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// A match within a text fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct Match {
    /// Text.
    pub text: String,
    /// Start and end offsets within the fragment.
    pub indices: Vec<u32>,
}

/// A commit search result item.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSearchItem {
    /// SHA.
    pub sha: String,
    /// HTML URL.
    pub html_url: String,
    /// Git commit data.
    pub commit: CommitDetail,
    /// Author.
    pub author: Option<User>,
    /// Committer.
    pub committer: Option<User>,
    /// Parents.
    #[serde(default)]
    pub parents: Vec<CommitParent>,
    /// Repository.
    pub repository: Repository,
    /// Relevance score.
    pub score: f64,
}
