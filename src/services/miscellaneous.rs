//! Endpoints not tied to a resource: rate limits, meta, emojis, markdown,
//! gitignore templates and licenses.

use crate::client::{accept, GitHubClient};
use crate::errors::{ensure_not_empty, ensure_repo, ensure_segment, GitHubResult};
use crate::types::{License, Repository};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service for miscellaneous endpoints.
pub struct MiscellaneousService<'a> {
    client: &'a GitHubClient,
}

impl<'a> MiscellaneousService<'a> {
    /// Creates a new miscellaneous service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Gets rate limit status for every resource category. This call does
    /// not count against the limit.
    pub async fn rate_limit(&self) -> GitHubResult<RateLimits> {
        self.client.get(&urls::rate_limit()).await
    }

    /// Gets GitHub's service metadata, including IP ranges.
    pub async fn meta(&self) -> GitHubResult<Meta> {
        self.client.get(&urls::meta()).await
    }

    /// Lists emojis, keyed by name, mapped to image URLs.
    pub async fn emojis(&self) -> GitHubResult<HashMap<String, String>> {
        self.client.get(&urls::emojis()).await
    }

    /// Renders Markdown to HTML.
    pub async fn render_markdown(&self, request: &MarkdownRequest) -> GitHubResult<String> {
        ensure_not_empty("text", &request.text)?;
        if let Some(context) = &request.context {
            ensure_not_empty("context", context)?;
        }
        self.client
            .post_text(&urls::markdown(), request, accept::HTML)
            .await
    }

    /// Lists gitignore template names.
    pub async fn gitignore_templates(&self) -> GitHubResult<Vec<String>> {
        self.client.get(&urls::gitignore_templates()).await
    }

    /// Gets a gitignore template.
    pub async fn gitignore_template(&self, name: &str) -> GitHubResult<GitignoreTemplate> {
        ensure_segment("name", name)?;
        self.client.get(&urls::gitignore_template(name)).await
    }

    /// Lists commonly used licenses.
    pub async fn licenses(&self) -> GitHubResult<Vec<License>> {
        self.client.get(&urls::licenses()).await
    }

    /// Gets a license by key, e.g. `mit`.
    pub async fn license(&self, key: &str) -> GitHubResult<LicenseDetail> {
        ensure_segment("key", key)?;
        self.client.get(&urls::license(key)).await
    }

    /// Gets the license detected in a repository.
    pub async fn repository_license(
        &self,
        owner: &str,
        repo: &str,
    ) -> GitHubResult<RepositoryLicense> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::repo_license(owner, repo)).await
    }
}

/// Rate limit status by resource category.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimits {
    /// Per-category limits (`core`, `search`, `graphql`, ...).
    pub resources: HashMap<String, RateLimit>,
    /// Core limit, kept for older clients.
    pub rate: RateLimit,
}

impl RateLimits {
    /// Limit for the `core` category.
    pub fn core(&self) -> &RateLimit {
        self.resources.get("core").unwrap_or(&self.rate)
    }

    /// Limit for the `search` category.
    pub fn search(&self) -> Option<&RateLimit> {
        self.resources.get("search")
    }
}

/// One rate limit window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests remaining.
    pub remaining: u32,
    /// Requests used.
    #[serde(default)]
    pub used: u32,
    /// Window reset time.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub reset: DateTime<Utc>,
}

/// GitHub service metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// Whether password authentication is verifiable.
    #[serde(default)]
    pub verifiable_password_authentication: bool,
    /// SSH host key fingerprints by algorithm.
    #[serde(default)]
    pub ssh_key_fingerprints: HashMap<String, String>,
    /// SSH host keys.
    #[serde(default)]
    pub ssh_keys: Vec<String>,
    /// Webhook source ranges.
    #[serde(default)]
    pub hooks: Vec<String>,
    /// Web ranges.
    #[serde(default)]
    pub web: Vec<String>,
    /// API ranges.
    #[serde(default)]
    pub api: Vec<String>,
    /// Git ranges.
    #[serde(default)]
    pub git: Vec<String>,
    /// Pages ranges.
    #[serde(default)]
    pub pages: Vec<String>,
    /// Actions runner ranges.
    #[serde(default)]
    pub actions: Vec<String>,
    /// Dependabot ranges.
    #[serde(default)]
    pub dependabot: Vec<String>,
}

/// Markdown rendering request.
#[derive(Debug, Clone, Serialize)]
pub struct MarkdownRequest {
    /// Markdown source.
    pub text: String,
    /// Rendering mode.
    pub mode: MarkdownMode,
    /// `owner/repo` used to resolve references in `gfm` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl MarkdownRequest {
    /// Plain Markdown rendering.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: MarkdownMode::Markdown,
            context: None,
        }
    }

    /// GitHub-flavored rendering with issue and mention links resolved
    /// against `context`.
    pub fn gfm(text: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: MarkdownMode::Gfm,
            context: Some(context.into()),
        }
    }
}

/// Markdown rendering mode.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownMode {
    Markdown,
    Gfm,
}

/// A gitignore template.
#[derive(Debug, Clone, Deserialize)]
pub struct GitignoreTemplate {
    /// Template name.
    pub name: String,
    /// Template body.
    pub source: String,
}

/// A license with its full text.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseDetail {
    /// Summary fields.
    #[serde(flatten)]
    pub license: License,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Usage guidance.
    pub implementation: Option<String>,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Conditions.
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Limitations.
    #[serde(default)]
    pub limitations: Vec<String>,
    /// Full text.
    pub body: String,
}

/// The license file detected in a repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryLicense {
    /// File name.
    pub name: String,
    /// File path.
    pub path: String,
    /// Blob SHA.
    pub sha: String,
    /// Base64 file content.
    pub content: Option<String>,
    /// Detected license.
    pub license: Option<License>,
    /// Repository, when GitHub includes it.
    pub repository: Option<Repository>,
}
