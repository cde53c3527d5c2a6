//! Gist operations.

use crate::client::GitHubClient;
use crate::errors::{ensure_not_empty, ensure_segment, GitHubError, GitHubResult};
use crate::pagination::ApiOptions;
use crate::types::{Comment, Gist, User};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service for gist operations.
pub struct GistsService<'a> {
    client: &'a GitHubClient,
}

impl<'a> GistsService<'a> {
    /// Creates a new gists service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Lists gists of the authenticated user.
    pub async fn list_for_current(
        &self,
        since: Option<DateTime<Utc>>,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Gist>> {
        self.client
            .get_all_with_params(&urls::gists(), &SinceParams { since }, options)
            .await
    }

    /// Lists public gists of a user.
    pub async fn list_for_user(
        &self,
        username: &str,
        since: Option<DateTime<Utc>>,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Gist>> {
        ensure_segment("username", username)?;
        self.client
            .get_all_with_params(&urls::user_gists(username), &SinceParams { since }, options)
            .await
    }

    /// Lists public gists, most recent first.
    pub async fn list_public(
        &self,
        since: Option<DateTime<Utc>>,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Gist>> {
        self.client
            .get_all_with_params(&urls::public_gists(), &SinceParams { since }, options)
            .await
    }

    /// Lists gists starred by the authenticated user.
    pub async fn list_starred(
        &self,
        since: Option<DateTime<Utc>>,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Gist>> {
        self.client
            .get_all_with_params(&urls::starred_gists(), &SinceParams { since }, options)
            .await
    }

    /// Gets a gist.
    pub async fn get(&self, gist_id: &str) -> GitHubResult<Gist> {
        ensure_segment("gist_id", gist_id)?;
        self.client.get(&urls::gist(gist_id)).await
    }

    /// Creates a gist.
    pub async fn create(&self, request: &CreateGistRequest) -> GitHubResult<Gist> {
        if request.files.is_empty() {
            return Err(GitHubError::invalid_parameter("'files' must not be empty"));
        }
        for (name, file) in &request.files {
            ensure_not_empty("filename", name)?;
            ensure_not_empty("content", &file.content)?;
        }
        self.client.post(&urls::gists(), request).await
    }

    /// Updates a gist. A file mapped to `None` is deleted.
    pub async fn update(&self, gist_id: &str, request: &UpdateGistRequest) -> GitHubResult<Gist> {
        ensure_segment("gist_id", gist_id)?;
        self.client.patch(&urls::gist(gist_id), request).await
    }

    /// Deletes a gist.
    pub async fn delete(&self, gist_id: &str) -> GitHubResult<()> {
        ensure_segment("gist_id", gist_id)?;
        self.client.delete(&urls::gist(gist_id)).await
    }

    /// Stars a gist.
    pub async fn star(&self, gist_id: &str) -> GitHubResult<()> {
        ensure_segment("gist_id", gist_id)?;
        self.client.put_no_body_empty(&urls::gist_star(gist_id)).await
    }

    /// Unstars a gist.
    pub async fn unstar(&self, gist_id: &str) -> GitHubResult<()> {
        ensure_segment("gist_id", gist_id)?;
        self.client.delete(&urls::gist_star(gist_id)).await
    }

    /// Checks whether the authenticated user starred a gist.
    pub async fn is_starred(&self, gist_id: &str) -> GitHubResult<bool> {
        ensure_segment("gist_id", gist_id)?;
        self.client.get_status(&urls::gist_star(gist_id)).await
    }

    /// Forks a gist.
    pub async fn fork(&self, gist_id: &str) -> GitHubResult<Gist> {
        ensure_segment("gist_id", gist_id)?;
        self.client.post_no_body(&urls::gist_forks(gist_id)).await
    }

    /// Lists forks of a gist.
    pub async fn list_forks(
        &self,
        gist_id: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<GistFork>> {
        ensure_segment("gist_id", gist_id)?;
        self.client.get_all(&urls::gist_forks(gist_id), options).await
    }

    // Comments

    /// Lists comments on a gist.
    pub async fn list_comments(
        &self,
        gist_id: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Comment>> {
        ensure_segment("gist_id", gist_id)?;
        self.client
            .get_all(&urls::gist_comments(gist_id), options)
            .await
    }

    /// Creates a comment on a gist.
    pub async fn create_comment(&self, gist_id: &str, body: &str) -> GitHubResult<Comment> {
        ensure_segment("gist_id", gist_id)?;
        ensure_not_empty("body", body)?;
        self.client
            .post(
                &urls::gist_comments(gist_id),
                &CommentBody {
                    body: body.to_string(),
                },
            )
            .await
    }

    /// Deletes a comment on a gist.
    pub async fn delete_comment(&self, gist_id: &str, comment_id: u64) -> GitHubResult<()> {
        ensure_segment("gist_id", gist_id)?;
        self.client
            .delete(&urls::gist_comment(gist_id, comment_id))
            .await
    }
}

#[derive(Serialize)]
struct SinceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct CommentBody {
    body: String,
}

/// A fork of a gist.
#[derive(Debug, Clone, Deserialize)]
pub struct GistFork {
    /// Fork ID.
    pub id: String,
    /// Owner of the fork.
    pub owner: Option<User>,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Request to create a gist.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGistRequest {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the gist is public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Files keyed by file name.
    pub files: HashMap<String, GistFileContent>,
}

impl CreateGistRequest {
    /// Adds a file.
    pub fn file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(
            name.into(),
            GistFileContent {
                content: content.into(),
            },
        );
        self
    }
}

/// Content of a new gist file.
#[derive(Debug, Clone, Serialize)]
pub struct GistFileContent {
    /// File content.
    pub content: String,
}

/// Request to update a gist.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateGistRequest {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// File changes keyed by current file name; `None` deletes the file.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub files: HashMap<String, Option<GistFileUpdate>>,
}

/// Change to an existing gist file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GistFileUpdate {
    /// New content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}
