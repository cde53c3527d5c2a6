//! GitHub App operations.
//!
//! Endpoints under `/app` and the installation lookups are signed with the
//! app JWT regardless of the configured credentials, so the client must be
//! built with [`AuthMethod::App`](crate::AuthMethod::App) for them.

use crate::client::GitHubClient;
use crate::errors::{ensure_repo, ensure_segment, GitHubResult};
use crate::observability::TracingHooks;
use crate::pagination::{list_envelope, ApiOptions};
use crate::types::{Repository, User};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service for GitHub App operations.
pub struct AppsService<'a> {
    client: &'a GitHubClient,
}

impl<'a> AppsService<'a> {
    /// Creates a new apps service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Gets the app the JWT belongs to.
    pub async fn get_current(&self) -> GitHubResult<App> {
        self.client.get_as_app(&urls::current_app()).await
    }

    /// Gets a public app by slug.
    pub async fn get(&self, app_slug: &str) -> GitHubResult<App> {
        ensure_segment("app_slug", app_slug)?;
        self.client.get(&urls::app(app_slug)).await
    }

    /// Lists installations of the current app.
    pub async fn list_installations(&self, options: ApiOptions) -> GitHubResult<Vec<Installation>> {
        self.client
            .get_all_as_app(&urls::app_installations(), options)
            .await
    }

    /// Gets an installation of the current app.
    pub async fn get_installation(&self, installation_id: u64) -> GitHubResult<Installation> {
        self.client
            .get_as_app(&urls::app_installation(installation_id))
            .await
    }

    /// Gets the installation covering a repository.
    pub async fn get_repository_installation(
        &self,
        owner: &str,
        repo: &str,
    ) -> GitHubResult<Installation> {
        ensure_repo(owner, repo)?;
        self.client
            .get_as_app(&urls::repo_installation(owner, repo))
            .await
    }

    /// Gets the installation on an organization.
    pub async fn get_organization_installation(&self, org: &str) -> GitHubResult<Installation> {
        ensure_segment("org", org)?;
        self.client.get_as_app(&urls::org_installation(org)).await
    }

    /// Lists installations the authenticated user can access. Requires a
    /// user-to-server token.
    pub async fn list_installations_for_current_user(
        &self,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Installation>> {
        self.client
            .get_all_envelope::<InstallationsResponse>(&urls::current_user_installations(), options)
            .await
    }

    /// Creates an installation access token.
    pub async fn create_installation_token(
        &self,
        installation_id: u64,
        request: &InstallationTokenRequest,
    ) -> GitHubResult<InstallationToken> {
        self.client
            .post_as_app(&urls::installation_access_tokens(installation_id), request)
            .await
    }

    /// Creates an installation token and caches it, so later requests made
    /// by this client act as the installation until the token nears expiry.
    pub async fn authenticate_installation(
        &self,
        installation_id: u64,
    ) -> GitHubResult<InstallationToken> {
        let token = self
            .create_installation_token(installation_id, &InstallationTokenRequest::default())
            .await?;
        self.client
            .auth()
            .cache_installation_token(installation_id, &token.token, token.expires_at)
            .await;
        TracingHooks::on_installation_token_cached(
            installation_id,
            &token.expires_at.to_rfc3339(),
        );
        Ok(token)
    }
}

/// A GitHub App.
#[derive(Debug, Clone, Deserialize)]
pub struct App {
    /// App ID.
    pub id: u64,
    /// URL-friendly name.
    pub slug: Option<String>,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Owner.
    pub owner: Option<User>,
    /// External URL.
    pub external_url: Option<String>,
    /// HTML URL.
    pub html_url: String,
    /// Permissions requested by the app.
    #[serde(default)]
    pub permissions: HashMap<String, String>,
    /// Subscribed webhook events.
    #[serde(default)]
    pub events: Vec<String>,
    /// Installation count (own app only).
    pub installations_count: Option<u64>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

/// An installation of a GitHub App.
#[derive(Debug, Clone, Deserialize)]
pub struct Installation {
    /// Installation ID.
    pub id: u64,
    /// App ID.
    pub app_id: u64,
    /// App slug.
    pub app_slug: Option<String>,
    /// Account the app is installed on.
    pub account: Option<User>,
    /// ID of the account.
    pub target_id: u64,
    /// `User` or `Organization`.
    pub target_type: String,
    /// `all` or `selected`.
    pub repository_selection: RepositorySelection,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: HashMap<String, String>,
    /// Subscribed webhook events.
    #[serde(default)]
    pub events: Vec<String>,
    /// API URL for creating access tokens.
    pub access_tokens_url: String,
    /// Suspension time, if suspended.
    pub suspended_at: Option<DateTime<Utc>>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

/// Which repositories an installation covers.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySelection {
    All,
    Selected,
}

/// Installations list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallationsResponse {
    /// Total count.
    pub total_count: u32,
    /// Installations.
    pub installations: Vec<Installation>,
}

list_envelope!(InstallationsResponse, installations, Installation);

/// Options narrowing an installation token.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallationTokenRequest {
    /// Repository names the token is limited to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<String>>,
    /// Repository IDs the token is limited to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_ids: Option<Vec<u64>>,
    /// Subset of the installation's permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<HashMap<String, String>>,
}

/// An installation access token.
#[derive(Clone, Deserialize)]
pub struct InstallationToken {
    /// Token value.
    pub token: String,
    /// Expiry, one hour after creation.
    pub expires_at: DateTime<Utc>,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: HashMap<String, String>,
    /// `all` or `selected`.
    pub repository_selection: Option<RepositorySelection>,
    /// Repositories the token is limited to.
    pub repositories: Option<Vec<Repository>>,
}

impl std::fmt::Debug for InstallationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallationToken")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("permissions", &self.permissions)
            .finish()
    }
}
