//! Codespaces operations.

use crate::client::GitHubClient;
use crate::errors::{ensure_not_empty, ensure_repo, ensure_segment, GitHubResult};
use crate::pagination::{list_envelope, ApiOptions};
use crate::types::{Codespace, CodespaceMachine};
use crate::urls;
use serde::{Deserialize, Serialize};

/// Service for managing codespaces of the authenticated user.
pub struct CodespacesService<'a> {
    client: &'a GitHubClient,
}

impl<'a> CodespacesService<'a> {
    /// Creates a new codespaces service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Lists codespaces of the authenticated user.
    pub async fn list(&self, options: ApiOptions) -> GitHubResult<Vec<Codespace>> {
        self.client
            .get_all_envelope::<CodespacesResponse>(&urls::current_user_codespaces(), options)
            .await
    }

    /// Lists the authenticated user's codespaces for one repository.
    pub async fn list_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Codespace>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<CodespacesResponse>(&urls::repo_codespaces(owner, repo), options)
            .await
    }

    /// Gets a codespace by name.
    pub async fn get(&self, codespace_name: &str) -> GitHubResult<Codespace> {
        ensure_segment("codespace_name", codespace_name)?;
        self.client.get(&urls::codespace(codespace_name)).await
    }

    /// Creates a codespace from a repository. GitHub may answer 202 while
    /// provisioning continues; the returned state then reflects that.
    pub async fn create_for_repo(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateCodespaceRequest,
    ) -> GitHubResult<Codespace> {
        ensure_repo(owner, repo)?;
        if let Some(machine) = &request.machine {
            ensure_not_empty("machine", machine)?;
        }
        self.client
            .post(&urls::repo_codespaces(owner, repo), request)
            .await
    }

    /// Starts a codespace.
    pub async fn start(&self, codespace_name: &str) -> GitHubResult<Codespace> {
        ensure_segment("codespace_name", codespace_name)?;
        self.client
            .post_no_body(&urls::codespace_start(codespace_name))
            .await
    }

    /// Stops a codespace.
    pub async fn stop(&self, codespace_name: &str) -> GitHubResult<Codespace> {
        ensure_segment("codespace_name", codespace_name)?;
        self.client
            .post_no_body(&urls::codespace_stop(codespace_name))
            .await
    }

    /// Deletes a codespace.
    pub async fn delete(&self, codespace_name: &str) -> GitHubResult<()> {
        ensure_segment("codespace_name", codespace_name)?;
        self.client.delete(&urls::codespace(codespace_name)).await
    }

    /// Lists machine types available for a repository.
    pub async fn list_machines_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: &ListMachinesParams,
    ) -> GitHubResult<Vec<CodespaceMachine>> {
        ensure_repo(owner, repo)?;
        let response: MachinesResponse = self
            .client
            .get_with_params(&urls::repo_codespace_machines(owner, repo), params)
            .await?;
        Ok(response.machines)
    }

    /// Lists machine types an existing codespace can switch to.
    pub async fn list_machines(&self, codespace_name: &str) -> GitHubResult<Vec<CodespaceMachine>> {
        ensure_segment("codespace_name", codespace_name)?;
        let response: MachinesResponse = self
            .client
            .get(&urls::codespace_machines(codespace_name))
            .await?;
        Ok(response.machines)
    }
}

/// Codespaces list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CodespacesResponse {
    /// Total count.
    pub total_count: u32,
    /// Codespaces.
    pub codespaces: Vec<Codespace>,
}

list_envelope!(CodespacesResponse, codespaces, Codespace);

/// Machines list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct MachinesResponse {
    /// Total count.
    pub total_count: u32,
    /// Machines.
    pub machines: Vec<CodespaceMachine>,
}

/// Request to create a codespace.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCodespaceRequest {
    /// Git ref to check out. Defaults to the default branch.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    /// Geographic area (`EastUs`, `WestUs2`, `WestEurope`, `SoutheastAsia`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    /// Machine type name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine: Option<String>,
    /// Path to a `devcontainer.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devcontainer_path: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Minutes of inactivity before stopping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout_minutes: Option<u32>,
    /// Minutes a stopped codespace is kept before deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_period_minutes: Option<u32>,
}

/// Filters for listing repository machine types.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListMachinesParams {
    /// Location to check availability for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Git ref the machines are checked against.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
}
