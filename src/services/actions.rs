//! GitHub Actions operations.

use crate::client::{accept, GitHubClient};
use crate::errors::{ensure_not_empty, ensure_repo, ensure_segment, GitHubResult};
use crate::pagination::{list_envelope, ApiOptions};
use crate::types::{Workflow, WorkflowRun, WorkflowRunConclusion, WorkflowRunStatus};
use crate::urls;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service for GitHub Actions operations.
pub struct ActionsService<'a> {
    client: &'a GitHubClient,
}

impl<'a> ActionsService<'a> {
    /// Creates a new actions service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    // Workflows

    /// Lists workflows in a repository.
    pub async fn list_workflows(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Workflow>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<WorkflowsResponse>(&urls::workflows(owner, repo), options)
            .await
    }

    /// Gets a workflow by ID or file name.
    pub async fn get_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: impl Into<WorkflowId>,
    ) -> GitHubResult<Workflow> {
        ensure_repo(owner, repo)?;
        let id = workflow_id.into().validated()?;
        self.client.get(&urls::workflow(owner, repo, &id)).await
    }

    /// Disables a workflow.
    pub async fn disable_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: impl Into<WorkflowId>,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        let id = workflow_id.into().validated()?;
        self.client
            .put_no_body_empty(&urls::workflow_disable(owner, repo, &id))
            .await
    }

    /// Enables a workflow.
    pub async fn enable_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: impl Into<WorkflowId>,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        let id = workflow_id.into().validated()?;
        self.client
            .put_no_body_empty(&urls::workflow_enable(owner, repo, &id))
            .await
    }

    /// Triggers a `workflow_dispatch` event.
    pub async fn create_workflow_dispatch(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: impl Into<WorkflowId>,
        request: &WorkflowDispatchRequest,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("ref", &request.git_ref)?;
        let id = workflow_id.into().validated()?;
        self.client
            .post_empty(&urls::workflow_dispatches(owner, repo, &id), request)
            .await
    }

    // Workflow runs

    /// Lists workflow runs in a repository.
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        params: &ListWorkflowRunsParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<WorkflowRun>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope_with_params::<WorkflowRunsResponse, _>(
                &urls::workflow_runs(owner, repo),
                params,
                options,
            )
            .await
    }

    /// Lists runs of one workflow.
    pub async fn list_runs_for_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: impl Into<WorkflowId>,
        params: &ListWorkflowRunsParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<WorkflowRun>> {
        ensure_repo(owner, repo)?;
        let id = workflow_id.into().validated()?;
        self.client
            .get_all_envelope_with_params::<WorkflowRunsResponse, _>(
                &urls::workflow_runs_for_workflow(owner, repo, &id),
                params,
                options,
            )
            .await
    }

    /// Gets a workflow run.
    pub async fn get_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<WorkflowRun> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::workflow_run(owner, repo, run_id)).await
    }

    /// Deletes a workflow run.
    pub async fn delete_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client.delete(&urls::workflow_run(owner, repo, run_id)).await
    }

    /// Re-runs a workflow run.
    pub async fn rerun_workflow(&self, owner: &str, repo: &str, run_id: u64) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .post_no_body_empty(&urls::workflow_run_rerun(owner, repo, run_id))
            .await
    }

    /// Re-runs only the failed jobs of a workflow run.
    pub async fn rerun_failed_jobs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .post_no_body_empty(&urls::workflow_run_rerun_failed(owner, repo, run_id))
            .await
    }

    /// Cancels a workflow run.
    pub async fn cancel_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .post_no_body_empty(&urls::workflow_run_cancel(owner, repo, run_id))
            .await
    }

    /// Approves a run from a fork pull request.
    pub async fn approve_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .post_no_body_empty(&urls::workflow_run_approve(owner, repo, run_id))
            .await
    }

    /// Gets billable time of a workflow run.
    pub async fn get_workflow_run_usage(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<WorkflowRunUsage> {
        ensure_repo(owner, repo)?;
        self.client
            .get(&urls::workflow_run_timing(owner, repo, run_id))
            .await
    }

    /// Downloads the logs of a workflow run as a zip archive.
    pub async fn download_workflow_run_logs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<Bytes> {
        ensure_repo(owner, repo)?;
        self.client
            .get_bytes(&urls::workflow_run_logs(owner, repo, run_id), accept::JSON)
            .await
    }

    /// Deletes the logs of a workflow run.
    pub async fn delete_workflow_run_logs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .delete(&urls::workflow_run_logs(owner, repo, run_id))
            .await
    }

    // Jobs

    /// Lists jobs of a workflow run.
    pub async fn list_jobs_for_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Job>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<JobsResponse>(
                &urls::workflow_run_jobs(owner, repo, run_id),
                options,
            )
            .await
    }

    /// Gets a job.
    pub async fn get_job(&self, owner: &str, repo: &str, job_id: u64) -> GitHubResult<Job> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::workflow_job(owner, repo, job_id)).await
    }

    /// Downloads the plain-text log of a job.
    pub async fn download_job_logs(
        &self,
        owner: &str,
        repo: &str,
        job_id: u64,
    ) -> GitHubResult<Bytes> {
        ensure_repo(owner, repo)?;
        self.client
            .get_bytes(&urls::workflow_job_logs(owner, repo, job_id), accept::JSON)
            .await
    }

    // Artifacts

    /// Lists artifacts in a repository.
    pub async fn list_artifacts(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Artifact>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<ArtifactsResponse>(&urls::artifacts(owner, repo), options)
            .await
    }

    /// Lists artifacts produced by a workflow run.
    pub async fn list_artifacts_for_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Artifact>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<ArtifactsResponse>(
                &urls::workflow_run_artifacts(owner, repo, run_id),
                options,
            )
            .await
    }

    /// Gets an artifact.
    pub async fn get_artifact(
        &self,
        owner: &str,
        repo: &str,
        artifact_id: u64,
    ) -> GitHubResult<Artifact> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::artifact(owner, repo, artifact_id)).await
    }

    /// Deletes an artifact.
    pub async fn delete_artifact(
        &self,
        owner: &str,
        repo: &str,
        artifact_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client.delete(&urls::artifact(owner, repo, artifact_id)).await
    }

    /// Downloads an artifact as a zip archive.
    pub async fn download_artifact(
        &self,
        owner: &str,
        repo: &str,
        artifact_id: u64,
    ) -> GitHubResult<Bytes> {
        ensure_repo(owner, repo)?;
        self.client
            .get_bytes(&urls::artifact_download(owner, repo, artifact_id, "zip"), accept::JSON)
            .await
    }

    // Repository secrets

    /// Lists repository secrets (names only).
    pub async fn list_secrets(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Secret>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<SecretsResponse>(&urls::repo_secrets(owner, repo), options)
            .await
    }

    /// Gets a repository secret's metadata.
    pub async fn get_secret(&self, owner: &str, repo: &str, name: &str) -> GitHubResult<Secret> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client.get(&urls::repo_secret(owner, repo, name)).await
    }

    /// Gets the key used to encrypt repository secrets.
    pub async fn get_public_key(&self, owner: &str, repo: &str) -> GitHubResult<PublicKey> {
        ensure_repo(owner, repo)?;
        self.client
            .get(&urls::repo_secrets_public_key(owner, repo))
            .await
    }

    /// Creates or updates a repository secret. The value must already be
    /// encrypted with the repository public key.
    pub async fn create_or_update_secret(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        request: &CreateSecretRequest,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        ensure_not_empty("encrypted_value", &request.encrypted_value)?;
        ensure_not_empty("key_id", &request.key_id)?;
        self.client
            .put_empty(&urls::repo_secret(owner, repo, name), request)
            .await
    }

    /// Deletes a repository secret.
    pub async fn delete_secret(&self, owner: &str, repo: &str, name: &str) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client.delete(&urls::repo_secret(owner, repo, name)).await
    }

    // Organization secrets

    /// Lists organization secrets.
    pub async fn list_org_secrets(
        &self,
        org: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<OrgSecret>> {
        ensure_segment("org", org)?;
        self.client
            .get_all_envelope::<OrgSecretsResponse>(&urls::org_secrets(org), options)
            .await
    }

    /// Gets an organization secret's metadata.
    pub async fn get_org_secret(&self, org: &str, name: &str) -> GitHubResult<OrgSecret> {
        ensure_segment("org", org)?;
        ensure_segment("name", name)?;
        self.client.get(&urls::org_secret(org, name)).await
    }

    /// Gets the key used to encrypt organization secrets.
    pub async fn get_org_public_key(&self, org: &str) -> GitHubResult<PublicKey> {
        ensure_segment("org", org)?;
        self.client.get(&urls::org_secrets_public_key(org)).await
    }

    /// Creates or updates an organization secret.
    pub async fn create_or_update_org_secret(
        &self,
        org: &str,
        name: &str,
        request: &CreateOrgSecretRequest,
    ) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("name", name)?;
        ensure_not_empty("encrypted_value", &request.encrypted_value)?;
        ensure_not_empty("key_id", &request.key_id)?;
        self.client.put_empty(&urls::org_secret(org, name), request).await
    }

    /// Deletes an organization secret.
    pub async fn delete_org_secret(&self, org: &str, name: &str) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("name", name)?;
        self.client.delete(&urls::org_secret(org, name)).await
    }

    // Variables

    /// Lists repository variables.
    pub async fn list_variables(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Variable>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<VariablesResponse>(&urls::repo_variables(owner, repo), options)
            .await
    }

    /// Gets a repository variable.
    pub async fn get_variable(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> GitHubResult<Variable> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client.get(&urls::repo_variable(owner, repo, name)).await
    }

    /// Creates a repository variable.
    pub async fn create_variable(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateVariableRequest,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("name", &request.name)?;
        self.client
            .post_empty(&urls::repo_variables(owner, repo), request)
            .await
    }

    /// Updates a repository variable.
    pub async fn update_variable(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        request: &UpdateVariableRequest,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client
            .patch_empty(&urls::repo_variable(owner, repo, name), request)
            .await
    }

    /// Deletes a repository variable.
    pub async fn delete_variable(&self, owner: &str, repo: &str, name: &str) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client.delete(&urls::repo_variable(owner, repo, name)).await
    }

    // Self-hosted runners

    /// Lists self-hosted runners of a repository.
    pub async fn list_runners(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Runner>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_envelope::<RunnersResponse>(&urls::runners(owner, repo), options)
            .await
    }

    /// Gets a self-hosted runner.
    pub async fn get_runner(
        &self,
        owner: &str,
        repo: &str,
        runner_id: u64,
    ) -> GitHubResult<Runner> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::runner(owner, repo, runner_id)).await
    }

    /// Removes a self-hosted runner.
    pub async fn delete_runner(&self, owner: &str, repo: &str, runner_id: u64) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client.delete(&urls::runner(owner, repo, runner_id)).await
    }

    /// Creates a token for registering a self-hosted runner.
    pub async fn create_registration_token(
        &self,
        owner: &str,
        repo: &str,
    ) -> GitHubResult<RunnerToken> {
        ensure_repo(owner, repo)?;
        self.client
            .post_no_body(&urls::runner_registration_token(owner, repo))
            .await
    }

    /// Creates a token for removing a self-hosted runner.
    pub async fn create_removal_token(&self, owner: &str, repo: &str) -> GitHubResult<RunnerToken> {
        ensure_repo(owner, repo)?;
        self.client
            .post_no_body(&urls::runner_removal_token(owner, repo))
            .await
    }
}

/// Workflow identifier (ID or file name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowId {
    /// Numeric workflow ID.
    Id(u64),
    /// Workflow file name, e.g. `ci.yml`.
    Filename(String),
}

impl WorkflowId {
    fn validated(self) -> GitHubResult<String> {
        let id = self.to_string();
        ensure_not_empty("workflow_id", &id)?;
        Ok(id)
    }
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowId::Id(id) => write!(f, "{}", id),
            WorkflowId::Filename(name) => write!(f, "{}", name),
        }
    }
}

impl From<u64> for WorkflowId {
    fn from(id: u64) -> Self {
        WorkflowId::Id(id)
    }
}

impl From<&str> for WorkflowId {
    fn from(name: &str) -> Self {
        WorkflowId::Filename(name.to_string())
    }
}

impl From<String> for WorkflowId {
    fn from(name: String) -> Self {
        WorkflowId::Filename(name)
    }
}

/// Workflows list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowsResponse {
    /// Total count.
    pub total_count: u32,
    /// Workflows.
    pub workflows: Vec<Workflow>,
}

list_envelope!(WorkflowsResponse, workflows, Workflow);

/// Workflow runs list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRunsResponse {
    /// Total count.
    pub total_count: u32,
    /// Workflow runs.
    pub workflow_runs: Vec<WorkflowRun>,
}

list_envelope!(WorkflowRunsResponse, workflow_runs, WorkflowRun);

/// Filters for listing workflow runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListWorkflowRunsParams {
    /// Login of the user who triggered the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Branch name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Triggering event (`push`, `pull_request`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Status or conclusion (`completed`, `failure`, `in_progress`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation date range, e.g. `>=2024-01-01`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Omit pull requests from the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_pull_requests: Option<bool>,
    /// Check suite ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_suite_id: Option<u64>,
    /// Head commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,
}

/// Request to trigger a workflow.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowDispatchRequest {
    /// Git reference (branch or tag).
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Workflow inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<HashMap<String, String>>,
}

/// Workflow run billable time.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRunUsage {
    /// Billable time per runner OS.
    #[serde(default)]
    pub billable: HashMap<String, RunnerTime>,
    /// Total run duration in milliseconds.
    pub run_duration_ms: Option<u64>,
}

/// Time spent on one runner OS.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerTime {
    /// Total milliseconds.
    pub total_ms: u64,
    /// Job count.
    #[serde(default)]
    pub jobs: u32,
}

/// Jobs list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    /// Total count.
    pub total_count: u32,
    /// Jobs.
    pub jobs: Vec<Job>,
}

list_envelope!(JobsResponse, jobs, Job);

/// A job within a workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Job ID.
    pub id: u64,
    /// Run ID.
    pub run_id: u64,
    /// Run attempt.
    pub run_attempt: Option<u32>,
    /// Head SHA.
    pub head_sha: String,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Status.
    pub status: WorkflowRunStatus,
    /// Conclusion.
    pub conclusion: Option<WorkflowRunConclusion>,
    /// Start time.
    pub started_at: Option<DateTime<Utc>>,
    /// Completion time.
    pub completed_at: Option<DateTime<Utc>>,
    /// Job name.
    pub name: String,
    /// Steps.
    #[serde(default)]
    pub steps: Vec<JobStep>,
    /// Runner labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Runner ID.
    pub runner_id: Option<u64>,
    /// Runner name.
    pub runner_name: Option<String>,
}

/// A step of a job.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStep {
    /// Step name.
    pub name: String,
    /// Status.
    pub status: WorkflowRunStatus,
    /// Conclusion.
    pub conclusion: Option<WorkflowRunConclusion>,
    /// Step number.
    pub number: u32,
    /// Start time.
    pub started_at: Option<DateTime<Utc>>,
    /// Completion time.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Artifacts list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsResponse {
    /// Total count.
    pub total_count: u32,
    /// Artifacts.
    pub artifacts: Vec<Artifact>,
}

list_envelope!(ArtifactsResponse, artifacts, Artifact);

/// Workflow artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Artifact ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Name.
    pub name: String,
    /// Size in bytes.
    pub size_in_bytes: u64,
    /// Download URL.
    pub archive_download_url: String,
    /// Whether the artifact expired.
    #[serde(default)]
    pub expired: bool,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Expiry time.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Repository secrets list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretsResponse {
    /// Total count.
    pub total_count: u32,
    /// Secrets.
    pub secrets: Vec<Secret>,
}

list_envelope!(SecretsResponse, secrets, Secret);

/// Secret metadata. Values are never returned.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    /// Secret name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Organization secrets list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgSecretsResponse {
    /// Total count.
    pub total_count: u32,
    /// Secrets.
    pub secrets: Vec<OrgSecret>,
}

list_envelope!(OrgSecretsResponse, secrets, OrgSecret);

/// Organization secret metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgSecret {
    /// Secret name.
    pub name: String,
    /// Visibility (`all`, `private`, `selected`).
    pub visibility: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Encrypted value for a repository secret.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSecretRequest {
    /// Value encrypted with the repository public key (base64).
    pub encrypted_value: String,
    /// ID of the key used.
    pub key_id: String,
}

/// Encrypted value for an organization secret.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrgSecretRequest {
    /// Value encrypted with the organization public key (base64).
    pub encrypted_value: String,
    /// ID of the key used.
    pub key_id: String,
    /// Visibility (`all`, `private`, `selected`).
    pub visibility: String,
    /// Repositories that can use the secret when visibility is `selected`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_repository_ids: Option<Vec<u64>>,
}

/// Public key for encrypting secrets.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicKey {
    /// Key ID.
    pub key_id: String,
    /// Base64 encoded key.
    pub key: String,
}

/// Variables list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct VariablesResponse {
    /// Total count.
    pub total_count: u32,
    /// Variables.
    pub variables: Vec<Variable>,
}

list_envelope!(VariablesResponse, variables, Variable);

/// Actions variable.
#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    /// Name.
    pub name: String,
    /// Value.
    pub value: String,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a variable.
#[derive(Debug, Clone, Serialize)]
pub struct CreateVariableRequest {
    /// Name.
    pub name: String,
    /// Value.
    pub value: String,
}

/// Request to update a variable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateVariableRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Runners list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnersResponse {
    /// Total count.
    pub total_count: u32,
    /// Runners.
    pub runners: Vec<Runner>,
}

list_envelope!(RunnersResponse, runners, Runner);

/// Self-hosted runner.
#[derive(Debug, Clone, Deserialize)]
pub struct Runner {
    /// Runner ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Operating system.
    pub os: String,
    /// `online` or `offline`.
    pub status: String,
    /// Whether the runner is running a job.
    #[serde(default)]
    pub busy: bool,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<RunnerLabel>,
}

/// Runner label.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerLabel {
    /// Label ID.
    pub id: Option<u64>,
    /// Label name.
    pub name: String,
    /// `read-only` or `custom`.
    #[serde(rename = "type")]
    pub label_type: Option<String>,
}

/// Registration or removal token for a runner.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerToken {
    /// Token.
    pub token: String,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
}
