//! Core data types for GitHub API.
//!
//! Payloads mirror GitHub's JSON. Fields GitHub omits depending on the
//! endpoint or the caller's permissions are `Option` or defaulted, and
//! enums whose value sets grow over time fall back to an `Unknown` variant.

use crate::errors::{GitHubError, GitHubResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GitHub user (minimal representation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: u64,
    /// Username (login).
    pub login: String,
    /// User node ID.
    #[serde(default)]
    pub node_id: String,
    /// Avatar URL.
    #[serde(default)]
    pub avatar_url: String,
    /// User type (User, Organization, Bot).
    #[serde(rename = "type", default)]
    pub user_type: String,
    /// Site admin flag.
    #[serde(default)]
    pub site_admin: bool,
    /// Profile URL.
    #[serde(default)]
    pub html_url: String,
}

/// Full profile returned by `GET /user` and `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Summary fields.
    #[serde(flatten)]
    pub user: User,
    /// Display name.
    pub name: Option<String>,
    /// Company.
    pub company: Option<String>,
    /// Blog URL.
    pub blog: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Public email.
    pub email: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Twitter username.
    pub twitter_username: Option<String>,
    /// Public repository count.
    #[serde(default)]
    pub public_repos: u32,
    /// Public gist count.
    #[serde(default)]
    pub public_gists: u32,
    /// Follower count.
    #[serde(default)]
    pub followers: u32,
    /// Following count.
    #[serde(default)]
    pub following: u32,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// GitHub repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Repository name.
    pub name: String,
    /// Full name (owner/repo).
    pub full_name: String,
    /// Owner information.
    pub owner: User,
    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,
    /// Visibility (`public`, `private`, `internal`).
    pub visibility: Option<String>,
    /// Repository description.
    pub description: Option<String>,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,
    /// Repository URL.
    #[serde(default)]
    pub url: String,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Clone URL.
    pub clone_url: Option<String>,
    /// SSH URL.
    pub ssh_url: Option<String>,
    /// Default branch.
    pub default_branch: Option<String>,
    /// Primary language.
    pub language: Option<String>,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u32,
    /// Stargazer count.
    #[serde(default)]
    pub stargazers_count: u32,
    /// Watcher count.
    #[serde(default)]
    pub watchers_count: u32,
    /// Open issue count.
    #[serde(default)]
    pub open_issues_count: u32,
    /// Repository size in KB.
    #[serde(default)]
    pub size: u64,
    /// Topics.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Whether issues are enabled.
    #[serde(default = "default_true")]
    pub has_issues: bool,
    /// Whether projects are enabled.
    #[serde(default = "default_true")]
    pub has_projects: bool,
    /// Whether wiki is enabled.
    #[serde(default = "default_true")]
    pub has_wiki: bool,
    /// Whether the repository is archived.
    #[serde(default)]
    pub archived: bool,
    /// Whether the repository is disabled.
    #[serde(default)]
    pub disabled: bool,
    /// Whether the repository is a template.
    #[serde(default)]
    pub is_template: bool,
    /// License information.
    pub license: Option<License>,
    /// Permissions of the authenticated user.
    pub permissions: Option<RepositoryPermissions>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Last push time.
    pub pushed_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Access the authenticated user has to a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPermissions {
    /// Administer the repository.
    #[serde(default)]
    pub admin: bool,
    /// Maintain the repository.
    #[serde(default)]
    pub maintain: bool,
    /// Push to the repository.
    #[serde(default)]
    pub push: bool,
    /// Triage issues and pull requests.
    #[serde(default)]
    pub triage: bool,
    /// Read the repository.
    #[serde(default)]
    pub pull: bool,
}

/// Repository license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License key.
    pub key: String,
    /// License name.
    pub name: String,
    /// SPDX ID.
    pub spdx_id: Option<String>,
    /// License URL.
    pub url: Option<String>,
    /// Node ID.
    pub node_id: Option<String>,
}

/// GitHub branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name.
    pub name: String,
    /// Commit reference.
    pub commit: BranchCommit,
    /// Whether branch is protected.
    #[serde(default)]
    pub protected: bool,
}

/// Branch commit reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCommit {
    /// Commit SHA.
    pub sha: String,
    /// Commit URL.
    #[serde(default)]
    pub url: String,
}

/// GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Issue number.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body.
    pub body: Option<String>,
    /// Issue state.
    pub state: IssueState,
    /// Reason the issue was closed (`completed`, `not_planned`, `reopened`).
    pub state_reason: Option<String>,
    /// Issue author.
    pub user: Option<User>,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Assignees.
    #[serde(default)]
    pub assignees: Vec<User>,
    /// Milestone.
    pub milestone: Option<Milestone>,
    /// Whether the issue is locked.
    #[serde(default)]
    pub locked: bool,
    /// Lock reason.
    pub active_lock_reason: Option<String>,
    /// Comment count.
    #[serde(default)]
    pub comments: u32,
    /// Present when the issue is a pull request.
    pub pull_request: Option<IssuePullRequestLinks>,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Close time.
    pub closed_at: Option<DateTime<Utc>>,
    /// User who closed the issue.
    pub closed_by: Option<User>,
}

impl Issue {
    /// Returns true when this issue is the issue half of a pull request.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Links attached to issues that are pull requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuePullRequestLinks {
    /// API URL of the pull request.
    pub url: Option<String>,
    /// HTML URL of the pull request.
    pub html_url: Option<String>,
    /// Merge time.
    pub merged_at: Option<DateTime<Utc>>,
}

/// Issue state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Open issue.
    Open,
    /// Closed issue.
    Closed,
}

/// State filter for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StateFilter {
    /// Open items only.
    Open,
    /// Closed items only.
    Closed,
    /// Both.
    All,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// GitHub label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Label ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Label name.
    pub name: String,
    /// Label description.
    pub description: Option<String>,
    /// Label color (hex).
    #[serde(default)]
    pub color: String,
    /// Default label flag.
    #[serde(default)]
    pub default: bool,
}

/// GitHub milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Milestone number.
    pub number: u64,
    /// Milestone title.
    pub title: String,
    /// Milestone description.
    pub description: Option<String>,
    /// Milestone state.
    pub state: MilestoneState,
    /// Creator.
    pub creator: Option<User>,
    /// Open issue count.
    #[serde(default)]
    pub open_issues: u32,
    /// Closed issue count.
    #[serde(default)]
    pub closed_issues: u32,
    /// Due date.
    pub due_on: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Close time.
    pub closed_at: Option<DateTime<Utc>>,
}

/// Milestone state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    /// Open milestone.
    Open,
    /// Closed milestone.
    Closed,
}

/// GitHub pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// PR number.
    pub number: u64,
    /// PR title.
    pub title: String,
    /// PR body.
    pub body: Option<String>,
    /// PR state.
    pub state: PullRequestState,
    /// PR author.
    pub user: Option<User>,
    /// Head branch info.
    pub head: PullRequestRef,
    /// Base branch info.
    pub base: PullRequestRef,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Assignees.
    #[serde(default)]
    pub assignees: Vec<User>,
    /// Requested reviewers.
    #[serde(default)]
    pub requested_reviewers: Vec<User>,
    /// Milestone.
    pub milestone: Option<Milestone>,
    /// Whether the PR is locked.
    #[serde(default)]
    pub locked: bool,
    /// Whether the PR is a draft.
    #[serde(default)]
    pub draft: bool,
    /// Whether the PR is merged. Only present on single-PR responses.
    #[serde(default)]
    pub merged: bool,
    /// Merge commit SHA.
    pub merge_commit_sha: Option<String>,
    /// User who merged the PR.
    pub merged_by: Option<User>,
    /// Merged time.
    pub merged_at: Option<DateTime<Utc>>,
    /// Whether the PR is mergeable. `None` while GitHub computes it.
    pub mergeable: Option<bool>,
    /// Mergeable state.
    pub mergeable_state: Option<String>,
    /// Comment count.
    pub comments: Option<u32>,
    /// Review comment count.
    pub review_comments: Option<u32>,
    /// Commit count.
    pub commits: Option<u32>,
    /// Additions.
    pub additions: Option<u32>,
    /// Deletions.
    pub deletions: Option<u32>,
    /// Changed files count.
    pub changed_files: Option<u32>,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Close time.
    pub closed_at: Option<DateTime<Utc>>,
}

/// Pull request state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    /// Open PR.
    Open,
    /// Closed PR.
    Closed,
}

/// Pull request branch reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Branch label.
    #[serde(default)]
    pub label: String,
    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Commit SHA.
    pub sha: String,
    /// User.
    pub user: Option<User>,
    /// Repository. `None` when the fork was deleted.
    pub repo: Option<Box<Repository>>,
}

/// GitHub release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Release ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Tag name.
    pub tag_name: String,
    /// Target commitish.
    #[serde(default)]
    pub target_commitish: String,
    /// Release name.
    pub name: Option<String>,
    /// Release body.
    pub body: Option<String>,
    /// Whether it's a draft.
    #[serde(default)]
    pub draft: bool,
    /// Whether it's a prerelease.
    #[serde(default)]
    pub prerelease: bool,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Publish time.
    pub published_at: Option<DateTime<Utc>>,
    /// Author.
    pub author: Option<User>,
    /// Assets.
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Tarball URL.
    pub tarball_url: Option<String>,
    /// Zipball URL.
    pub zipball_url: Option<String>,
}

/// Release asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// Asset ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Asset name.
    pub name: String,
    /// Asset label.
    pub label: Option<String>,
    /// Content type.
    #[serde(default)]
    pub content_type: String,
    /// Asset state.
    #[serde(default)]
    pub state: String,
    /// Asset size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Download count.
    #[serde(default)]
    pub download_count: u64,
    /// Browser download URL.
    #[serde(default)]
    pub browser_download_url: String,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Uploader.
    pub uploader: Option<User>,
}

/// Repository content (file or directory).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Content type.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Content encoding.
    pub encoding: Option<String>,
    /// Content size.
    #[serde(default)]
    pub size: u64,
    /// Content name.
    pub name: String,
    /// Content path.
    pub path: String,
    /// Content (base64 encoded for files).
    pub content: Option<String>,
    /// Git SHA.
    pub sha: String,
    /// Content URL.
    #[serde(default)]
    pub url: String,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Git URL.
    pub git_url: Option<String>,
    /// Download URL.
    pub download_url: Option<String>,
    /// Symlink target.
    pub target: Option<String>,
}

impl Content {
    /// Decodes the base64 file body. `None` for directories and listings.
    pub fn decoded(&self) -> Option<GitHubResult<Vec<u8>>> {
        match (self.encoding.as_deref(), self.content.as_deref()) {
            (Some("base64"), Some(body)) => Some(decode_base64(body)),
            (_, Some(body)) => Some(Ok(body.as_bytes().to_vec())),
            _ => None,
        }
    }
}

/// Decodes GitHub's line-wrapped base64.
pub(crate) fn decode_base64(body: &str) -> GitHubResult<Vec<u8>> {
    use base64::Engine;
    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| GitHubError::deserialization(format!("invalid base64 content: {}", e)))
}

/// Content type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// File content.
    File,
    /// Directory content.
    Dir,
    /// Symbolic link.
    Symlink,
    /// Git submodule.
    Submodule,
}

/// Workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// Workflow ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Workflow name.
    pub name: String,
    /// Workflow path.
    pub path: String,
    /// Workflow state.
    pub state: WorkflowState,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Badge URL.
    #[serde(default)]
    pub badge_url: String,
}

/// Workflow state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Active workflow.
    Active,
    /// Deleted workflow.
    Deleted,
    /// Disabled because the repository is a fork.
    DisabledFork,
    /// Disabled by inactivity.
    DisabledInactivity,
    /// Disabled manually.
    DisabledManually,
    /// A state this client does not know.
    #[serde(other)]
    Unknown,
}

/// Workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Run ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Run name.
    pub name: Option<String>,
    /// Workflow ID.
    pub workflow_id: u64,
    /// Run number.
    pub run_number: u32,
    /// Run attempt.
    pub run_attempt: Option<u32>,
    /// Event that triggered the run.
    pub event: String,
    /// Run status.
    pub status: Option<WorkflowRunStatus>,
    /// Run conclusion.
    pub conclusion: Option<WorkflowRunConclusion>,
    /// Head branch.
    pub head_branch: Option<String>,
    /// Head SHA.
    pub head_sha: String,
    /// User who triggered the run.
    pub actor: Option<User>,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Run start time.
    pub run_started_at: Option<DateTime<Utc>>,
}

/// Workflow run status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowRunStatus {
    /// Queued.
    Queued,
    /// In progress.
    InProgress,
    /// Completed.
    Completed,
    /// Waiting.
    Waiting,
    /// Requested.
    Requested,
    /// Pending.
    Pending,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

/// Workflow run conclusion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowRunConclusion {
    /// Success.
    Success,
    /// Failure.
    Failure,
    /// Neutral.
    Neutral,
    /// Cancelled.
    Cancelled,
    /// Skipped.
    Skipped,
    /// Timed out.
    TimedOut,
    /// Action required.
    ActionRequired,
    /// Stale.
    Stale,
    /// Startup failure.
    StartupFailure,
    /// A conclusion this client does not know.
    #[serde(other)]
    Unknown,
}

/// Organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Organization login.
    pub login: String,
    /// Organization name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Company.
    pub company: Option<String>,
    /// Blog URL.
    pub blog: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// Twitter username.
    pub twitter_username: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar_url: String,
    /// HTML URL. Absent from list responses.
    pub html_url: Option<String>,
    /// Public repos count.
    pub public_repos: Option<u32>,
    /// Public gists count.
    pub public_gists: Option<u32>,
    /// Followers count.
    pub followers: Option<u32>,
    /// Following count.
    pub following: Option<u32>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Team slug.
    pub slug: String,
    /// Team name.
    pub name: String,
    /// Team description.
    pub description: Option<String>,
    /// Privacy level.
    pub privacy: Option<TeamPrivacy>,
    /// Permission level.
    pub permission: Option<String>,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Members count.
    pub members_count: Option<u32>,
    /// Repos count.
    pub repos_count: Option<u32>,
    /// Parent team.
    pub parent: Option<Box<Team>>,
}

/// Team privacy level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TeamPrivacy {
    /// Secret team.
    Secret,
    /// Closed team.
    Closed,
}

/// Gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    /// Gist ID.
    pub id: String,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Gist description.
    pub description: Option<String>,
    /// Whether the gist is public.
    #[serde(default)]
    pub public: bool,
    /// Gist owner.
    pub owner: Option<User>,
    /// Gist files.
    #[serde(default)]
    pub files: HashMap<String, GistFile>,
    /// Comment count.
    #[serde(default)]
    pub comments: u32,
    /// HTML URL.
    #[serde(default)]
    pub html_url: String,
    /// Git pull URL.
    pub git_pull_url: Option<String>,
    /// Git push URL.
    pub git_push_url: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Gist file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    /// Filename.
    pub filename: String,
    /// File type.
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    /// File language.
    pub language: Option<String>,
    /// Raw URL.
    pub raw_url: Option<String>,
    /// File size.
    #[serde(default)]
    pub size: u64,
    /// File content (may be truncated).
    pub content: Option<String>,
    /// Whether content is truncated.
    #[serde(default)]
    pub truncated: bool,
}

/// Comment (generic for issues, gists and commits).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// Comment body.
    #[serde(default)]
    pub body: String,
    /// Comment author.
    pub user: Option<User>,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// A cloud development environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Codespace {
    /// Codespace ID.
    pub id: u64,
    /// Unique name, used in URLs.
    pub name: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Environment ID.
    pub environment_id: Option<String>,
    /// Owner of the codespace.
    pub owner: User,
    /// User billed for the codespace.
    pub billable_owner: Option<User>,
    /// Repository the codespace was created from.
    pub repository: Repository,
    /// Machine the codespace runs on.
    pub machine: Option<CodespaceMachine>,
    /// Whether the codespace was prebuilt.
    #[serde(default)]
    pub prebuild: bool,
    /// Current state.
    pub state: CodespaceState,
    /// Git status of the working tree.
    pub git_status: Option<CodespaceGitStatus>,
    /// Azure region or geographic location.
    pub location: Option<String>,
    /// Minutes of inactivity before the codespace stops.
    pub idle_timeout_minutes: Option<u32>,
    /// API URL.
    #[serde(default)]
    pub url: String,
    /// Browser URL.
    pub web_url: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Last time the codespace was used.
    pub last_used_at: Option<DateTime<Utc>>,
}

/// Codespace lifecycle state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CodespaceState {
    /// Not yet provisioned.
    Unknown,
    /// Being created.
    Created,
    /// Queued for provisioning.
    Queued,
    /// Provisioning resources.
    Provisioning,
    /// Running and usable.
    Available,
    /// Waiting for a connection.
    Awaiting,
    /// Not available.
    Unavailable,
    /// Being deleted.
    Deleted,
    /// Moved to another location.
    Moved,
    /// Stopped.
    Shutdown,
    /// Archived.
    Archived,
    /// Starting up.
    Starting,
    /// Shutting down.
    ShuttingDown,
    /// Failed to start or provision.
    Failed,
    /// Exporting state.
    Exporting,
    /// Updating.
    Updating,
    /// Rebuilding the container.
    Rebuilding,
    /// A state this client does not know.
    #[serde(other)]
    Unrecognized,
}

/// Git status of a codespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodespaceGitStatus {
    /// Commits ahead of the remote.
    #[serde(default)]
    pub ahead: u32,
    /// Commits behind the remote.
    #[serde(default)]
    pub behind: u32,
    /// Whether there are unpushed changes.
    #[serde(default)]
    pub has_unpushed_changes: bool,
    /// Whether there are uncommitted changes.
    #[serde(default)]
    pub has_uncommitted_changes: bool,
    /// Checked-out ref.
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
}

/// Machine type a codespace can run on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodespaceMachine {
    /// Machine name, e.g. `standardLinux`.
    pub name: String,
    /// Display name.
    pub display_name: String,
    /// Operating system.
    pub operating_system: String,
    /// Storage in bytes.
    pub storage_in_bytes: u64,
    /// Memory in bytes.
    pub memory_in_bytes: u64,
    /// CPU count.
    pub cpus: u32,
    /// Prebuild availability (`none`, `ready`, `in_progress`).
    pub prebuild_availability: Option<String>,
}
