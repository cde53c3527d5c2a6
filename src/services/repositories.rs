//! Repository operations.

use crate::client::{accept, GitHubClient};
use crate::errors::{
    ensure_not_empty, ensure_path, ensure_repo, ensure_segment, GitHubError, GitHubErrorKind,
    GitHubResult,
};
use crate::pagination::ApiOptions;
use crate::types::{Branch, Content, Release, ReleaseAsset, Repository, SortDirection, User};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service for repository operations.
pub struct RepositoriesService<'a> {
    client: &'a GitHubClient,
}

impl<'a> RepositoriesService<'a> {
    /// Creates a new repositories service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Lists repositories of the authenticated user.
    pub async fn list_for_current(
        &self,
        params: &ListReposParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Repository>> {
        self.client
            .get_all_with_params(&urls::current_user_repositories(), params, options)
            .await
    }

    /// Lists public repositories of a user.
    pub async fn list_for_user(
        &self,
        username: &str,
        params: &ListReposParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Repository>> {
        ensure_segment("username", username)?;
        self.client
            .get_all_with_params(&urls::user_repositories(username), params, options)
            .await
    }

    /// Lists repositories of an organization.
    pub async fn list_for_org(
        &self,
        org: &str,
        params: &ListReposParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Repository>> {
        ensure_segment("org", org)?;
        self.client
            .get_all_with_params(&urls::org_repositories(org), params, options)
            .await
    }

    /// Lists all public repositories, starting after the given repository ID.
    pub async fn list_all_public(
        &self,
        since: Option<u64>,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Repository>> {
        self.client
            .get_all_with_params(&urls::all_public_repositories(), &SinceParams { since }, options)
            .await
    }

    /// Gets a repository.
    pub async fn get(&self, owner: &str, repo: &str) -> GitHubResult<Repository> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::repository(owner, repo)).await
    }

    /// Gets a repository by its numeric ID.
    pub async fn get_by_id(&self, id: u64) -> GitHubResult<Repository> {
        self.client.get(&urls::repository_by_id(id)).await
    }

    /// Creates a repository for the authenticated user.
    pub async fn create(&self, request: &CreateRepoRequest) -> GitHubResult<Repository> {
        ensure_not_empty("name", &request.name)?;
        self.client
            .post(&urls::current_user_repositories(), request)
            .await
            .map_err(refine_create_error)
    }

    /// Creates a repository in an organization.
    pub async fn create_for_org(
        &self,
        org: &str,
        request: &CreateRepoRequest,
    ) -> GitHubResult<Repository> {
        ensure_segment("org", org)?;
        ensure_not_empty("name", &request.name)?;
        self.client
            .post(&urls::org_repositories(org), request)
            .await
            .map_err(refine_create_error)
    }

    /// Updates a repository.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        request: &UpdateRepoRequest,
    ) -> GitHubResult<Repository> {
        ensure_repo(owner, repo)?;
        self.client.patch(&urls::repository(owner, repo), request).await
    }

    /// Deletes a repository.
    pub async fn delete(&self, owner: &str, repo: &str) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client.delete(&urls::repository(owner, repo)).await
    }

    /// Transfers a repository to another user or organization.
    pub async fn transfer(
        &self,
        owner: &str,
        repo: &str,
        request: &TransferRepoRequest,
    ) -> GitHubResult<Repository> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("new_owner", &request.new_owner)?;
        self.client
            .post(&urls::repository_transfer(owner, repo), request)
            .await
    }

    // Branches

    /// Lists branches.
    pub async fn list_branches(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Branch>> {
        ensure_repo(owner, repo)?;
        self.client.get_all(&urls::branches(owner, repo), options).await
    }

    /// Gets a branch.
    pub async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> GitHubResult<Branch> {
        ensure_repo(owner, repo)?;
        ensure_segment("branch", branch)?;
        self.client.get(&urls::branch(owner, repo, branch)).await
    }

    // Collaborators

    /// Lists collaborators.
    pub async fn list_collaborators(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Collaborator>> {
        ensure_repo(owner, repo)?;
        self.client.get_all(&urls::collaborators(owner, repo), options).await
    }

    /// Checks whether a user is a collaborator.
    pub async fn is_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> GitHubResult<bool> {
        ensure_repo(owner, repo)?;
        ensure_segment("username", username)?;
        self.client
            .get_status(&urls::collaborator(owner, repo, username))
            .await
    }

    /// Adds a collaborator, or invites them when they are not yet a member.
    pub async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: Option<&str>,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("username", username)?;
        let body = AddCollaboratorRequest {
            permission: permission.map(str::to_string),
        };
        self.client
            .put_empty(&urls::collaborator(owner, repo, username), &body)
            .await
    }

    /// Removes a collaborator.
    pub async fn remove_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("username", username)?;
        self.client
            .delete(&urls::collaborator(owner, repo, username))
            .await
    }

    // Commits

    /// Lists commits.
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        params: &ListCommitsParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<RepoCommit>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_with_params(&urls::commits(owner, repo), params, options)
            .await
    }

    /// Gets a commit by SHA, branch or tag.
    pub async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> GitHubResult<RepoCommit> {
        ensure_repo(owner, repo)?;
        ensure_segment("reference", reference)?;
        self.client.get(&urls::commit(owner, repo, reference)).await
    }

    /// Compares two commits.
    pub async fn compare(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> GitHubResult<CommitComparison> {
        ensure_repo(owner, repo)?;
        ensure_segment("base", base)?;
        ensure_segment("head", head)?;
        self.client.get(&urls::compare(owner, repo, base, head)).await
    }

    // Metadata

    /// Lists tags.
    pub async fn list_tags(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<RepoTag>> {
        ensure_repo(owner, repo)?;
        self.client.get_all(&urls::tags(owner, repo), options).await
    }

    /// Lists languages with the number of bytes written in each.
    pub async fn list_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> GitHubResult<HashMap<String, u64>> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::languages(owner, repo)).await
    }

    /// Lists contributors.
    pub async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        include_anonymous: bool,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Contributor>> {
        ensure_repo(owner, repo)?;
        let params = ContributorsParams {
            anon: include_anonymous.then_some(true),
        };
        self.client
            .get_all_with_params(&urls::contributors(owner, repo), &params, options)
            .await
    }

    /// Gets repository topics.
    pub async fn get_topics(&self, owner: &str, repo: &str) -> GitHubResult<Vec<String>> {
        ensure_repo(owner, repo)?;
        let topics: Topics = self.client.get(&urls::topics(owner, repo)).await?;
        Ok(topics.names)
    }

    /// Replaces all repository topics.
    pub async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        names: &[String],
    ) -> GitHubResult<Vec<String>> {
        ensure_repo(owner, repo)?;
        let body = Topics {
            names: names.to_vec(),
        };
        let topics: Topics = self.client.put(&urls::topics(owner, repo), &body).await?;
        Ok(topics.names)
    }

    // Contents

    /// Gets the contents of a file or directory. A file yields one entry.
    pub async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> GitHubResult<Vec<Content>> {
        ensure_repo(owner, repo)?;
        ensure_path("path", path)?;
        let params = RefParams::new(git_ref);
        let contents: Contents = self
            .client
            .get_with_params(&urls::contents(owner, repo, path), &params)
            .await?;
        Ok(contents.into_vec())
    }

    /// Gets the raw bytes of a file as text.
    pub async fn get_raw_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> GitHubResult<String> {
        ensure_repo(owner, repo)?;
        ensure_segment("path", path)?;
        self.client
            .get_text_with_params(
                &urls::contents(owner, repo, path),
                &RefParams::new(git_ref),
                accept::RAW,
            )
            .await
    }

    /// Gets the README.
    pub async fn get_readme(&self, owner: &str, repo: &str) -> GitHubResult<Content> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::readme(owner, repo)).await
    }

    /// Gets the README rendered as HTML.
    pub async fn get_readme_html(&self, owner: &str, repo: &str) -> GitHubResult<String> {
        ensure_repo(owner, repo)?;
        self.client
            .get_text_with_accept(&urls::readme(owner, repo), accept::HTML)
            .await
    }

    /// Creates or updates a file.
    pub async fn create_or_update_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        request: &CreateOrUpdateFileRequest,
    ) -> GitHubResult<FileCommitResponse> {
        ensure_repo(owner, repo)?;
        ensure_segment("path", path)?;
        ensure_not_empty("message", &request.message)?;
        self.client
            .put(&urls::contents(owner, repo, path), request)
            .await
    }

    /// Deletes a file.
    pub async fn delete_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        request: &DeleteFileRequest,
    ) -> GitHubResult<FileCommitResponse> {
        ensure_repo(owner, repo)?;
        ensure_segment("path", path)?;
        ensure_not_empty("message", &request.message)?;
        ensure_not_empty("sha", &request.sha)?;
        self.client
            .delete_with_response(&urls::contents(owner, repo, path), request)
            .await
    }

    // Releases

    /// Lists releases.
    pub async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Release>> {
        ensure_repo(owner, repo)?;
        self.client.get_all(&urls::releases(owner, repo), options).await
    }

    /// Gets a release.
    pub async fn get_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> GitHubResult<Release> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::release(owner, repo, release_id)).await
    }

    /// Gets the latest published release.
    pub async fn get_latest_release(&self, owner: &str, repo: &str) -> GitHubResult<Release> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::latest_release(owner, repo)).await
    }

    /// Gets a release by tag.
    pub async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> GitHubResult<Release> {
        ensure_repo(owner, repo)?;
        ensure_segment("tag", tag)?;
        self.client.get(&urls::release_by_tag(owner, repo, tag)).await
    }

    /// Creates a release.
    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateReleaseRequest,
    ) -> GitHubResult<Release> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("tag_name", &request.tag_name)?;
        self.client.post(&urls::releases(owner, repo), request).await
    }

    /// Updates a release.
    pub async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        request: &UpdateReleaseRequest,
    ) -> GitHubResult<Release> {
        ensure_repo(owner, repo)?;
        self.client
            .patch(&urls::release(owner, repo, release_id), request)
            .await
    }

    /// Deletes a release.
    pub async fn delete_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client.delete(&urls::release(owner, repo, release_id)).await
    }

    /// Lists the assets of a release.
    pub async fn list_release_assets(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<ReleaseAsset>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::release_assets(owner, repo, release_id), options)
            .await
    }

    /// Gets a release asset's metadata.
    pub async fn get_release_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
    ) -> GitHubResult<ReleaseAsset> {
        ensure_repo(owner, repo)?;
        self.client
            .get(&urls::release_asset(owner, repo, asset_id))
            .await
    }
}

/// Maps a 422 on repository creation to a more specific kind.
fn refine_create_error(error: GitHubError) -> GitHubError {
    if *error.kind() != GitHubErrorKind::ValidationFailed {
        return error;
    }

    let mut text = error.message().to_lowercase();
    for detail in error.errors() {
        if let Some(message) = &detail.message {
            text.push(' ');
            text.push_str(&message.to_lowercase());
        }
    }

    if text.contains("name already exists") {
        error.with_kind(GitHubErrorKind::RepositoryExists)
    } else if text.contains("upgrade your plan") || text.contains("private repositor") {
        error.with_kind(GitHubErrorKind::PrivateRepositoryQuotaExceeded)
    } else {
        error
    }
}

#[derive(Serialize)]
struct SinceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<u64>,
}

#[derive(Serialize)]
struct ContributorsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    anon: Option<bool>,
}

#[derive(Serialize)]
struct RefParams {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    git_ref: Option<String>,
}

impl RefParams {
    fn new(git_ref: Option<&str>) -> Self {
        Self {
            git_ref: git_ref.map(str::to_string),
        }
    }
}

#[derive(Serialize)]
struct AddCollaboratorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    permission: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct Topics {
    names: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Contents {
    Many(Vec<Content>),
    One(Box<Content>),
}

impl Contents {
    fn into_vec(self) -> Vec<Content> {
        match self {
            Contents::Many(items) => items,
            Contents::One(item) => vec![*item],
        }
    }
}

/// Parameters for listing repositories.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListReposParams {
    /// Type filter.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub repo_type: Option<RepoType>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<RepoSort>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// Repository type filter.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    All,
    Owner,
    Public,
    Private,
    Member,
}

/// Repository sort field.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

/// Request to create a repository.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRepoRequest {
    /// Repository name.
    pub name: String,
    /// Repository description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Homepage URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Whether the repository is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Whether issues are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    /// Whether projects are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    /// Whether wiki is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    /// Team granted access (organization repositories only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,
    /// Auto-initialize with README.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,
    /// Gitignore template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    /// License template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
}

impl CreateRepoRequest {
    /// Creates a request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Request to update a repository.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRepoRequest {
    /// Repository name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Repository description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Homepage URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Whether the repository is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    /// Whether the repository is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Request to transfer a repository.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRepoRequest {
    /// Login of the new owner.
    pub new_owner: String,
    /// New name, if it should change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    /// Teams granted access (organization targets only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_ids: Option<Vec<u64>>,
}

/// Repository collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct Collaborator {
    /// The user.
    #[serde(flatten)]
    pub user: User,
    /// Role name (`admin`, `write`, ...).
    pub role_name: Option<String>,
}

/// Filters for listing commits.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCommitsParams {
    /// SHA or branch to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Only commits touching this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Author login or email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Only commits after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    /// Only commits before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
}

/// A commit as returned by the repository commits API.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoCommit {
    /// Commit SHA.
    pub sha: String,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Git commit data.
    pub commit: CommitDetail,
    /// GitHub author, when the email maps to an account.
    pub author: Option<User>,
    /// GitHub committer.
    pub committer: Option<User>,
    /// Parents.
    #[serde(default)]
    pub parents: Vec<CommitParent>,
    /// Line statistics (single commit only).
    pub stats: Option<CommitStats>,
    /// Changed files (single commit only).
    #[serde(default)]
    pub files: Vec<CommitFile>,
}

/// Git-level commit data.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    /// Message.
    pub message: String,
    /// Author signature.
    pub author: Option<CommitSignature>,
    /// Committer signature.
    pub committer: Option<CommitSignature>,
    /// Number of comments.
    #[serde(default)]
    pub comment_count: u32,
}

/// Name, email and time of an author or committer.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Time.
    pub date: Option<DateTime<Utc>>,
}

/// Commit parent reference.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitParent {
    /// Parent SHA.
    pub sha: String,
}

/// Commit line statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitStats {
    /// Additions.
    pub additions: u32,
    /// Deletions.
    pub deletions: u32,
    /// Total.
    pub total: u32,
}

/// A file changed by a commit.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitFile {
    /// File name.
    pub filename: String,
    /// `added`, `modified`, `removed`, `renamed`, ...
    pub status: String,
    /// Additions.
    #[serde(default)]
    pub additions: u32,
    /// Deletions.
    #[serde(default)]
    pub deletions: u32,
    /// Changes.
    #[serde(default)]
    pub changes: u32,
    /// Unified diff hunk.
    pub patch: Option<String>,
    /// Previous name for renames.
    pub previous_filename: Option<String>,
}

/// Comparison between two commits.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitComparison {
    /// `ahead`, `behind`, `identical` or `diverged`.
    pub status: String,
    /// Commits ahead.
    pub ahead_by: u32,
    /// Commits behind.
    pub behind_by: u32,
    /// Total commits.
    pub total_commits: u32,
    /// Commits in the comparison.
    #[serde(default)]
    pub commits: Vec<RepoCommit>,
    /// Changed files.
    #[serde(default)]
    pub files: Vec<CommitFile>,
}

/// Lightweight tag listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoTag {
    /// Tag name.
    pub name: String,
    /// Tagged commit.
    pub commit: CommitParent,
    /// Zipball URL.
    pub zipball_url: Option<String>,
    /// Tarball URL.
    pub tarball_url: Option<String>,
}

/// Repository contributor.
#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    /// Login (absent for anonymous contributors).
    pub login: Option<String>,
    /// User ID.
    pub id: Option<u64>,
    /// Name (anonymous contributors only).
    pub name: Option<String>,
    /// `User` or `Anonymous`.
    #[serde(rename = "type")]
    pub contributor_type: String,
    /// Number of contributions.
    pub contributions: u32,
}

/// Request to create or update a file.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrUpdateFileRequest {
    /// Commit message.
    pub message: String,
    /// File content (base64 encoded).
    pub content: String,
    /// SHA of the file being replaced (for updates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Branch name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Committer information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<CommitAuthor>,
    /// Author information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<CommitAuthor>,
}

impl CreateOrUpdateFileRequest {
    /// Creates a request from plain file contents, encoding them as base64.
    pub fn new(message: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        use base64::Engine;
        Self {
            message: message.into(),
            content: base64::engine::general_purpose::STANDARD.encode(content),
            sha: None,
            branch: None,
            committer: None,
            author: None,
        }
    }
}

/// Request to delete a file.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteFileRequest {
    /// Commit message.
    pub message: String,
    /// SHA of the file being deleted.
    pub sha: String,
    /// Branch name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Committer information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<CommitAuthor>,
    /// Author information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<CommitAuthor>,
}

/// Commit author information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name.
    pub name: String,
    /// Author email.
    pub email: String,
}

/// Response from file commit operations.
#[derive(Debug, Clone, Deserialize)]
pub struct FileCommitResponse {
    /// The committed content (absent after deletes).
    pub content: Option<Content>,
    /// The commit.
    pub commit: FileCommit,
}

/// Commit information from file operations.
#[derive(Debug, Clone, Deserialize)]
pub struct FileCommit {
    /// Commit SHA.
    pub sha: String,
    /// Commit message.
    pub message: String,
    /// Commit URL.
    pub html_url: Option<String>,
}

/// Request to create a release.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateReleaseRequest {
    /// Tag name.
    pub tag_name: String,
    /// Target commitish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    /// Release name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Whether it's a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    /// Whether it's a prerelease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<bool>,
    /// Generate release notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_release_notes: Option<bool>,
}

/// Request to update a release.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReleaseRequest {
    /// Tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    /// Target commitish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    /// Release name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Whether it's a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    /// Whether it's a prerelease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<bool>,
}
