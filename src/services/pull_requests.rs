//! Pull request operations.

use crate::client::{accept, GitHubClient};
use crate::errors::{ensure_not_empty, ensure_repo, GitHubError, GitHubErrorKind, GitHubResult};
use crate::pagination::ApiOptions;
use crate::services::repositories::CommitDetail;
use crate::types::{PullRequest, PullRequestState, SortDirection, StateFilter, Team, User};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service for pull request operations.
pub struct PullRequestsService<'a> {
    client: &'a GitHubClient,
}

impl<'a> PullRequestsService<'a> {
    /// Creates a new pull requests service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Lists pull requests.
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        params: &ListPullRequestsParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<PullRequest>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_with_params(&urls::pulls(owner, repo), params, options)
            .await
    }

    /// Gets a pull request.
    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> GitHubResult<PullRequest> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::pull(owner, repo, number)).await
    }

    /// Gets the unified diff of a pull request.
    pub async fn get_diff(&self, owner: &str, repo: &str, number: u64) -> GitHubResult<String> {
        ensure_repo(owner, repo)?;
        self.client
            .get_text_with_accept(&urls::pull(owner, repo, number), accept::DIFF)
            .await
    }

    /// Gets the pull request as a series of mailbox patches.
    pub async fn get_patch(&self, owner: &str, repo: &str, number: u64) -> GitHubResult<String> {
        ensure_repo(owner, repo)?;
        self.client
            .get_text_with_accept(&urls::pull(owner, repo, number), accept::PATCH)
            .await
    }

    /// Creates a pull request.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        request: &CreatePullRequestRequest,
    ) -> GitHubResult<PullRequest> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("head", &request.head)?;
        ensure_not_empty("base", &request.base)?;
        match (&request.title, request.issue) {
            (Some(title), None) => ensure_not_empty("title", title)?,
            (None, Some(_)) => {}
            _ => {
                return Err(GitHubError::invalid_parameter(
                    "Exactly one of 'title' or 'issue' must be set",
                ))
            }
        }
        self.client.post(&urls::pulls(owner, repo), request).await
    }

    /// Updates a pull request.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &UpdatePullRequestRequest,
    ) -> GitHubResult<PullRequest> {
        ensure_repo(owner, repo)?;
        self.client
            .patch(&urls::pull(owner, repo, number), request)
            .await
    }

    /// Checks whether a pull request has been merged.
    pub async fn is_merged(&self, owner: &str, repo: &str, number: u64) -> GitHubResult<bool> {
        ensure_repo(owner, repo)?;
        self.client
            .get_status(&urls::pull_merge(owner, repo, number))
            .await
    }

    /// Merges a pull request.
    ///
    /// A 405 maps to [`GitHubErrorKind::PullRequestNotMergeable`] and a 409
    /// (head moved past `sha`) to [`GitHubErrorKind::PullRequestShaMismatch`].
    pub async fn merge(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &MergePullRequestRequest,
    ) -> GitHubResult<MergeResult> {
        ensure_repo(owner, repo)?;
        self.client
            .put(&urls::pull_merge(owner, repo, number), request)
            .await
            .map_err(refine_merge_error)
    }

    /// Updates the head branch with the latest changes from the base branch.
    pub async fn update_branch(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        expected_head_sha: Option<&str>,
    ) -> GitHubResult<UpdateBranchResponse> {
        ensure_repo(owner, repo)?;
        let body = UpdateBranchRequest {
            expected_head_sha: expected_head_sha.map(str::to_string),
        };
        self.client
            .put(&urls::pull_update_branch(owner, repo, number), &body)
            .await
    }

    /// Lists commits on a pull request (at most 250).
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<PullRequestCommit>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::pull_commits(owner, repo, number), options)
            .await
    }

    /// Lists files changed by a pull request (at most 3000).
    pub async fn list_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<PullRequestFile>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::pull_files(owner, repo, number), options)
            .await
    }

    // Reviews

    /// Lists reviews.
    pub async fn list_reviews(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Review>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::pull_reviews(owner, repo, number), options)
            .await
    }

    /// Gets a review.
    pub async fn get_review(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        review_id: u64,
    ) -> GitHubResult<Review> {
        ensure_repo(owner, repo)?;
        self.client
            .get(&urls::pull_review(owner, repo, number, review_id))
            .await
    }

    /// Creates a review. Without an `event` the review stays pending.
    pub async fn create_review(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &CreateReviewRequest,
    ) -> GitHubResult<Review> {
        ensure_repo(owner, repo)?;
        if matches!(
            request.event,
            Some(ReviewEvent::RequestChanges) | Some(ReviewEvent::Comment)
        ) && request.body.as_deref().map_or(true, |b| b.trim().is_empty())
        {
            return Err(GitHubError::invalid_parameter(
                "'body' is required for REQUEST_CHANGES and COMMENT reviews",
            ));
        }
        self.client
            .post(&urls::pull_reviews(owner, repo, number), request)
            .await
    }

    /// Submits a pending review.
    pub async fn submit_review(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        review_id: u64,
        request: &SubmitReviewRequest,
    ) -> GitHubResult<Review> {
        ensure_repo(owner, repo)?;
        self.client
            .post(
                &urls::pull_review_events(owner, repo, number, review_id),
                request,
            )
            .await
    }

    /// Dismisses a review.
    pub async fn dismiss_review(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        review_id: u64,
        message: &str,
    ) -> GitHubResult<Review> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("message", message)?;
        self.client
            .put(
                &urls::pull_review_dismissals(owner, repo, number, review_id),
                &DismissReviewRequest {
                    message: message.to_string(),
                },
            )
            .await
    }

    /// Deletes a pending review.
    pub async fn delete_pending_review(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        review_id: u64,
    ) -> GitHubResult<Review> {
        ensure_repo(owner, repo)?;
        self.client
            .delete_returning(&urls::pull_review(owner, repo, number, review_id))
            .await
    }

    // Review comments

    /// Lists review comments on a pull request.
    pub async fn list_review_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<ReviewComment>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::pull_review_comments(owner, repo, number), options)
            .await
    }

    /// Lists review comments across all pull requests of a repository.
    pub async fn list_review_comments_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<ReviewComment>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::repo_pull_review_comments(owner, repo), options)
            .await
    }

    /// Gets a review comment.
    pub async fn get_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> GitHubResult<ReviewComment> {
        ensure_repo(owner, repo)?;
        self.client
            .get(&urls::pull_review_comment(owner, repo, comment_id))
            .await
    }

    /// Creates a review comment, either on a diff line or as a reply.
    pub async fn create_review_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &CreateReviewCommentRequest,
    ) -> GitHubResult<ReviewComment> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("body", &request.body)?;
        if request.in_reply_to.is_none() {
            ensure_not_empty("commit_id", request.commit_id.as_deref().unwrap_or(""))?;
            ensure_not_empty("path", request.path.as_deref().unwrap_or(""))?;
        }
        self.client
            .post(&urls::pull_review_comments(owner, repo, number), request)
            .await
    }

    /// Updates a review comment.
    pub async fn update_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> GitHubResult<ReviewComment> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("body", body)?;
        self.client
            .patch(
                &urls::pull_review_comment(owner, repo, comment_id),
                &CommentBody {
                    body: body.to_string(),
                },
            )
            .await
    }

    /// Deletes a review comment.
    pub async fn delete_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .delete(&urls::pull_review_comment(owner, repo, comment_id))
            .await
    }

    // Review requests

    /// Lists users and teams whose review is requested.
    pub async fn list_requested_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> GitHubResult<RequestedReviewers> {
        ensure_repo(owner, repo)?;
        self.client
            .get(&urls::pull_requested_reviewers(owner, repo, number))
            .await
    }

    /// Requests reviews.
    pub async fn request_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &ReviewersRequest,
    ) -> GitHubResult<PullRequest> {
        ensure_repo(owner, repo)?;
        request.validate()?;
        self.client
            .post(&urls::pull_requested_reviewers(owner, repo, number), request)
            .await
    }

    /// Removes review requests.
    pub async fn remove_requested_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &ReviewersRequest,
    ) -> GitHubResult<PullRequest> {
        ensure_repo(owner, repo)?;
        request.validate()?;
        self.client
            .delete_with_response(&urls::pull_requested_reviewers(owner, repo, number), request)
            .await
    }
}

fn refine_merge_error(error: GitHubError) -> GitHubError {
    match error.status_code() {
        Some(405) => error.with_kind(GitHubErrorKind::PullRequestNotMergeable),
        Some(409) => error.with_kind(GitHubErrorKind::PullRequestShaMismatch),
        _ => error,
    }
}

/// Parameters for listing pull requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPullRequestsParams {
    /// State filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    /// Head filter in `user:ref-name` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    /// Base branch filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<PullRequestSort>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// Pull request sort field.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullRequestSort {
    Created,
    Updated,
    Popularity,
    LongRunning,
}

/// Request to create a pull request. Set either `title` or `issue`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePullRequestRequest {
    /// PR title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Head branch (`user:branch` for cross-repository PRs).
    pub head: String,
    /// Base branch.
    pub base: String,
    /// PR body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Issue to convert into a pull request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<u64>,
    /// Whether to allow maintainer edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
    /// Whether to create as draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
}

impl CreatePullRequestRequest {
    /// Creates a titled pull request from `head` into `base`.
    pub fn new(title: impl Into<String>, head: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            head: head.into(),
            base: base.into(),
            ..Default::default()
        }
    }
}

/// Request to update a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePullRequestRequest {
    /// PR title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// PR body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// PR state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PullRequestState>,
    /// Base branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Whether to allow maintainer edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

/// Request to merge a pull request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergePullRequestRequest {
    /// Commit title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,
    /// Commit message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    /// SHA the head must match for the merge to proceed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Merge method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<MergeMethod>,
}

/// Merge method.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    Merge,
    Squash,
    Rebase,
}

/// Result of merging a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeResult {
    /// Merge commit SHA.
    pub sha: Option<String>,
    /// Whether the merge happened.
    pub merged: bool,
    /// Message.
    pub message: String,
}

#[derive(Serialize)]
struct UpdateBranchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_head_sha: Option<String>,
}

/// Response from updating a branch.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBranchResponse {
    /// Message.
    pub message: String,
    /// URL.
    pub url: String,
}

/// Commit in a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestCommit {
    /// Commit SHA.
    pub sha: String,
    /// Commit details.
    pub commit: CommitDetail,
    /// Author.
    pub author: Option<User>,
    /// Committer.
    pub committer: Option<User>,
}

/// File changed in a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestFile {
    /// Filename.
    pub filename: String,
    /// Status (added, removed, modified, etc.).
    pub status: String,
    /// Additions.
    pub additions: u32,
    /// Deletions.
    pub deletions: u32,
    /// Changes.
    pub changes: u32,
    /// SHA.
    pub sha: Option<String>,
    /// Blob URL.
    pub blob_url: Option<String>,
    /// Raw URL.
    pub raw_url: Option<String>,
    /// Patch (absent for binary or very large files).
    pub patch: Option<String>,
}

/// Review on a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    /// Review ID.
    pub id: u64,
    /// Node ID.
    #[serde(default)]
    pub node_id: String,
    /// User who created the review.
    pub user: Option<User>,
    /// Review body.
    pub body: Option<String>,
    /// Review state.
    pub state: ReviewState,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Commit ID.
    pub commit_id: Option<String>,
    /// Submitted time.
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Review state.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Pending,
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    #[serde(other)]
    Unknown,
}

/// Request to create a review.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateReviewRequest {
    /// Commit ID to review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    /// Review body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Review event. `None` leaves the review pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ReviewEvent>,
    /// Inline comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<ReviewCommentInput>>,
}

/// Review event.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    Approve,
    RequestChanges,
    Comment,
}

/// Inline comment attached to a new review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewCommentInput {
    /// Path to the file.
    pub path: String,
    /// Comment body.
    pub body: String,
    /// Line number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Side (`LEFT` or `RIGHT`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Start line of a multi-line comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
    /// Start side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_side: Option<String>,
}

/// Request to submit a pending review.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReviewRequest {
    /// Review body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Review event.
    pub event: ReviewEvent,
}

#[derive(Serialize)]
struct DismissReviewRequest {
    message: String,
}

/// Review comment.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewComment {
    /// Comment ID.
    pub id: u64,
    /// Review the comment belongs to.
    pub pull_request_review_id: Option<u64>,
    /// Diff hunk.
    #[serde(default)]
    pub diff_hunk: String,
    /// Path.
    pub path: String,
    /// Commit ID.
    pub commit_id: Option<String>,
    /// Original commit ID.
    pub original_commit_id: Option<String>,
    /// User.
    pub user: Option<User>,
    /// Body.
    pub body: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// HTML URL.
    pub html_url: Option<String>,
    /// In reply to ID.
    pub in_reply_to_id: Option<u64>,
    /// Line.
    pub line: Option<u32>,
    /// Original line.
    pub original_line: Option<u32>,
    /// Side.
    pub side: Option<String>,
    /// Start line.
    pub start_line: Option<u32>,
    /// Start side.
    pub start_side: Option<String>,
}

/// Request to create a review comment. Either anchor it with `commit_id`,
/// `path` and `line`, or reply with `in_reply_to`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateReviewCommentRequest {
    /// Comment body.
    pub body: String,
    /// Commit ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    /// Path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Start line of a multi-line comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
    /// Start side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_side: Option<String>,
    /// Comment being replied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<u64>,
}

#[derive(Serialize)]
struct CommentBody {
    body: String,
}

/// Users and teams to request or remove as reviewers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewersRequest {
    /// Reviewer logins.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    /// Team slugs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_reviewers: Vec<String>,
}

impl ReviewersRequest {
    fn validate(&self) -> GitHubResult<()> {
        if self.reviewers.is_empty() && self.team_reviewers.is_empty() {
            return Err(GitHubError::invalid_parameter(
                "At least one reviewer or team reviewer is required",
            ));
        }
        Ok(())
    }
}

/// Pending review requests on a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestedReviewers {
    /// Users.
    #[serde(default)]
    pub users: Vec<User>,
    /// Teams.
    #[serde(default)]
    pub teams: Vec<Team>,
}
