//! Issue operations: issues, comments, labels, milestones, assignees and
//! events.

use crate::client::GitHubClient;
use crate::errors::{ensure_not_empty, ensure_repo, ensure_segment, GitHubError, GitHubResult};
use crate::pagination::ApiOptions;
use crate::types::{
    Comment, Issue, IssueState, Label, Milestone, MilestoneState, SortDirection, StateFilter, User,
};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service for issue operations.
pub struct IssuesService<'a> {
    client: &'a GitHubClient,
}

impl<'a> IssuesService<'a> {
    /// Creates a new issues service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Lists issues assigned to the authenticated user across all
    /// repositories.
    pub async fn list_for_current(
        &self,
        params: &ListIssuesParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Issue>> {
        self.client
            .get_all_with_params(&urls::current_user_issues(), params, options)
            .await
    }

    /// Lists issues of an organization visible to the authenticated user.
    pub async fn list_for_org(
        &self,
        org: &str,
        params: &ListIssuesParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Issue>> {
        ensure_segment("org", org)?;
        self.client
            .get_all_with_params(&urls::org_issues(org), params, options)
            .await
    }

    /// Lists issues of a repository. Pull requests are included, as GitHub
    /// returns them; see [`Issue::is_pull_request`].
    pub async fn list_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: &ListIssuesParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Issue>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_with_params(&urls::issues(owner, repo), params, options)
            .await
    }

    /// Gets an issue.
    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> GitHubResult<Issue> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::issue(owner, repo, number)).await
    }

    /// Creates an issue.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateIssueRequest,
    ) -> GitHubResult<Issue> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("title", &request.title)?;
        self.client.post(&urls::issues(owner, repo), request).await
    }

    /// Updates an issue.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &UpdateIssueRequest,
    ) -> GitHubResult<Issue> {
        ensure_repo(owner, repo)?;
        if request.state_reason.is_some() && request.state.is_none() {
            return Err(GitHubError::invalid_parameter(
                "'state_reason' requires 'state' to be set",
            ));
        }
        self.client
            .patch(&urls::issue(owner, repo, number), request)
            .await
    }

    /// Locks an issue's conversation.
    pub async fn lock(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        reason: Option<LockReason>,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .put_empty(
                &urls::issue_lock(owner, repo, number),
                &LockRequest {
                    lock_reason: reason,
                },
            )
            .await
    }

    /// Unlocks an issue's conversation.
    pub async fn unlock(&self, owner: &str, repo: &str, number: u64) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client.delete(&urls::issue_lock(owner, repo, number)).await
    }

    // Comments

    /// Lists comments on an issue.
    pub async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Comment>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::issue_comments(owner, repo, number), options)
            .await
    }

    /// Lists comments on all issues of a repository.
    pub async fn list_comments_for_repo(
        &self,
        owner: &str,
        repo: &str,
        params: &ListCommentsParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Comment>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_with_params(&urls::repo_issue_comments(owner, repo), params, options)
            .await
    }

    /// Gets a comment.
    pub async fn get_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> GitHubResult<Comment> {
        ensure_repo(owner, repo)?;
        self.client
            .get(&urls::issue_comment(owner, repo, comment_id))
            .await
    }

    /// Creates a comment on an issue.
    pub async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> GitHubResult<Comment> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("body", body)?;
        self.client
            .post(
                &urls::issue_comments(owner, repo, number),
                &CommentBody {
                    body: body.to_string(),
                },
            )
            .await
    }

    /// Updates a comment.
    pub async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> GitHubResult<Comment> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("body", body)?;
        self.client
            .patch(
                &urls::issue_comment(owner, repo, comment_id),
                &CommentBody {
                    body: body.to_string(),
                },
            )
            .await
    }

    /// Deletes a comment.
    pub async fn delete_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .delete(&urls::issue_comment(owner, repo, comment_id))
            .await
    }

    // Labels

    /// Lists labels of a repository.
    pub async fn list_labels(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Label>> {
        ensure_repo(owner, repo)?;
        self.client.get_all(&urls::labels(owner, repo), options).await
    }

    /// Lists labels on an issue.
    pub async fn list_labels_for_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Label>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::issue_labels(owner, repo, number), options)
            .await
    }

    /// Gets a label.
    pub async fn get_label(&self, owner: &str, repo: &str, name: &str) -> GitHubResult<Label> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client.get(&urls::label(owner, repo, name)).await
    }

    /// Creates a label.
    pub async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateLabelRequest,
    ) -> GitHubResult<Label> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("name", &request.name)?;
        ensure_not_empty("color", &request.color)?;
        self.client.post(&urls::labels(owner, repo), request).await
    }

    /// Updates a label.
    pub async fn update_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        request: &UpdateLabelRequest,
    ) -> GitHubResult<Label> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client.patch(&urls::label(owner, repo, name), request).await
    }

    /// Deletes a label.
    pub async fn delete_label(&self, owner: &str, repo: &str, name: &str) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client.delete(&urls::label(owner, repo, name)).await
    }

    /// Adds labels to an issue and returns the issue's full label set.
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> GitHubResult<Vec<Label>> {
        ensure_repo(owner, repo)?;
        if labels.is_empty() {
            return Err(GitHubError::invalid_parameter("'labels' must not be empty"));
        }
        self.client
            .post(
                &urls::issue_labels(owner, repo, number),
                &LabelsBody {
                    labels: labels.to_vec(),
                },
            )
            .await
    }

    /// Replaces all labels on an issue. An empty slice clears them.
    pub async fn replace_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> GitHubResult<Vec<Label>> {
        ensure_repo(owner, repo)?;
        self.client
            .put(
                &urls::issue_labels(owner, repo, number),
                &LabelsBody {
                    labels: labels.to_vec(),
                },
            )
            .await
    }

    /// Removes one label from an issue and returns the remaining labels.
    pub async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        name: &str,
    ) -> GitHubResult<Vec<Label>> {
        ensure_repo(owner, repo)?;
        ensure_segment("name", name)?;
        self.client
            .delete_returning(&urls::issue_label(owner, repo, number, name))
            .await
    }

    /// Removes all labels from an issue.
    pub async fn remove_all_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client
            .delete(&urls::issue_labels(owner, repo, number))
            .await
    }

    // Milestones

    /// Lists milestones.
    pub async fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        params: &ListMilestonesParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Milestone>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all_with_params(&urls::milestones(owner, repo), params, options)
            .await
    }

    /// Gets a milestone.
    pub async fn get_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> GitHubResult<Milestone> {
        ensure_repo(owner, repo)?;
        self.client.get(&urls::milestone(owner, repo, number)).await
    }

    /// Creates a milestone.
    pub async fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateMilestoneRequest,
    ) -> GitHubResult<Milestone> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("title", &request.title)?;
        self.client.post(&urls::milestones(owner, repo), request).await
    }

    /// Updates a milestone.
    pub async fn update_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        request: &UpdateMilestoneRequest,
    ) -> GitHubResult<Milestone> {
        ensure_repo(owner, repo)?;
        self.client
            .patch(&urls::milestone(owner, repo, number), request)
            .await
    }

    /// Deletes a milestone.
    pub async fn delete_milestone(&self, owner: &str, repo: &str, number: u64) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        self.client.delete(&urls::milestone(owner, repo, number)).await
    }

    // Assignees

    /// Lists users that issues in the repository can be assigned to.
    pub async fn list_assignees(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        ensure_repo(owner, repo)?;
        self.client.get_all(&urls::assignees(owner, repo), options).await
    }

    /// Checks whether a user can be assigned to issues.
    pub async fn check_assignee(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
    ) -> GitHubResult<bool> {
        ensure_repo(owner, repo)?;
        ensure_segment("username", username)?;
        self.client
            .get_status(&urls::assignee(owner, repo, username))
            .await
    }

    /// Adds assignees to an issue.
    pub async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        assignees: &[String],
    ) -> GitHubResult<Issue> {
        ensure_repo(owner, repo)?;
        self.client
            .post(
                &urls::issue_assignees(owner, repo, number),
                &AssigneesBody {
                    assignees: assignees.to_vec(),
                },
            )
            .await
    }

    /// Removes assignees from an issue.
    pub async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        assignees: &[String],
    ) -> GitHubResult<Issue> {
        ensure_repo(owner, repo)?;
        self.client
            .delete_with_response(
                &urls::issue_assignees(owner, repo, number),
                &AssigneesBody {
                    assignees: assignees.to_vec(),
                },
            )
            .await
    }

    // Events

    /// Lists events of an issue.
    pub async fn list_events(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: ApiOptions,
    ) -> GitHubResult<Vec<IssueEvent>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::issue_events(owner, repo, number), options)
            .await
    }

    /// Lists issue events across a repository.
    pub async fn list_events_for_repo(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<IssueEvent>> {
        ensure_repo(owner, repo)?;
        self.client
            .get_all(&urls::repo_issue_events(owner, repo), options)
            .await
    }
}

/// Parameters for listing issues.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListIssuesParams {
    /// Relationship filter for user and org listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<IssueFilter>,
    /// Milestone number, `*` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    /// State filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    /// Assignee login, `*` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Creator login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Mentioned login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned: Option<String>,
    /// Comma-separated label names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<IssueSort>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    /// Only issues updated after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

/// Which issues to return for user and organization listings.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueFilter {
    Assigned,
    Created,
    Mentioned,
    Subscribed,
    Repos,
    All,
}

/// Issue sort field.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSort {
    Created,
    Updated,
    Comments,
}

/// Parameters for listing repository comments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCommentsParams {
    /// `created` or `updated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    /// Only comments updated after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

/// Request to create an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIssueRequest {
    /// Issue title.
    pub title: String,
    /// Issue body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Assignees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    /// Milestone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    /// Labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl CreateIssueRequest {
    /// Creates a request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Request to update an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIssueRequest {
    /// Issue title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Issue body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Issue state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    /// State reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    /// Assignees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    /// Milestone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    /// Labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// State reason for closing an issue.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateReason {
    Completed,
    NotPlanned,
    Reopened,
}

/// Lock reason.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
pub enum LockReason {
    #[serde(rename = "off-topic")]
    OffTopic,
    #[serde(rename = "too heated")]
    TooHeated,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "spam")]
    Spam,
}

#[derive(Serialize)]
struct LockRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    lock_reason: Option<LockReason>,
}

#[derive(Serialize)]
struct CommentBody {
    body: String,
}

/// Request to create a label.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLabelRequest {
    /// Label name.
    pub name: String,
    /// Label color (hex without #).
    pub color: String,
    /// Label description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to update a label.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLabelRequest {
    /// New label name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    /// Label color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Label description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize)]
struct LabelsBody {
    labels: Vec<String>,
}

/// Parameters for listing milestones.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListMilestonesParams {
    /// State filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    /// `due_on` or `completeness`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// Request to create a milestone.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMilestoneRequest {
    /// Milestone title.
    pub title: String,
    /// Milestone state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MilestoneState>,
    /// Milestone description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
}

/// Request to update a milestone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMilestoneRequest {
    /// Milestone title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Milestone state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MilestoneState>,
    /// Milestone description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct AssigneesBody {
    assignees: Vec<String>,
}

/// An event in an issue's timeline (`closed`, `labeled`, `referenced`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct IssueEvent {
    /// Event ID.
    pub id: u64,
    /// User who triggered the event.
    pub actor: Option<User>,
    /// Event name.
    pub event: String,
    /// Commit that triggered the event, if any.
    pub commit_id: Option<String>,
    /// Label involved in `labeled`/`unlabeled` events.
    pub label: Option<EventLabel>,
    /// User involved in `assigned`/`unassigned` events.
    pub assignee: Option<User>,
    /// Issue the event belongs to (repository listings only).
    pub issue: Option<Box<Issue>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Label summary carried by label events.
#[derive(Debug, Clone, Deserialize)]
pub struct EventLabel {
    /// Label name.
    pub name: String,
    /// Label color.
    pub color: String,
}
