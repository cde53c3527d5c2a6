//! Organization operations: members, memberships, outside collaborators
//! and teams.

use crate::client::GitHubClient;
use crate::errors::{ensure_not_empty, ensure_repo, ensure_segment, GitHubResult};
use crate::pagination::ApiOptions;
use crate::types::{Organization, Repository, Team, TeamPrivacy, User};
use crate::urls;
use serde::{Deserialize, Serialize};

/// Service for organization operations.
pub struct OrganizationsService<'a> {
    client: &'a GitHubClient,
}

impl<'a> OrganizationsService<'a> {
    /// Creates a new organizations service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Lists organizations of the authenticated user.
    pub async fn list_for_current(&self, options: ApiOptions) -> GitHubResult<Vec<Organization>> {
        self.client
            .get_all(&urls::current_user_organizations(), options)
            .await
    }

    /// Lists public organization memberships of a user.
    pub async fn list_for_user(
        &self,
        username: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Organization>> {
        ensure_segment("username", username)?;
        self.client
            .get_all(&urls::user_organizations(username), options)
            .await
    }

    /// Lists all organizations in creation order, starting after `since`.
    pub async fn list_all(
        &self,
        since: Option<u64>,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Organization>> {
        self.client
            .get_all_with_params(&urls::all_organizations(), &SinceParams { since }, options)
            .await
    }

    /// Gets an organization.
    pub async fn get(&self, org: &str) -> GitHubResult<Organization> {
        ensure_segment("org", org)?;
        self.client.get(&urls::organization(org)).await
    }

    /// Updates an organization.
    pub async fn update(
        &self,
        org: &str,
        request: &UpdateOrgRequest,
    ) -> GitHubResult<Organization> {
        ensure_segment("org", org)?;
        self.client.patch(&urls::organization(org), request).await
    }

    // Members

    /// Lists members.
    pub async fn list_members(
        &self,
        org: &str,
        params: &ListMembersParams,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        ensure_segment("org", org)?;
        self.client
            .get_all_with_params(&urls::org_members(org), params, options)
            .await
    }

    /// Lists public members.
    pub async fn list_public_members(
        &self,
        org: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        ensure_segment("org", org)?;
        self.client
            .get_all(&urls::org_public_members(org), options)
            .await
    }

    /// Checks whether a user is a member.
    pub async fn check_member(&self, org: &str, username: &str) -> GitHubResult<bool> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client.get_status(&urls::org_member(org, username)).await
    }

    /// Checks whether a user's membership is public.
    pub async fn check_public_member(&self, org: &str, username: &str) -> GitHubResult<bool> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client
            .get_status(&urls::org_public_member(org, username))
            .await
    }

    /// Makes the authenticated user's membership public.
    pub async fn publicize_membership(&self, org: &str, username: &str) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client
            .put_no_body_empty(&urls::org_public_member(org, username))
            .await
    }

    /// Hides the authenticated user's membership.
    pub async fn conceal_membership(&self, org: &str, username: &str) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client
            .delete(&urls::org_public_member(org, username))
            .await
    }

    /// Removes a member.
    pub async fn remove_member(&self, org: &str, username: &str) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client.delete(&urls::org_member(org, username)).await
    }

    // Memberships

    /// Gets a user's membership.
    pub async fn get_membership(&self, org: &str, username: &str) -> GitHubResult<Membership> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client.get(&urls::org_membership(org, username)).await
    }

    /// Invites a user or changes their role.
    pub async fn set_membership(
        &self,
        org: &str,
        username: &str,
        role: MembershipRole,
    ) -> GitHubResult<Membership> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client
            .put(
                &urls::org_membership(org, username),
                &SetMembershipRequest { role },
            )
            .await
    }

    /// Removes a membership or cancels a pending invitation.
    pub async fn remove_membership(&self, org: &str, username: &str) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("username", username)?;
        self.client.delete(&urls::org_membership(org, username)).await
    }

    /// Lists outside collaborators.
    pub async fn list_outside_collaborators(
        &self,
        org: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        ensure_segment("org", org)?;
        self.client
            .get_all(&urls::outside_collaborators(org), options)
            .await
    }

    // Teams

    /// Lists teams.
    pub async fn list_teams(&self, org: &str, options: ApiOptions) -> GitHubResult<Vec<Team>> {
        ensure_segment("org", org)?;
        self.client.get_all(&urls::teams(org), options).await
    }

    /// Gets a team by slug.
    pub async fn get_team(&self, org: &str, team_slug: &str) -> GitHubResult<Team> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        self.client.get(&urls::team(org, team_slug)).await
    }

    /// Creates a team.
    pub async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> GitHubResult<Team> {
        ensure_segment("org", org)?;
        ensure_not_empty("name", &request.name)?;
        self.client.post(&urls::teams(org), request).await
    }

    /// Updates a team.
    pub async fn update_team(
        &self,
        org: &str,
        team_slug: &str,
        request: &UpdateTeamRequest,
    ) -> GitHubResult<Team> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        self.client.patch(&urls::team(org, team_slug), request).await
    }

    /// Deletes a team and its child teams.
    pub async fn delete_team(&self, org: &str, team_slug: &str) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        self.client.delete(&urls::team(org, team_slug)).await
    }

    /// Lists team members.
    pub async fn list_team_members(
        &self,
        org: &str,
        team_slug: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        self.client
            .get_all(&urls::team_members(org, team_slug), options)
            .await
    }

    /// Gets a user's team membership.
    pub async fn get_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
    ) -> GitHubResult<TeamMembership> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        ensure_segment("username", username)?;
        self.client
            .get(&urls::team_membership(org, team_slug, username))
            .await
    }

    /// Adds a user to a team or updates their role.
    pub async fn add_team_member(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamMemberRole,
    ) -> GitHubResult<TeamMembership> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        ensure_segment("username", username)?;
        self.client
            .put(
                &urls::team_membership(org, team_slug, username),
                &AddTeamMemberRequest { role },
            )
            .await
    }

    /// Removes a user from a team.
    pub async fn remove_team_member(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
    ) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        ensure_segment("username", username)?;
        self.client
            .delete(&urls::team_membership(org, team_slug, username))
            .await
    }

    /// Lists repositories a team can access.
    pub async fn list_team_repos(
        &self,
        org: &str,
        team_slug: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Repository>> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        self.client
            .get_all(&urls::team_repositories(org, team_slug), options)
            .await
    }

    /// Grants a team access to a repository.
    pub async fn add_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Option<TeamRepoPermission>,
    ) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        ensure_repo(owner, repo)?;
        self.client
            .put_empty(
                &urls::team_repository(org, team_slug, owner, repo),
                &AddTeamRepoRequest { permission },
            )
            .await
    }

    /// Revokes a team's access to a repository.
    pub async fn remove_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
    ) -> GitHubResult<()> {
        ensure_segment("org", org)?;
        ensure_segment("team_slug", team_slug)?;
        ensure_repo(owner, repo)?;
        self.client
            .delete(&urls::team_repository(org, team_slug, owner, repo))
            .await
    }
}

#[derive(Serialize)]
struct SinceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<u64>,
}

/// Request to update an organization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrgRequest {
    /// Billing email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    /// Company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Twitter username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    /// Location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Blog URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
}

/// Filters for listing members.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListMembersParams {
    /// `2fa_disabled` or `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Role filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRoleFilter>,
}

/// Role filter for member listings.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRoleFilter {
    All,
    Admin,
    Member,
}

/// Organization membership.
#[derive(Debug, Clone, Deserialize)]
pub struct Membership {
    /// State.
    pub state: MembershipState,
    /// Role.
    pub role: MembershipRole,
    /// Organization URL.
    #[serde(default)]
    pub organization_url: String,
    /// User.
    pub user: Option<User>,
    /// Organization.
    pub organization: Option<Organization>,
}

/// Membership state.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MembershipState {
    Active,
    Pending,
}

/// Membership role.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    Admin,
    Member,
    BillingManager,
}

#[derive(Serialize)]
struct SetMembershipRequest {
    role: MembershipRole,
}

/// Request to create a team.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTeamRequest {
    /// Team name.
    pub name: String,
    /// Team description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Maintainer logins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainers: Option<Vec<String>>,
    /// Repositories in `owner/name` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_names: Option<Vec<String>>,
    /// Privacy level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<TeamPrivacy>,
    /// Parent team ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_team_id: Option<u64>,
}

/// Request to update a team.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTeamRequest {
    /// Team name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Team description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Privacy level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<TeamPrivacy>,
    /// Parent team ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_team_id: Option<u64>,
}

/// Team membership.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMembership {
    /// State.
    pub state: MembershipState,
    /// Role.
    pub role: TeamMemberRole,
    /// URL.
    #[serde(default)]
    pub url: String,
}

/// Team member role.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TeamMemberRole {
    Member,
    Maintainer,
}

#[derive(Serialize)]
struct AddTeamMemberRequest {
    role: TeamMemberRole,
}

/// Team repository permission.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRepoPermission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

#[derive(Serialize)]
struct AddTeamRepoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    permission: Option<TeamRepoPermission>,
}
