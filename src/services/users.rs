//! User operations: profiles, followers, emails and keys.

use crate::client::GitHubClient;
use crate::errors::{ensure_not_empty, ensure_segment, GitHubError, GitHubResult};
use crate::pagination::ApiOptions;
use crate::types::{User, UserProfile};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service for user operations.
pub struct UsersService<'a> {
    client: &'a GitHubClient,
}

impl<'a> UsersService<'a> {
    /// Creates a new users service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Gets the authenticated user.
    pub async fn get_current(&self) -> GitHubResult<AuthenticatedUser> {
        self.client.get(&urls::current_user()).await
    }

    /// Gets a user's public profile.
    pub async fn get(&self, username: &str) -> GitHubResult<UserProfile> {
        ensure_segment("username", username)?;
        self.client.get(&urls::user(username)).await
    }

    /// Updates the authenticated user.
    pub async fn update(&self, request: &UpdateUserRequest) -> GitHubResult<AuthenticatedUser> {
        self.client.patch(&urls::current_user(), request).await
    }

    /// Lists all users in sign-up order, starting after user ID `since`.
    pub async fn list_all(
        &self,
        since: Option<u64>,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        self.client
            .get_all_with_params(&urls::all_users(), &SinceParams { since }, options)
            .await
    }

    // Followers

    /// Lists followers of the authenticated user.
    pub async fn list_followers_for_current(&self, options: ApiOptions) -> GitHubResult<Vec<User>> {
        self.client
            .get_all(&urls::current_user_followers(), options)
            .await
    }

    /// Lists followers of a user.
    pub async fn list_followers(
        &self,
        username: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        ensure_segment("username", username)?;
        self.client
            .get_all(&urls::user_followers(username), options)
            .await
    }

    /// Lists users the authenticated user follows.
    pub async fn list_following_for_current(&self, options: ApiOptions) -> GitHubResult<Vec<User>> {
        self.client
            .get_all(&urls::current_user_following(), options)
            .await
    }

    /// Lists users a user follows.
    pub async fn list_following(
        &self,
        username: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<User>> {
        ensure_segment("username", username)?;
        self.client
            .get_all(&urls::user_following(username), options)
            .await
    }

    /// Checks whether the authenticated user follows `username`.
    pub async fn is_following(&self, username: &str) -> GitHubResult<bool> {
        ensure_segment("username", username)?;
        self.client.get_status(&urls::following(username)).await
    }

    /// Checks whether `username` follows `target`.
    pub async fn is_user_following(&self, username: &str, target: &str) -> GitHubResult<bool> {
        ensure_segment("username", username)?;
        ensure_segment("target", target)?;
        self.client
            .get_status(&urls::user_follows(username, target))
            .await
    }

    /// Follows a user.
    pub async fn follow(&self, username: &str) -> GitHubResult<()> {
        ensure_segment("username", username)?;
        self.client
            .put_no_body_empty(&urls::following(username))
            .await
    }

    /// Unfollows a user.
    pub async fn unfollow(&self, username: &str) -> GitHubResult<()> {
        ensure_segment("username", username)?;
        self.client.delete(&urls::following(username)).await
    }

    // Emails

    /// Lists email addresses of the authenticated user.
    pub async fn list_emails(&self, options: ApiOptions) -> GitHubResult<Vec<Email>> {
        self.client.get_all(&urls::emails(), options).await
    }

    /// Adds email addresses.
    pub async fn add_emails(&self, emails: &[String]) -> GitHubResult<Vec<Email>> {
        ensure_emails(emails)?;
        self.client
            .post(
                &urls::emails(),
                &EmailsRequest {
                    emails: emails.to_vec(),
                },
            )
            .await
    }

    /// Deletes email addresses.
    pub async fn delete_emails(&self, emails: &[String]) -> GitHubResult<()> {
        ensure_emails(emails)?;
        self.client
            .delete_with_body(
                &urls::emails(),
                &EmailsRequest {
                    emails: emails.to_vec(),
                },
            )
            .await
    }

    // SSH keys

    /// Lists SSH keys of the authenticated user.
    pub async fn list_ssh_keys(&self, options: ApiOptions) -> GitHubResult<Vec<SshKey>> {
        self.client.get_all(&urls::ssh_keys(), options).await
    }

    /// Lists public SSH keys of a user.
    pub async fn list_ssh_keys_for_user(
        &self,
        username: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<SshKey>> {
        ensure_segment("username", username)?;
        self.client
            .get_all(&urls::user_ssh_keys(username), options)
            .await
    }

    /// Gets an SSH key.
    pub async fn get_ssh_key(&self, key_id: u64) -> GitHubResult<SshKey> {
        self.client.get(&urls::ssh_key(key_id)).await
    }

    /// Adds an SSH key.
    pub async fn create_ssh_key(&self, request: &CreateSshKeyRequest) -> GitHubResult<SshKey> {
        ensure_not_empty("key", &request.key)?;
        self.client.post(&urls::ssh_keys(), request).await
    }

    /// Deletes an SSH key.
    pub async fn delete_ssh_key(&self, key_id: u64) -> GitHubResult<()> {
        self.client.delete(&urls::ssh_key(key_id)).await
    }

    // GPG keys

    /// Lists GPG keys of the authenticated user.
    pub async fn list_gpg_keys(&self, options: ApiOptions) -> GitHubResult<Vec<GpgKey>> {
        self.client.get_all(&urls::gpg_keys(), options).await
    }

    /// Lists GPG keys of a user.
    pub async fn list_gpg_keys_for_user(
        &self,
        username: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<GpgKey>> {
        ensure_segment("username", username)?;
        self.client
            .get_all(&urls::user_gpg_keys(username), options)
            .await
    }

    /// Gets a GPG key.
    pub async fn get_gpg_key(&self, key_id: u64) -> GitHubResult<GpgKey> {
        self.client.get(&urls::gpg_key(key_id)).await
    }

    /// Adds a GPG key from its ASCII-armored public key.
    pub async fn create_gpg_key(&self, armored_public_key: &str) -> GitHubResult<GpgKey> {
        ensure_not_empty("armored_public_key", armored_public_key)?;
        self.client
            .post(
                &urls::gpg_keys(),
                &CreateGpgKeyRequest {
                    armored_public_key: armored_public_key.to_string(),
                },
            )
            .await
    }

    /// Deletes a GPG key.
    pub async fn delete_gpg_key(&self, key_id: u64) -> GitHubResult<()> {
        self.client.delete(&urls::gpg_key(key_id)).await
    }
}

fn ensure_emails(emails: &[String]) -> GitHubResult<()> {
    if emails.is_empty() {
        return Err(GitHubError::invalid_parameter("'emails' must not be empty"));
    }
    emails
        .iter()
        .try_for_each(|email| ensure_not_empty("emails", email))
}

#[derive(Serialize)]
struct SinceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<u64>,
}

/// The authenticated user, with fields only visible to themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    /// Public profile.
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Private repository count.
    pub total_private_repos: Option<u32>,
    /// Owned private repository count.
    pub owned_private_repos: Option<u32>,
    /// Private gist count.
    pub private_gists: Option<u32>,
    /// Disk usage in KB.
    pub disk_usage: Option<u64>,
    /// Collaborator count.
    pub collaborators: Option<u32>,
    /// Two-factor authentication enabled.
    pub two_factor_authentication: Option<bool>,
}

/// Request to update the authenticated user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Public email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Blog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    /// Twitter username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    /// Company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Hireable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hireable: Option<bool>,
    /// Bio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Email address.
#[derive(Debug, Clone, Deserialize)]
pub struct Email {
    /// Email address.
    pub email: String,
    /// Whether primary.
    pub primary: bool,
    /// Whether verified.
    pub verified: bool,
    /// Visibility.
    pub visibility: Option<String>,
}

#[derive(Serialize)]
struct EmailsRequest {
    emails: Vec<String>,
}

/// SSH key.
#[derive(Debug, Clone, Deserialize)]
pub struct SshKey {
    /// Key ID.
    pub id: u64,
    /// Key.
    pub key: String,
    /// Title (own keys only).
    pub title: Option<String>,
    /// Created at.
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to add an SSH key.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSshKeyRequest {
    /// Key title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Public key.
    pub key: String,
}

/// GPG key.
#[derive(Debug, Clone, Deserialize)]
pub struct GpgKey {
    /// Key ID.
    pub id: u64,
    /// Key ID (GPG).
    pub key_id: String,
    /// Public key.
    pub public_key: Option<String>,
    /// Emails.
    #[serde(default)]
    pub emails: Vec<GpgKeyEmail>,
    /// Can sign.
    #[serde(default)]
    pub can_sign: bool,
    /// Can encrypt comms.
    #[serde(default)]
    pub can_encrypt_comms: bool,
    /// Can encrypt storage.
    #[serde(default)]
    pub can_encrypt_storage: bool,
    /// Can certify.
    #[serde(default)]
    pub can_certify: bool,
    /// Created at.
    pub created_at: Option<DateTime<Utc>>,
    /// Expires at.
    pub expires_at: Option<DateTime<Utc>>,
}

/// GPG key email.
#[derive(Debug, Clone, Deserialize)]
pub struct GpgKeyEmail {
    /// Email.
    pub email: String,
    /// Whether verified.
    pub verified: bool,
}

#[derive(Serialize)]
struct CreateGpgKeyRequest {
    armored_public_key: String,
}
