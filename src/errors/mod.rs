//! Error types for the GitHub REST client.
//!
//! Every non-2xx response is classified into a [`GitHubErrorKind`]. The
//! classification looks at the status code first and then refines it with
//! the `X-GitHub-OTP` and `X-RateLimit-*` headers and the error message body,
//! so callers can match on kinds such as
//! [`GitHubErrorKind::TwoFactorRequired`] or
//! [`GitHubErrorKind::SecondaryRateLimitExceeded`] without parsing strings.

use crate::client::RateLimitInfo;
use chrono::Utc;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for GitHub operations.
pub type GitHubResult<T> = Result<T, GitHubError>;

/// Error kinds for categorizing GitHub errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubErrorKind {
    // Configuration errors
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Invalid GitHub App credentials.
    InvalidAppCredentials,
    /// Invalid configuration.
    InvalidConfiguration,
    /// No credentials could be resolved.
    MissingAuth,

    // Client-side validation
    /// An argument failed validation before the request was sent.
    InvalidParameter,

    // Authentication errors (401)
    /// Bad or missing credentials.
    Unauthorized,
    /// A two-factor one-time password is required.
    TwoFactorRequired,
    /// Failed to produce a GitHub App token.
    AppAuthenticationFailed,

    // Authorization errors (403)
    /// Access forbidden.
    Forbidden,
    /// Too many failed login attempts.
    LoginAttemptsExceeded,

    // Request errors
    /// Malformed request (400).
    BadRequest,
    /// Validation failed (422).
    ValidationFailed,
    /// A repository with the requested name already exists.
    RepositoryExists,
    /// The account is over its private repository quota.
    PrivateRepositoryQuotaExceeded,
    /// The pull request cannot be merged (405).
    PullRequestNotMergeable,
    /// The head SHA did not match the expected value (409 on merge).
    PullRequestShaMismatch,

    // Resource errors
    /// Resource not found (404).
    NotFound,
    /// Resource is gone (410).
    Gone,
    /// Resource conflict (409).
    Conflict,
    /// Unavailable for legal reasons (451).
    LegalRestriction,

    // Rate limit errors
    /// Primary rate limit exceeded.
    PrimaryRateLimitExceeded,
    /// Secondary rate limit (abuse detection) exceeded.
    SecondaryRateLimitExceeded,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,

    // Server errors
    /// Internal server error (500).
    InternalError,
    /// Bad gateway (502).
    BadGateway,
    /// Service unavailable (503).
    ServiceUnavailable,

    // Response errors
    /// Failed to deserialize response.
    DeserializationError,
    /// Any other non-success status.
    ApiError,

    // Generic
    /// Unknown error.
    Unknown,
}

impl fmt::Display for GitHubErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidBaseUrl => "invalid_base_url",
            Self::InvalidAppCredentials => "invalid_app_credentials",
            Self::InvalidConfiguration => "invalid_configuration",
            Self::MissingAuth => "missing_auth",
            Self::InvalidParameter => "invalid_parameter",
            Self::Unauthorized => "unauthorized",
            Self::TwoFactorRequired => "two_factor_required",
            Self::AppAuthenticationFailed => "app_auth_failed",
            Self::Forbidden => "forbidden",
            Self::LoginAttemptsExceeded => "login_attempts_exceeded",
            Self::BadRequest => "bad_request",
            Self::ValidationFailed => "validation_failed",
            Self::RepositoryExists => "repository_exists",
            Self::PrivateRepositoryQuotaExceeded => "private_repository_quota_exceeded",
            Self::PullRequestNotMergeable => "pull_request_not_mergeable",
            Self::PullRequestShaMismatch => "pull_request_sha_mismatch",
            Self::NotFound => "not_found",
            Self::Gone => "gone",
            Self::Conflict => "conflict",
            Self::LegalRestriction => "legal_restriction",
            Self::PrimaryRateLimitExceeded => "primary_rate_limit_exceeded",
            Self::SecondaryRateLimitExceeded => "secondary_rate_limit_exceeded",
            Self::ConnectionFailed => "connection_failed",
            Self::Timeout => "timeout",
            Self::InternalError => "internal_error",
            Self::BadGateway => "bad_gateway",
            Self::ServiceUnavailable => "service_unavailable",
            Self::DeserializationError => "deserialization_error",
            Self::ApiError => "api_error",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Error body returned by the GitHub API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Link to the relevant documentation.
    pub documentation_url: Option<String>,
    /// Field level validation errors.
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// A single validation error from a 422 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Resource the error applies to.
    pub resource: Option<String>,
    /// Field the error applies to.
    pub field: Option<String>,
    /// Machine-readable error code (e.g. `missing_field`, `already_exists`).
    pub code: Option<String>,
    /// Custom message, present when `code` is `custom`.
    pub message: Option<String>,
}

/// Response metadata consulted when classifying an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Value of the `X-GitHub-OTP` header.
    pub otp_header: Option<String>,
    /// Value of the `X-GitHub-Request-Id` header.
    pub request_id: Option<String>,
    /// Rate limit headers, if present.
    pub rate_limit: Option<RateLimitInfo>,
}

/// GitHub API error with detailed information.
#[derive(Error, Debug)]
pub struct GitHubError {
    kind: GitHubErrorKind,
    message: String,
    status_code: Option<u16>,
    request_id: Option<String>,
    documentation_url: Option<String>,
    rate_limit: Option<RateLimitInfo>,
    errors: Vec<ApiErrorDetail>,
    two_factor_type: Option<String>,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for GitHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        if let Some(ref id) = self.request_id {
            write!(f, " [request_id: {}]", id)?;
        }
        Ok(())
    }
}

impl GitHubError {
    /// Creates a new GitHub error.
    pub fn new(kind: GitHubErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            request_id: None,
            documentation_url: None,
            rate_limit: None,
            errors: Vec::new(),
            two_factor_type: None,
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the GitHub request ID.
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Sets the documentation URL.
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Sets the rate limit info.
    pub fn with_rate_limit(mut self, info: RateLimitInfo) -> Self {
        self.rate_limit = Some(info);
        self
    }

    /// Sets the validation errors.
    pub fn with_errors(mut self, errors: Vec<ApiErrorDetail>) -> Self {
        self.errors = errors;
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Replaces the error kind, keeping every other detail.
    pub fn with_kind(mut self, kind: GitHubErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> &GitHubErrorKind {
        &self.kind
    }

    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the request ID.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Gets the documentation URL.
    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    /// Gets the rate limit info.
    pub fn rate_limit(&self) -> Option<&RateLimitInfo> {
        self.rate_limit.as_ref()
    }

    /// Gets the validation errors of a 422 response.
    pub fn errors(&self) -> &[ApiErrorDetail] {
        &self.errors
    }

    /// Gets the one-time password delivery method (`sms`, `app`) when
    /// two-factor authentication is required.
    pub fn two_factor_type(&self) -> Option<&str> {
        self.two_factor_type.as_deref()
    }

    /// Returns the number of seconds to wait before trying again.
    pub fn retry_after(&self) -> Option<u64> {
        let rl = self.rate_limit.as_ref()?;
        rl.retry_after.or_else(|| {
            let now = Utc::now();
            (rl.reset_at > now).then(|| (rl.reset_at - now).num_seconds() as u64)
        })
    }

    /// Returns true if this error is a 404.
    pub fn is_not_found(&self) -> bool {
        self.kind == GitHubErrorKind::NotFound
    }

    /// Returns true if the error is transient. The client never retries on
    /// its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            GitHubErrorKind::PrimaryRateLimitExceeded
                | GitHubErrorKind::SecondaryRateLimitExceeded
                | GitHubErrorKind::ConnectionFailed
                | GitHubErrorKind::Timeout
                | GitHubErrorKind::InternalError
                | GitHubErrorKind::BadGateway
                | GitHubErrorKind::ServiceUnavailable
        )
    }

    /// Returns true for either rate limit kind.
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self.kind,
            GitHubErrorKind::PrimaryRateLimitExceeded | GitHubErrorKind::SecondaryRateLimitExceeded
        )
    }

    /// Creates an error from a non-success response.
    pub fn from_response(status: u16, body: ErrorResponse, context: ErrorContext) -> Self {
        let message = if body.message.is_empty() {
            format!("HTTP {} error", status)
        } else {
            body.message
        };

        let kind = classify(status, &message, &context);

        let mut error = Self::new(kind, message)
            .with_status(status)
            .with_errors(body.errors);

        if let Some(url) = body.documentation_url {
            error = error.with_documentation_url(url);
        }
        if let Some(id) = context.request_id {
            error = error.with_request_id(id);
        }
        if let Some(info) = context.rate_limit {
            error = error.with_rate_limit(info);
        }
        if error.kind == GitHubErrorKind::TwoFactorRequired {
            error.two_factor_type = context
                .otp_header
                .as_deref()
                .and_then(|v| v.split(';').nth(1))
                .map(|t| t.trim().to_string());
        }

        error
    }

    /// Maps an HTTP status code to an error kind without looking at
    /// headers or body.
    pub fn kind_from_status(status: u16) -> GitHubErrorKind {
        match status {
            400 => GitHubErrorKind::BadRequest,
            401 => GitHubErrorKind::Unauthorized,
            403 => GitHubErrorKind::Forbidden,
            404 => GitHubErrorKind::NotFound,
            409 => GitHubErrorKind::Conflict,
            410 => GitHubErrorKind::Gone,
            422 => GitHubErrorKind::ValidationFailed,
            429 => GitHubErrorKind::SecondaryRateLimitExceeded,
            451 => GitHubErrorKind::LegalRestriction,
            500 => GitHubErrorKind::InternalError,
            502 => GitHubErrorKind::BadGateway,
            503 => GitHubErrorKind::ServiceUnavailable,
            _ => GitHubErrorKind::ApiError,
        }
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GitHubErrorKind::InvalidConfiguration, message)
    }

    /// Creates a client-side validation error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(GitHubErrorKind::InvalidParameter, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(GitHubErrorKind::NotFound, message).with_status(404)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(GitHubErrorKind::Timeout, message)
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(GitHubErrorKind::DeserializationError, message)
    }
}

fn classify(status: u16, message: &str, context: &ErrorContext) -> GitHubErrorKind {
    let lower = message.to_lowercase();
    let exhausted = context
        .rate_limit
        .as_ref()
        .map(|r| r.remaining == 0)
        .unwrap_or(false);

    match status {
        401 => {
            let otp_required = context
                .otp_header
                .as_deref()
                .map(|v| v.trim_start().starts_with("required"))
                .unwrap_or(false);
            if otp_required {
                GitHubErrorKind::TwoFactorRequired
            } else {
                GitHubErrorKind::Unauthorized
            }
        }
        403 | 429 => {
            if lower.contains("secondary rate limit") || lower.contains("abuse") {
                GitHubErrorKind::SecondaryRateLimitExceeded
            } else if exhausted || lower.contains("rate limit exceeded") {
                GitHubErrorKind::PrimaryRateLimitExceeded
            } else if lower.contains("maximum number of login attempts exceeded") {
                GitHubErrorKind::LoginAttemptsExceeded
            } else {
                GitHubError::kind_from_status(status)
            }
        }
        _ => GitHubError::kind_from_status(status),
    }
}

/// Fails with [`GitHubErrorKind::InvalidParameter`] when a required string
/// argument is empty or only whitespace.
pub fn ensure_not_empty(name: &str, value: &str) -> GitHubResult<()> {
    if value.trim().is_empty() {
        return Err(GitHubError::invalid_parameter(format!(
            "'{}' must not be empty",
            name
        )));
    }
    Ok(())
}

/// Fails when a value placed in a single path segment is empty or would be
/// resolved as `.` or `..` by URL parsing.
pub fn ensure_segment(name: &str, value: &str) -> GitHubResult<()> {
    ensure_not_empty(name, value)?;
    ensure_path(name, value)
}

/// Fails when any `/`-separated component of a multi-segment value (content
/// path, branch, git ref) is a dot segment. An empty value is accepted.
pub fn ensure_path(name: &str, value: &str) -> GitHubResult<()> {
    if value.split(['/', '\\']).any(is_dot_segment) {
        return Err(GitHubError::invalid_parameter(format!(
            "'{}' must not contain '.' or '..' path segments",
            name
        )));
    }
    Ok(())
}

/// Checks a request path, ignoring its query string.
pub(crate) fn ensure_no_dot_segments(path: &str) -> GitHubResult<()> {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    ensure_path("path", path)
}

// `%2e` decodes to `.` and is still a dot segment to a URL parser.
fn is_dot_segment(component: &str) -> bool {
    let decoded = percent_decode_str(component).decode_utf8_lossy();
    decoded == "." || decoded == ".."
}

/// Validates an `owner`/`repo` pair.
pub fn ensure_repo(owner: &str, repo: &str) -> GitHubResult<()> {
    ensure_segment("owner", owner)?;
    ensure_segment("repo", repo)
}
