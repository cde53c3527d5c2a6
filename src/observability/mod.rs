//! Tracing hooks and log redaction.
//!
//! The crate never installs a subscriber; applications choose one (see the
//! `repo_report` demo, which uses `tracing-subscriber` with an env filter).

use crate::client::RateLimitInfo;
use crate::errors::GitHubError;
use reqwest::header::HeaderMap;
use std::time::Duration;
use tracing::{debug, error, info, trace, warn};

/// Tracing hooks for GitHub API operations.
pub struct TracingHooks;

impl TracingHooks {
    /// Logs the start of an API request.
    pub fn on_request_start(method: &str, url: &str) {
        debug!(
            method = %method,
            url = %redact_url(url),
            "GitHub API request started"
        );
    }

    /// Logs the completion of an API request.
    pub fn on_request_complete(method: &str, url: &str, status: u16, duration: Duration) {
        info!(
            method = %method,
            url = %redact_url(url),
            status = status,
            duration_ms = duration.as_millis() as u64,
            "GitHub API request completed"
        );
    }

    /// Logs a request error. Client errors (4xx) are expected outcomes for
    /// probes and lookups and log at `warn`; everything else at `error`.
    pub fn on_request_error(method: &str, url: &str, err: &GitHubError, duration: Duration) {
        let url = redact_url(url);
        let duration_ms = duration.as_millis() as u64;
        match err.status_code() {
            Some(status) if (400..500).contains(&status) => warn!(
                method = %method,
                url = %url,
                status = status,
                kind = %err.kind(),
                duration_ms,
                "GitHub API request failed"
            ),
            status => error!(
                method = %method,
                url = %url,
                status = ?status,
                kind = %err.kind(),
                error = %err.message(),
                duration_ms,
                "GitHub API request failed"
            ),
        }
    }

    /// Logs response headers at `trace`, with credentials masked.
    pub fn on_response_headers(headers: &HeaderMap) {
        if !tracing::enabled!(tracing::Level::TRACE) {
            return;
        }
        for (name, value) in headers {
            let value = value.to_str().unwrap_or("<binary>");
            trace!(header = %name, value = %redact_header(name.as_str(), value), "Response header");
        }
    }

    /// Logs rate limit info.
    pub fn on_rate_limit_update(info: &RateLimitInfo) {
        debug!(
            limit = info.limit,
            remaining = info.remaining,
            used = info.used,
            reset_at = %info.reset_at,
            resource = info.resource.as_deref().unwrap_or("core"),
            "Rate limit updated"
        );
    }

    /// Logs rate limit exceeded.
    pub fn on_rate_limit_exceeded(info: &RateLimitInfo) {
        warn!(
            limit = info.limit,
            remaining = info.remaining,
            reset_at = %info.reset_at,
            resource = info.resource.as_deref().unwrap_or("core"),
            "Rate limit exceeded"
        );
    }

    /// Logs that an installation token was obtained and cached.
    pub fn on_installation_token_cached(installation_id: u64, expires_at: &str) {
        info!(
            installation_id,
            expires_at = %expires_at,
            "Installation token cached"
        );
    }
}

/// Headers whose values are never logged.
pub const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "x-github-otp",
    "cookie",
    "set-cookie",
];

/// Query parameters that carry credentials.
pub const SENSITIVE_QUERY_PARAMS: &[&str] = &[
    "access_token",
    "token",
    "client_secret",
    "code",
    "jwt",
];

const REDACTED: &str = "[REDACTED]";

/// Masks the value of a sensitive header.
pub fn redact_header(name: &str, value: &str) -> String {
    if SENSITIVE_HEADERS.contains(&name.to_lowercase().as_str()) {
        REDACTED.to_string()
    } else {
        value.to_string()
    }
}

/// Replaces credential-carrying query parameter values with a marker.
/// Strings that do not parse as URLs are returned unchanged.
pub fn redact_url(raw: &str) -> String {
    let Ok(mut url) = url::Url::parse(raw) else {
        return raw.to_string();
    };

    let sensitive = url
        .query_pairs()
        .any(|(k, _)| SENSITIVE_QUERY_PARAMS.contains(&k.to_lowercase().as_str()));
    if !sensitive {
        return raw.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if SENSITIVE_QUERY_PARAMS.contains(&k.to_lowercase().as_str()) {
                REDACTED.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}
