//! Response metadata extracted from GitHub headers.

use crate::pagination::PaginationLinks;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

/// Rate limit state reported by the `X-RateLimit-*` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the window.
    pub limit: u32,
    /// Remaining requests in the current window.
    pub remaining: u32,
    /// Requests used in the current window.
    pub used: u32,
    /// Time when the window resets.
    pub reset_at: DateTime<Utc>,
    /// Retry-After header value in seconds (if present).
    pub retry_after: Option<u64>,
    /// Resource category (`core`, `search`, `graphql`, ...).
    pub resource: Option<String>,
}

impl RateLimitInfo {
    /// Parses rate limit headers. Returns `None` unless limit, remaining and
    /// reset are all present.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit: u32 = header_value(headers, "x-ratelimit-limit")?.parse().ok()?;
        let remaining: u32 = header_value(headers, "x-ratelimit-remaining")?.parse().ok()?;
        let reset_timestamp: i64 = header_value(headers, "x-ratelimit-reset")?.parse().ok()?;
        let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

        let used = header_value(headers, "x-ratelimit-used")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| limit.saturating_sub(remaining));

        Some(Self {
            limit,
            remaining,
            used,
            reset_at,
            retry_after: header_value(headers, "retry-after").and_then(|v| v.parse().ok()),
            resource: header_value(headers, "x-ratelimit-resource").map(String::from),
        })
    }

    /// Returns true when no requests remain in the window.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Metadata about the last API response.
#[derive(Debug, Clone, Default)]
pub struct ApiInfo {
    /// Pagination links from the `Link` header.
    pub links: PaginationLinks,
    /// Scopes granted to the token (`X-OAuth-Scopes`).
    pub oauth_scopes: Vec<String>,
    /// Scopes the endpoint accepts (`X-Accepted-OAuth-Scopes`).
    pub accepted_oauth_scopes: Vec<String>,
    /// Entity tag of the response.
    pub etag: Option<String>,
    /// Rate limit state.
    pub rate_limit: Option<RateLimitInfo>,
    /// GitHub request ID.
    pub request_id: Option<String>,
}

impl ApiInfo {
    /// Builds API info from response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            links: PaginationLinks::from_headers(headers),
            oauth_scopes: scope_list(headers, "x-oauth-scopes"),
            accepted_oauth_scopes: scope_list(headers, "x-accepted-oauth-scopes"),
            etag: header_value(headers, "etag").map(String::from),
            rate_limit: RateLimitInfo::from_headers(headers),
            request_id: header_value(headers, "x-github-request-id").map(String::from),
        }
    }
}

pub(crate) fn header_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn scope_list(headers: &HeaderMap, name: &str) -> Vec<String> {
    header_value(headers, name)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
