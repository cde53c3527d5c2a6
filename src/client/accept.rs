//! Media types sent in the `Accept` header.

/// Default JSON media type for the REST API.
pub const JSON: &str = "application/vnd.github+json";

/// Raw file contents.
pub const RAW: &str = "application/vnd.github.raw";

/// Rendered HTML (README, markdown bodies).
pub const HTML: &str = "application/vnd.github.html";

/// Unified diff of a pull request or commit.
pub const DIFF: &str = "application/vnd.github.diff";

/// Patch format of a pull request or commit.
pub const PATCH: &str = "application/vnd.github.patch";
