//! Configuration types for the GitHub client.

use crate::auth::AuthMethod;
use crate::errors::{GitHubError, GitHubErrorKind};
use std::time::Duration;

/// Default GitHub API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default GitHub API version (date-based).
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = concat!("octorest/", env!("CARGO_PKG_VERSION"));

/// Largest `per_page` value GitHub accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

const ENTERPRISE_API_PATH: &str = "api/v3";

/// Connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum idle connections per host.
    pub max_idle_per_host: usize,
    /// Idle connection timeout.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 20,
            idle_timeout: Duration::from_secs(90),
        }
    }
}

/// GitHub client configuration.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// API base URL.
    pub base_url: String,
    /// API version header.
    pub api_version: String,
    /// Credentials.
    pub auth: AuthMethod,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
    /// Connection pool configuration.
    pub pool: PoolConfig,
    /// `per_page` sent by list calls that do not set one.
    pub default_page_size: Option<u32>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            auth: AuthMethod::Anonymous,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pool: PoolConfig::default(),
            default_page_size: None,
        }
    }
}

impl GitHubConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> GitHubConfigBuilder {
        GitHubConfigBuilder::new()
    }

    /// Starts a builder pointed at a GitHub Enterprise Server host.
    ///
    /// `https://ghe.example.com` becomes `https://ghe.example.com/api/v3`.
    /// URLs that already contain `/api/v3`, and `api.github.com` itself,
    /// are kept as given.
    pub fn enterprise(host_url: &str) -> GitHubConfigBuilder {
        GitHubConfigBuilder::new().base_url(enterprise_api_url(host_url))
    }

    /// Builds a configuration from `GITHUB_TOKEN`, `GITHUB_API_URL` and
    /// `GITHUB_USER_AGENT`. Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, GitHubError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GitHubError> {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut builder = GitHubConfigBuilder::new();
        if let Some(token) = present("GITHUB_TOKEN") {
            builder = builder.auth(AuthMethod::pat(token));
        }
        if let Some(url) = present("GITHUB_API_URL") {
            builder = builder.base_url(url);
        }
        if let Some(ua) = present("GITHUB_USER_AGENT") {
            builder = builder.user_agent(ua);
        }
        builder.build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GitHubError> {
        if self.base_url.is_empty() {
            return Err(GitHubError::new(
                GitHubErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            GitHubError::new(
                GitHubErrorKind::InvalidBaseUrl,
                format!("Invalid base URL '{}': {}", self.base_url, e),
            )
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GitHubError::new(
                GitHubErrorKind::InvalidBaseUrl,
                "Base URL must start with http:// or https://",
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(GitHubError::configuration("User-Agent is required by GitHub API"));
        }

        if let Some(size) = self.default_page_size {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(GitHubError::configuration(format!(
                    "Default page size must be between 1 and {}",
                    MAX_PAGE_SIZE
                )));
            }
        }

        Ok(())
    }
}

fn enterprise_api_url(host_url: &str) -> String {
    let trimmed = host_url.trim().trim_end_matches('/');
    match url::Url::parse(trimmed) {
        Ok(parsed)
            if parsed.host_str() != Some("api.github.com")
                && !parsed.path().contains(ENTERPRISE_API_PATH) =>
        {
            format!("{}/{}", trimmed, ENTERPRISE_API_PATH)
        }
        _ => trimmed.to_string(),
    }
}

/// Builder for GitHubConfig.
#[derive(Debug, Default)]
pub struct GitHubConfigBuilder {
    base_url: Option<String>,
    api_version: Option<String>,
    auth: Option<AuthMethod>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    pool: Option<PoolConfig>,
    default_page_size: Option<u32>,
}

impl GitHubConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the authentication method.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the connection pool configuration.
    pub fn pool(mut self, config: PoolConfig) -> Self {
        self.pool = Some(config);
        self
    }

    /// Sets the page size used when a list call does not specify one.
    pub fn default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = Some(size);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<GitHubConfig, GitHubError> {
        let config = GitHubConfig {
            base_url: self
                .base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: self.api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            auth: self.auth.unwrap_or(AuthMethod::Anonymous),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            pool: self.pool.unwrap_or_default(),
            default_page_size: self.default_page_size,
        };

        config.validate()?;
        Ok(config)
    }
}
