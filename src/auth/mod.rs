//! Authentication mechanisms for GitHub API.

use crate::errors::{GitHubError, GitHubErrorKind, GitHubResult};
use async_trait::async_trait;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Installation tokens closer than this to expiry are not reused.
const INSTALLATION_TOKEN_BUFFER_MINUTES: i64 = 5;

/// Authentication method for GitHub API.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// No credentials. Public endpoints only, with the low anonymous rate limit.
    Anonymous,
    /// Login and password (or token) sent as HTTP Basic.
    Basic {
        /// Account login.
        login: String,
        /// Password or token.
        password: SecretString,
    },
    /// Personal Access Token (classic or fine-grained).
    Pat(SecretString),
    /// GitHub App authentication.
    App(AppAuth),
    /// OAuth token.
    OAuth(SecretString),
    /// GitHub Actions token (from GITHUB_TOKEN).
    Actions(SecretString),
}

impl AuthMethod {
    /// Creates a Basic authentication method.
    pub fn basic(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            login: login.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Creates a PAT authentication method.
    pub fn pat(token: impl Into<String>) -> Self {
        Self::Pat(SecretString::new(token.into()))
    }

    /// Creates an OAuth authentication method.
    pub fn oauth(token: impl Into<String>) -> Self {
        Self::OAuth(SecretString::new(token.into()))
    }

    /// Creates a GitHub Actions token authentication method.
    pub fn actions(token: impl Into<String>) -> Self {
        Self::Actions(SecretString::new(token.into()))
    }

    /// Creates a GitHub App authentication method.
    pub fn app(app_id: u64, private_key: impl Into<String>) -> Self {
        Self::App(AppAuth {
            app_id,
            private_key: SecretString::new(private_key.into()),
            installation_id: None,
        })
    }

    /// Returns true for [`AuthMethod::Anonymous`].
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Gets the token prefix for logging.
    pub fn token_prefix(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Basic { .. } => "basic",
            Self::Pat(t) => {
                let exposed = t.expose_secret();
                if exposed.starts_with("ghp_") {
                    "ghp_***"
                } else if exposed.starts_with("github_pat_") {
                    "github_pat_***"
                } else {
                    "***"
                }
            }
            Self::OAuth(_) => "gho_***",
            Self::Actions(_) => "ghs_***",
            Self::App(_) => "app_jwt",
        }
    }
}

/// GitHub App authentication configuration.
#[derive(Debug, Clone)]
pub struct AppAuth {
    /// GitHub App ID.
    pub app_id: u64,
    /// Private key (PEM format).
    pub private_key: SecretString,
    /// Installation ID (optional, for installation token).
    pub installation_id: Option<u64>,
}

impl AppAuth {
    /// Sets the installation ID.
    pub fn with_installation(mut self, installation_id: u64) -> Self {
        self.installation_id = Some(installation_id);
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    iat: i64,
    exp: i64,
    iss: String,
}

#[derive(Debug, Clone)]
struct CachedToken {
    installation_id: u64,
    token: SecretString,
    expires_at: DateTime<Utc>,
}

/// Resolves credentials into `Authorization` header values.
pub struct AuthManager {
    provider: RwLock<Arc<dyn CredentialProvider>>,
    cached_installation_token: RwLock<Option<CachedToken>>,
}

impl AuthManager {
    /// Creates a manager over a credential provider.
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Self {
        Self {
            provider: RwLock::new(provider),
            cached_installation_token: RwLock::new(None),
        }
    }

    /// Creates a manager with fixed credentials.
    pub fn from_method(method: AuthMethod) -> Self {
        Self::new(Arc::new(StaticCredentialProvider::new(method)))
    }

    /// Replaces the credential provider and drops any cached installation token.
    pub async fn set_provider(&self, provider: Arc<dyn CredentialProvider>) {
        *self.provider.write().await = provider;
        self.clear_cache().await;
    }

    /// Resolves the current authentication method.
    pub async fn method(&self) -> GitHubResult<AuthMethod> {
        let provider = self.provider.read().await.clone();
        provider.get_auth().await
    }

    /// Produces the `Authorization` header value, or `None` for anonymous
    /// access.
    pub async fn authorization_header(&self) -> GitHubResult<Option<String>> {
        let header = match self.method().await? {
            AuthMethod::Anonymous => None,
            AuthMethod::Basic { login, password } => {
                let raw = format!("{}:{}", login, password.expose_secret());
                let encoded = base64::engine::general_purpose::STANDARD.encode(raw);
                Some(format!("Basic {}", encoded))
            }
            AuthMethod::Pat(token) | AuthMethod::OAuth(token) | AuthMethod::Actions(token) => {
                Some(format!("Bearer {}", token.expose_secret()))
            }
            AuthMethod::App(app) => {
                match self.cached_installation_token(app.installation_id).await {
                    Some(token) => Some(format!("Bearer {}", token.expose_secret())),
                    None => Some(format!("Bearer {}", generate_jwt(&app)?)),
                }
            }
        };
        Ok(header)
    }

    /// Produces an app JWT regardless of any cached installation token.
    /// Endpoints under `/app` require it.
    pub async fn app_jwt(&self) -> GitHubResult<String> {
        match self.method().await? {
            AuthMethod::App(app) => generate_jwt(&app),
            other => Err(GitHubError::new(
                GitHubErrorKind::InvalidAppCredentials,
                format!(
                    "GitHub App credentials required, found {}",
                    other.token_prefix()
                ),
            )),
        }
    }

    /// Returns the cached token while it is valid for more than the buffer.
    /// When the credentials name an installation, the token must belong to it.
    async fn cached_installation_token(&self, configured: Option<u64>) -> Option<SecretString> {
        let cache = self.cached_installation_token.read().await;
        cache
            .as_ref()
            .filter(|c| configured.map_or(true, |id| id == c.installation_id))
            .filter(|c| {
                c.expires_at > Utc::now() + Duration::minutes(INSTALLATION_TOKEN_BUFFER_MINUTES)
            })
            .map(|c| c.token.clone())
    }

    /// Caches an installation token. App credentials then sign ordinary
    /// requests with it instead of a JWT until it nears expiry.
    pub async fn cache_installation_token(
        &self,
        installation_id: u64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) {
        let mut cache = self.cached_installation_token.write().await;
        *cache = Some(CachedToken {
            installation_id,
            token: SecretString::new(token.to_string()),
            expires_at,
        });
    }

    /// Clears the installation token cache.
    pub async fn clear_cache(&self) {
        let mut cache = self.cached_installation_token.write().await;
        *cache = None;
    }
}

fn generate_jwt(app: &AppAuth) -> GitHubResult<String> {
    let now = Utc::now();
    // GitHub rejects tokens issued in the future and caps lifetime at 10 minutes.
    let claims = JwtClaims {
        iat: (now - Duration::seconds(60)).timestamp(),
        exp: (now + Duration::minutes(9)).timestamp(),
        iss: app.app_id.to_string(),
    };

    let key = EncodingKey::from_rsa_pem(app.private_key.expose_secret().as_bytes()).map_err(|e| {
        GitHubError::new(
            GitHubErrorKind::InvalidAppCredentials,
            format!("Failed to parse private key: {}", e),
        )
    })?;

    encode(&Header::new(Algorithm::RS256), &claims, &key).map_err(|e| {
        GitHubError::new(
            GitHubErrorKind::AppAuthenticationFailed,
            format!("Failed to generate JWT: {}", e),
        )
    })
}

/// Credential provider trait for dynamic credential resolution.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Gets the current authentication method.
    async fn get_auth(&self) -> GitHubResult<AuthMethod>;

    /// Checks if credentials are available.
    async fn is_valid(&self) -> bool;
}

/// Static credential provider using fixed credentials.
pub struct StaticCredentialProvider {
    method: AuthMethod,
}

impl StaticCredentialProvider {
    /// Creates a new static credential provider.
    pub fn new(method: AuthMethod) -> Self {
        Self { method }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn get_auth(&self) -> GitHubResult<AuthMethod> {
        Ok(self.method.clone())
    }

    async fn is_valid(&self) -> bool {
        true
    }
}

/// Reads a token from an environment variable on every request.
pub struct EnvCredentialProvider {
    token_var: String,
}

impl EnvCredentialProvider {
    /// Creates a provider from GITHUB_TOKEN environment variable.
    pub fn from_github_token() -> Self {
        Self::from_env_var("GITHUB_TOKEN")
    }

    /// Creates a provider from a custom environment variable.
    pub fn from_env_var(var_name: impl Into<String>) -> Self {
        Self {
            token_var: var_name.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_auth(&self) -> GitHubResult<AuthMethod> {
        std::env::var(&self.token_var)
            .ok()
            .filter(|v| !v.is_empty())
            .map(AuthMethod::pat)
            .ok_or_else(|| {
                GitHubError::new(
                    GitHubErrorKind::MissingAuth,
                    format!("Environment variable {} not set", self.token_var),
                )
            })
    }

    async fn is_valid(&self) -> bool {
        std::env::var(&self.token_var).map(|v| !v.is_empty()).unwrap_or(false)
    }
}
