//! GitHub API client implementation.
//!
//! [`GitHubClient`] is the connection every resource service borrows. It
//! owns the HTTP transport, resolves credentials for each request, attaches
//! the standard GitHub headers, turns non-2xx responses into
//! [`GitHubError`]s and records the [`ApiInfo`] of the last response. It
//! never retries.

pub mod accept;
mod api_info;

pub use api_info::{ApiInfo, RateLimitInfo};

use crate::auth::{AuthManager, AuthMethod, CredentialProvider, StaticCredentialProvider};
use crate::config::{GitHubConfig, GitHubConfigBuilder};
use crate::errors::{
    ensure_no_dot_segments, ErrorContext, ErrorResponse, GitHubError, GitHubErrorKind,
    GitHubResult,
};
use crate::observability::TracingHooks;
use crate::pagination::{ApiOptions, ListEnvelope, Page, PageCursor, PageIterator, PaginationLinks};
use crate::services::*;
use api_info::header_value;
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

const API_VERSION_HEADER: &str = "x-github-api-version";

/// Which credentials a request is signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signing {
    /// Whatever the credential provider resolves to.
    Configured,
    /// A freshly signed GitHub App JWT (required under `/app`).
    AppJwt,
}

struct ApiRequest<'a> {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    accept: &'a str,
    signing: Signing,
}

impl<'a> ApiRequest<'a> {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            body: None,
            accept: accept::JSON,
            signing: Signing::Configured,
        }
    }

    fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    fn json<B: Serialize + ?Sized>(mut self, body: &B) -> GitHubResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            GitHubError::invalid_parameter(format!("Failed to serialize request body: {}", e))
        })?;
        self.body = Some(bytes);
        Ok(self)
    }

    fn accept(mut self, media_type: &'a str) -> Self {
        self.accept = media_type;
        self
    }

    fn signing(mut self, signing: Signing) -> Self {
        self.signing = signing;
        self
    }
}

/// GitHub API client.
pub struct GitHubClient {
    http: Client,
    config: GitHubConfig,
    auth: AuthManager,
    last_api_info: RwLock<Option<ApiInfo>>,
}

impl GitHubClient {
    /// Creates a new GitHub client using the credentials in `config`.
    pub fn new(config: GitHubConfig) -> GitHubResult<Self> {
        let provider = Arc::new(StaticCredentialProvider::new(config.auth.clone()));
        Self::with_credential_provider(config, provider)
    }

    /// Creates a client whose credentials are resolved by `provider` on
    /// every request.
    pub fn with_credential_provider(
        config: GitHubConfig,
        provider: Arc<dyn CredentialProvider>,
    ) -> GitHubResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool.max_idle_per_host)
            .pool_idle_timeout(config.pool.idle_timeout)
            .build()
            .map_err(|e| {
                GitHubError::new(
                    GitHubErrorKind::InvalidConfiguration,
                    format!("Failed to create HTTP client: {}", e),
                )
                .with_cause(e)
            })?;

        Ok(Self {
            http,
            config,
            auth: AuthManager::new(provider),
            last_api_info: RwLock::new(None),
        })
    }

    /// Creates a new client builder.
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the configuration.
    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Gets the authentication manager.
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Replaces the credentials used for subsequent requests.
    pub async fn set_credentials(&self, method: AuthMethod) {
        tracing::debug!(credentials = method.token_prefix(), "Credentials replaced");
        self.auth
            .set_provider(Arc::new(StaticCredentialProvider::new(method)))
            .await;
    }

    /// Returns metadata from the most recent response, if any request has
    /// completed.
    pub async fn last_api_info(&self) -> Option<ApiInfo> {
        self.last_api_info.read().await.clone()
    }

    // Service accessors

    /// Gets the repositories service.
    pub fn repositories(&self) -> RepositoriesService<'_> {
        RepositoriesService::new(self)
    }

    /// Gets the issues service.
    pub fn issues(&self) -> IssuesService<'_> {
        IssuesService::new(self)
    }

    /// Gets the pull requests service.
    pub fn pull_requests(&self) -> PullRequestsService<'_> {
        PullRequestsService::new(self)
    }

    /// Gets the actions service.
    pub fn actions(&self) -> ActionsService<'_> {
        ActionsService::new(self)
    }

    /// Gets the organizations service.
    pub fn organizations(&self) -> OrganizationsService<'_> {
        OrganizationsService::new(self)
    }

    /// Gets the codespaces service.
    pub fn codespaces(&self) -> CodespacesService<'_> {
        CodespacesService::new(self)
    }

    /// Gets the users service.
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Gets the gists service.
    pub fn gists(&self) -> GistsService<'_> {
        GistsService::new(self)
    }

    /// Gets the search service.
    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(self)
    }

    /// Gets the Git database service.
    pub fn git_data(&self) -> GitDataService<'_> {
        GitDataService::new(self)
    }

    /// Gets the GitHub Apps service.
    pub fn apps(&self) -> AppsService<'_> {
        AppsService::new(self)
    }

    /// Gets the miscellaneous endpoints (rate limit, meta, markdown, ...).
    pub fn miscellaneous(&self) -> MiscellaneousService<'_> {
        MiscellaneousService::new(self)
    }

    // HTTP methods

    /// Makes a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> GitHubResult<T> {
        let request = ApiRequest::new(Method::GET, self.build_url(path)?);
        decode(self.execute(request).await?).await
    }

    /// Makes a GET request with query parameters.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> GitHubResult<T> {
        let request =
            ApiRequest::new(Method::GET, self.build_url(path)?).query(to_query_pairs(params)?);
        decode(self.execute(request).await?).await
    }

    /// Makes a GET request with a non-JSON media type and returns the body
    /// as text (raw file contents, rendered HTML, diffs).
    pub async fn get_text_with_accept(
        &self,
        path: &str,
        media_type: &str,
    ) -> GitHubResult<String> {
        let request = ApiRequest::new(Method::GET, self.build_url(path)?).accept(media_type);
        let response = self.execute(request).await?;
        response.text().await.map_err(transport_error)
    }

    /// Same as [`get_text_with_accept`](Self::get_text_with_accept) with
    /// query parameters.
    pub async fn get_text_with_params<P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
        media_type: &str,
    ) -> GitHubResult<String> {
        let request = ApiRequest::new(Method::GET, self.build_url(path)?)
            .query(to_query_pairs(params)?)
            .accept(media_type);
        let response = self.execute(request).await?;
        response.text().await.map_err(transport_error)
    }

    /// Downloads a binary body. Redirects to storage hosts are followed.
    pub async fn get_bytes(&self, path: &str, media_type: &str) -> GitHubResult<Bytes> {
        let request = ApiRequest::new(Method::GET, self.build_url(path)?).accept(media_type);
        let response = self.execute(request).await?;
        response.bytes().await.map_err(transport_error)
    }

    /// Probes an endpoint that answers 204 for yes and 404 for no.
    pub async fn get_status(&self, path: &str) -> GitHubResult<bool> {
        let request = ApiRequest::new(Method::GET, self.build_url(path)?);
        match self.execute(request).await {
            Ok(_) => Ok(true),
            Err(e) if e.status_code() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Makes a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let request = ApiRequest::new(Method::POST, self.build_url(path)?).json(body)?;
        decode(self.execute(request).await?).await
    }

    /// Makes a POST request and discards the response body.
    pub async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<()> {
        let request = ApiRequest::new(Method::POST, self.build_url(path)?).json(body)?;
        self.execute(request).await.map(drop)
    }

    /// Makes a POST request without a body.
    pub async fn post_no_body<T: DeserializeOwned>(&self, path: &str) -> GitHubResult<T> {
        let request = ApiRequest::new(Method::POST, self.build_url(path)?);
        decode(self.execute(request).await?).await
    }

    /// Makes a POST request without a body and discards the response.
    pub async fn post_no_body_empty(&self, path: &str) -> GitHubResult<()> {
        self.execute(ApiRequest::new(Method::POST, self.build_url(path)?))
            .await
            .map(drop)
    }

    /// Makes a POST request and returns the body as text.
    pub async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        media_type: &str,
    ) -> GitHubResult<String> {
        let request = ApiRequest::new(Method::POST, self.build_url(path)?)
            .json(body)?
            .accept(media_type);
        let response = self.execute(request).await?;
        response.text().await.map_err(transport_error)
    }

    /// Makes a PUT request.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let request = ApiRequest::new(Method::PUT, self.build_url(path)?).json(body)?;
        decode(self.execute(request).await?).await
    }

    /// Makes a PUT request and discards the response body.
    pub async fn put_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<()> {
        let request = ApiRequest::new(Method::PUT, self.build_url(path)?).json(body)?;
        self.execute(request).await.map(drop)
    }

    /// Makes a PUT request without a body and discards the response.
    pub async fn put_no_body_empty(&self, path: &str) -> GitHubResult<()> {
        self.execute(ApiRequest::new(Method::PUT, self.build_url(path)?))
            .await
            .map(drop)
    }

    /// Makes a PATCH request.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let request = ApiRequest::new(Method::PATCH, self.build_url(path)?).json(body)?;
        decode(self.execute(request).await?).await
    }

    /// Makes a PATCH request and discards the response body.
    pub async fn patch_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<()> {
        let request = ApiRequest::new(Method::PATCH, self.build_url(path)?).json(body)?;
        self.execute(request).await.map(drop)
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> GitHubResult<()> {
        self.execute(ApiRequest::new(Method::DELETE, self.build_url(path)?))
            .await
            .map(drop)
    }

    /// Makes a DELETE request without a body and decodes the response.
    pub async fn delete_returning<T: DeserializeOwned>(&self, path: &str) -> GitHubResult<T> {
        let response = self
            .execute(ApiRequest::new(Method::DELETE, self.build_url(path)?))
            .await?;
        decode(response).await
    }

    /// Makes a DELETE request carrying a JSON body.
    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<()> {
        let request = ApiRequest::new(Method::DELETE, self.build_url(path)?).json(body)?;
        self.execute(request).await.map(drop)
    }

    /// Makes a DELETE request carrying a JSON body and decodes the response.
    pub async fn delete_with_response<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let request = ApiRequest::new(Method::DELETE, self.build_url(path)?).json(body)?;
        decode(self.execute(request).await?).await
    }

    /// Makes a GET request signed with the app JWT.
    pub(crate) async fn get_as_app<T: DeserializeOwned>(&self, path: &str) -> GitHubResult<T> {
        let request =
            ApiRequest::new(Method::GET, self.build_url(path)?).signing(Signing::AppJwt);
        decode(self.execute(request).await?).await
    }

    /// Makes a POST request signed with the app JWT.
    pub(crate) async fn post_as_app<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let request = ApiRequest::new(Method::POST, self.build_url(path)?)
            .json(body)?
            .signing(Signing::AppJwt);
        decode(self.execute(request).await?).await
    }

    /// Fetches every page of an app-level list endpoint, signing each
    /// request with the app JWT.
    pub(crate) async fn get_all_as_app<T: DeserializeOwned>(
        &self,
        path: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<T>> {
        let options = self.with_default_page_size(options);
        let mut request =
            ApiRequest::new(Method::GET, self.build_url(path)?).query(options.to_query());
        let mut items = Vec::new();
        if options.page_count == Some(0) {
            return Ok(items);
        }
        let mut pages = 0u32;
        loop {
            let response = self.execute(request.signing(Signing::AppJwt)).await?;
            let links = PaginationLinks::from_headers(response.headers());
            let page: Vec<T> = decode(response).await?;
            items.extend(page);
            pages += 1;

            match links.next {
                Some(next) if options.page_count.map_or(true, |limit| pages < limit) => {
                    self.ensure_same_origin(&next)?;
                    request = ApiRequest::new(Method::GET, next);
                }
                _ => return Ok(items),
            }
        }
    }

    // Pagination

    /// Fetches a single page of a list endpoint.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &ApiOptions,
    ) -> GitHubResult<Page<T>> {
        let options = self.with_default_page_size(*options);
        self.fetch_page_as(PageCursor::First {
            path: path.to_string(),
            query: options.to_query(),
        })
        .await
    }

    /// Fetches the page at an absolute URL taken from a `Link` header.
    pub async fn get_page_url<T: DeserializeOwned>(&self, url: &str) -> GitHubResult<Page<T>> {
        self.fetch_page_as(PageCursor::Next(url.to_string())).await
    }

    /// Fetches every page of a plain-array list endpoint.
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        path: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<T>> {
        self.pages::<Vec<T>>(path, Vec::new(), options)
            .collect_all()
            .await
    }

    /// Fetches every page of a plain-array list endpoint with filters.
    pub async fn get_all_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
        options: ApiOptions,
    ) -> GitHubResult<Vec<T>> {
        self.pages::<Vec<T>>(path, to_query_pairs(params)?, options)
            .collect_all()
            .await
    }

    /// Fetches every page of an endpoint that wraps its list in an object.
    pub async fn get_all_envelope<E: ListEnvelope>(
        &self,
        path: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<E::Item>> {
        self.pages::<E>(path, Vec::new(), options).collect_all().await
    }

    /// Fetches every page of a wrapped list endpoint with filters.
    pub async fn get_all_envelope_with_params<E: ListEnvelope, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
        options: ApiOptions,
    ) -> GitHubResult<Vec<E::Item>> {
        self.pages::<E>(path, to_query_pairs(params)?, options)
            .collect_all()
            .await
    }

    /// Returns a lazy iterator over the pages of a list endpoint.
    pub fn pages<E: ListEnvelope>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        options: ApiOptions,
    ) -> PageIterator<'_, E> {
        PageIterator::new(
            self,
            path.to_string(),
            query,
            self.with_default_page_size(options),
        )
    }

    pub(crate) async fn fetch_page<E: ListEnvelope>(
        &self,
        cursor: PageCursor,
    ) -> GitHubResult<(E, PaginationLinks)> {
        let request = match cursor {
            PageCursor::First { path, query } => {
                ApiRequest::new(Method::GET, self.build_url(&path)?).query(query)
            }
            PageCursor::Next(url) => {
                self.ensure_same_origin(&url)?;
                ApiRequest::new(Method::GET, url)
            }
            PageCursor::Done => {
                return Err(GitHubError::invalid_parameter("No further pages to fetch"));
            }
        };

        let response = self.execute(request).await?;
        let links = PaginationLinks::from_headers(response.headers());
        let envelope = decode(response).await?;
        Ok((envelope, links))
    }

    async fn fetch_page_as<T: DeserializeOwned>(
        &self,
        cursor: PageCursor,
    ) -> GitHubResult<Page<T>> {
        let (items, links): (Vec<T>, PaginationLinks) = self.fetch_page(cursor).await?;
        Ok(Page::new(items, links))
    }

    fn with_default_page_size(&self, mut options: ApiOptions) -> ApiOptions {
        if options.page_size.is_none() {
            options.page_size = self.config.default_page_size;
        }
        options
    }

    // Internal methods

    async fn execute(&self, request: ApiRequest<'_>) -> GitHubResult<Response> {
        let authorization = match request.signing {
            Signing::Configured => self.auth.authorization_header().await?,
            Signing::AppJwt => Some(format!("Bearer {}", self.auth.app_jwt().await?)),
        };

        let method = request.method.clone();
        let url = request.url.clone();
        TracingHooks::on_request_start(method.as_str(), &url);
        let started = Instant::now();

        let mut builder = self
            .http
            .request(request.method, &request.url)
            .header(ACCEPT, request.accept)
            .header(USER_AGENT, &self.config.user_agent)
            .header(API_VERSION_HEADER, &self.config.api_version);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(bytes) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = transport_error(e);
                TracingHooks::on_request_error(method.as_str(), &url, &error, started.elapsed());
                return Err(error);
            }
        };

        let status = response.status();
        TracingHooks::on_response_headers(response.headers());
        let info = ApiInfo::from_headers(response.headers());
        self.record_api_info(&info).await;

        if status.is_success() {
            TracingHooks::on_request_complete(
                method.as_str(),
                &url,
                status.as_u16(),
                started.elapsed(),
            );
            return Ok(response);
        }

        let error = error_from_response(response, info).await;
        TracingHooks::on_request_error(method.as_str(), &url, &error, started.elapsed());
        Err(error)
    }

    async fn record_api_info(&self, info: &ApiInfo) {
        if let Some(rate_limit) = &info.rate_limit {
            if rate_limit.is_exhausted() {
                TracingHooks::on_rate_limit_exceeded(rate_limit);
            } else {
                TracingHooks::on_rate_limit_update(rate_limit);
            }
        }
        *self.last_api_info.write().await = Some(info.clone());
    }

    fn build_url(&self, path: &str) -> GitHubResult<String> {
        ensure_no_dot_segments(path)?;
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(format!("{}/{}", base, path))
    }

    fn ensure_same_origin(&self, next: &str) -> GitHubResult<()> {
        let origin = |raw: &str| url::Url::parse(raw).ok().map(|u| u.origin());
        match (origin(next), origin(&self.config.base_url)) {
            (Some(a), Some(b)) if a == b => Ok(()),
            _ => Err(GitHubError::invalid_parameter(format!(
                "Pagination link '{}' does not point at {}",
                next, self.config.base_url
            ))),
        }
    }
}

/// Serializes a parameter struct into query pairs. `None` fields are
/// skipped by the structs' serde attributes.
pub(crate) fn to_query_pairs<P: Serialize + ?Sized>(
    params: &P,
) -> GitHubResult<Vec<(String, String)>> {
    let encoded = serde_urlencoded::to_string(params).map_err(|e| {
        GitHubError::invalid_parameter(format!("Failed to serialize parameters: {}", e))
    })?;
    serde_urlencoded::from_str(&encoded).map_err(|e| {
        GitHubError::invalid_parameter(format!("Failed to serialize parameters: {}", e))
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> GitHubResult<T> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        GitHubError::deserialization(format!("Failed to deserialize response: {}", e)).with_cause(e)
    })
}

fn transport_error(e: reqwest::Error) -> GitHubError {
    let error = if e.is_timeout() {
        GitHubError::timeout(format!("Request timed out: {}", e))
    } else if e.is_connect() {
        GitHubError::new(GitHubErrorKind::ConnectionFailed, format!("Connection failed: {}", e))
    } else if e.is_decode() {
        GitHubError::deserialization(format!("Failed to read response body: {}", e))
    } else {
        GitHubError::new(GitHubErrorKind::Unknown, format!("Request failed: {}", e))
    };
    error.with_cause(e)
}

async fn error_from_response(response: Response, info: ApiInfo) -> GitHubError {
    let status = response.status().as_u16();
    let otp_header = header_value(response.headers(), "x-github-otp").map(String::from);

    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ErrorResponse>(&text).unwrap_or_else(|_| ErrorResponse {
        message: text.trim().to_string(),
        ..Default::default()
    });

    GitHubError::from_response(
        status,
        body,
        ErrorContext {
            otp_header,
            request_id: info.request_id,
            rate_limit: info.rate_limit,
        },
    )
}

/// Builder for GitHubClient.
pub struct GitHubClientBuilder {
    config_builder: GitHubConfigBuilder,
    provider: Option<Arc<dyn CredentialProvider>>,
}

impl GitHubClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: GitHubConfig::builder(),
            provider: None,
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the API version header.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_version(version);
        self
    }

    /// Sets the authentication method.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.config_builder = self.config_builder.auth(auth);
        self
    }

    /// Sets a personal access token.
    pub fn pat(self, token: impl Into<String>) -> Self {
        self.auth(AuthMethod::pat(token))
    }

    /// Resolves credentials through a provider instead of fixed values.
    pub fn credential_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Sets the page size used when a list call does not specify one.
    pub fn default_page_size(mut self, size: u32) -> Self {
        self.config_builder = self.config_builder.default_page_size(size);
        self
    }

    /// Builds the client.
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let config = self.config_builder.build()?;
        match self.provider {
            Some(provider) => GitHubClient::with_credential_provider(config, provider),
            None => GitHubClient::new(config),
        }
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
