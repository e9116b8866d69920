//! Authenticated request gateway.
//!
//! ARCHITECTURE
//! ============
//! Every authenticated call goes through `Gateway::send`, which enforces the
//! credential contract in one place:
//! - no credential: fail with `Unauthenticated` before touching the network
//! - 401: expire the session, drop the cache, navigate to login, fail
//! - other non-2xx: fail with `Api { status, status_text, detail }`
//! - 2xx: hand the raw response back
//!
//! One attempt per call: no retries, no backoff.
//!
//! HEADER PRECEDENCE
//! =================
//! 1. `Authorization` belongs to the gateway; a caller value is dropped.
//! 2. `Content-Type` from the caller wins; otherwise it follows the body
//!    kind (form bodies are url-encoded, everything else is JSON).
//! 3. Any other caller header passes through untouched.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::cache::{ResponseCache, cache_key};
use super::types::ErrorBody;
use crate::config::{ClientConfig, normalize_base_url};
use crate::error::ApiError;
use crate::state::navigation::{Navigator, Route};
use crate::state::session::Session;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// =============================================================================
// REQUEST OPTIONS
// =============================================================================

/// Request body variants the API accepts.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

impl Body {
    /// Content type implied by the body when the caller sets none.
    #[must_use]
    pub fn default_content_type(&self) -> &'static str {
        match self {
            Self::Form(_) => FORM_CONTENT_TYPE,
            Self::Empty | Self::Json(_) => JSON_CONTENT_TYPE,
        }
    }
}

/// Method, query, body and extra headers of one call.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Body,
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::GET, query: Vec::new(), body: Body::Empty, headers: HeaderMap::new() }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post_json(value: serde_json::Value) -> Self {
        Self { method: Method::POST, body: Body::Json(value), ..Self::default() }
    }

    #[must_use]
    pub fn post_form(pairs: Vec<(String, String)>) -> Self {
        Self { method: Method::POST, body: Body::Form(pairs), ..Self::default() }
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Apply the header precedence rules.
///
/// `credential` is `None` for public calls (login, register).
///
/// # Errors
///
/// Returns `InvalidRequest` if the credential cannot be sent as a header value.
pub fn merge_headers(credential: Option<&str>, body: &Body, caller: &HeaderMap) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::with_capacity(caller.len() + 2);
    for (name, value) in caller {
        if name == AUTHORIZATION && credential.is_some() {
            tracing::debug!("caller Authorization header replaced by session credential");
            continue;
        }
        headers.append(name.clone(), value.clone());
    }

    if let Some(token) = credential {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::InvalidRequest(format!("credential is not a valid header value: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
    }

    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(body.default_content_type()));
    }
    Ok(headers)
}

/// Pull the human-readable `detail` out of an API error body.
///
/// Validation failures carry a list of `{msg}` objects; those are joined.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return None,
    };
    match parsed.detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg").and_then(serde_json::Value::as_str) {
                    Some(msg) => msg.to_owned(),
                    None => item.to_string(),
                })
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

// =============================================================================
// GATEWAY
// =============================================================================

#[derive(Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
    cache: ResponseCache,
}

impl Gateway {
    /// Build a gateway for the configured API origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig, session: Session, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(&config.base_url),
            session,
            navigator,
            cache: ResponseCache::new(config.cache_ttl),
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    #[must_use]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/user/me`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Send an authenticated request.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a credential (nothing is sent),
    /// `SessionExpired` on 401, `Api` on any other non-2xx status,
    /// `Request` on transport failure.
    pub async fn send(&self, path: &str, options: RequestOptions) -> Result<Response, ApiError> {
        let Some(token) = self.session.get() else {
            tracing::warn!(path, "request blocked: no session credential");
            return Err(ApiError::Unauthenticated);
        };
        let headers = merge_headers(Some(&token), &options.body, &options.headers)?;
        let response = self.dispatch(path, options, headers).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "credential rejected; clearing session");
            self.session.expire();
            self.cache.invalidate_all();
            self.navigator.navigate(Route::Login);
            return Err(ApiError::SessionExpired);
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response)
    }

    /// Send a request that needs no credential (login, register).
    ///
    /// A 401 here means bad credentials, not an expired session, so it is
    /// reported as a plain `Api` error and the session is left alone.
    ///
    /// # Errors
    ///
    /// `Api` on any non-2xx status, `Request` on transport failure.
    pub async fn send_public(&self, path: &str, options: RequestOptions) -> Result<Response, ApiError> {
        let headers = merge_headers(None, &options.body, &options.headers)?;
        let response = self.dispatch(path, options, headers).await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response)
    }

    /// Authenticated GET decoded as JSON, served from the shared cache when fresh.
    ///
    /// The credential is checked first: a cached body is never served to a
    /// session without one.
    ///
    /// # Errors
    ///
    /// Same as [`Gateway::send`], plus `Decode` for unexpected bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: Vec<(String, String)>) -> Result<T, ApiError> {
        if self.session.get().is_none() {
            tracing::warn!(path, "read blocked: no session credential");
            self.cache.invalidate_all();
            return Err(ApiError::Unauthenticated);
        }
        let key = cache_key(path, &query);
        if let Some(body) = self.cache.get(&key).await {
            return Ok(serde_json::from_str(&body)?);
        }
        let generation = self.cache.generation();
        let options = RequestOptions { query, ..RequestOptions::get() };
        let body: Arc<str> = Arc::from(self.send(path, options).await?.text().await?);
        let value = serde_json::from_str(&body)?;
        self.cache.insert(key, body, generation).await;
        Ok(value)
    }

    /// Authenticated request decoded as JSON, never cached.
    ///
    /// Any non-GET call drops the cache so later reads see the write.
    ///
    /// # Errors
    ///
    /// Same as [`Gateway::send`], plus `Decode` for unexpected bodies.
    pub async fn send_json<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError> {
        let writes = options.method != Method::GET;
        let result = self.send(path, options).await;
        if writes {
            self.cache.invalidate_all();
        }
        let text = result?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn dispatch(&self, path: &str, options: RequestOptions, headers: HeaderMap) -> Result<Response, ApiError> {
        let url = self.url(path);
        let method = options.method.clone();
        let mut request = self.http.request(options.method, &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        request = match options.body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Form(pairs) => request.form(&pairs),
        };

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "request failed");
            ApiError::Request(e)
        })?;
        tracing::debug!(
            %method,
            path,
            status = response.status().as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "api response"
        );
        Ok(response)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

async fn api_error(response: Response) -> ApiError {
    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or("Unknown Status").to_owned();
    let detail = match response.text().await {
        Ok(body) => extract_detail(&body),
        Err(e) => {
            tracing::debug!(error = %e, "error body unreadable");
            None
        }
    };
    tracing::warn!(status = status.as_u16(), detail = detail.as_deref().unwrap_or(""), "api error");
    ApiError::Api { status: status.as_u16(), status_text, detail }
}

#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;
