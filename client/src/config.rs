//! Client configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::util::metrics::ZeroDivisionPolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30;
/// Polled values must never be served staler than one poll period.
pub const MAX_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_SESSION_DIR: &str = ".pea-tracker";
pub const DEFAULT_SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without trailing slash, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// JSON file backing the session store.
    pub session_file: PathBuf,
    /// Refresh period for polled dashboard cards.
    pub poll_interval: Duration,
    /// TTL of the shared response cache; `None` disables caching.
    pub cache_ttl: Option<Duration>,
    /// Whole-request timeout; `None` means wait indefinitely.
    pub request_timeout: Option<Duration>,
    pub zero_division: ZeroDivisionPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            session_file: default_session_file(std::env::var("HOME").unwrap_or_default()),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            cache_ttl: cache_ttl_from_secs(DEFAULT_CACHE_TTL_SECS),
            request_timeout: None,
            zero_division: ZeroDivisionPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `PEA_API_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `PEA_SESSION_FILE`: default `$HOME/.pea-tracker/session.json`
    /// - `PEA_POLL_INTERVAL_SECS`: default 60
    /// - `PEA_CACHE_TTL_SECS`: default 30, `0` disables, clamped to 60
    /// - `PEA_REQUEST_TIMEOUT_SECS`: unset means no timeout
    /// - `PEA_ZERO_DIVISION`: `zero` (default) or `na`
    ///
    /// # Errors
    ///
    /// Returns an error message when `PEA_ZERO_DIVISION` holds an unknown value.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let base_url = normalize_base_url(&env_string("PEA_API_BASE_URL").unwrap_or(defaults.base_url));
        let session_file = env_string("PEA_SESSION_FILE").map_or(defaults.session_file, PathBuf::from);
        let poll_interval = Duration::from_secs(env_parse("PEA_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS).max(1));
        let cache_ttl = cache_ttl_from_secs(env_parse("PEA_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS));
        let request_timeout = match env_parse("PEA_REQUEST_TIMEOUT_SECS", 0_u64) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let zero_division = parse_zero_division(env_string("PEA_ZERO_DIVISION").as_deref())?;

        Ok(Self { base_url, session_file, poll_interval, cache_ttl, request_timeout, zero_division })
    }
}

/// Trim whitespace and trailing slashes so paths can be appended verbatim.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Convert a TTL in seconds to the cache setting, clamping to one poll period.
#[must_use]
pub fn cache_ttl_from_secs(secs: u64) -> Option<Duration> {
    match secs {
        0 => None,
        secs => Some(Duration::from_secs(secs.min(MAX_CACHE_TTL_SECS))),
    }
}

/// Parse the zero-division policy name.
///
/// # Errors
///
/// Returns an error message for names other than `zero` and `na`.
pub fn parse_zero_division(raw: Option<&str>) -> Result<ZeroDivisionPolicy, String> {
    match raw.unwrap_or("zero") {
        "zero" | "0" => Ok(ZeroDivisionPolicy::Zero),
        "na" | "n/a" => Ok(ZeroDivisionPolicy::NotAvailable),
        other => Err(format!("unknown PEA_ZERO_DIVISION: {other} (expected 'zero' or 'na')")),
    }
}

fn default_session_file(home: String) -> PathBuf {
    let mut path = if home.is_empty() { PathBuf::from(".") } else { PathBuf::from(home) };
    path.push(DEFAULT_SESSION_DIR);
    path.push(DEFAULT_SESSION_FILE);
    path
}

fn env_string(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match env_string(key).map(|v| v.trim().parse::<T>()) {
        Some(Ok(v)) => v,
        _ => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
