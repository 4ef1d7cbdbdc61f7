//! Client configuration, resolved once at startup.

use std::time::Duration;

use crate::rate_limit::RateLimitConfig;
use crate::session::SESSION_KEY;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "PETADOPT_API_URL";
/// Environment variable overriding the request timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "PETADOPT_API_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    /// Budget applied to every endpoint key.
    pub rate_limit: RateLimitConfig,
    pub session_key: String,
    /// Location the user is sent to when the session expires.
    pub login_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            rate_limit: RateLimitConfig::default(),
            session_key: SESSION_KEY.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `PETADOPT_API_URL` / `PETADOPT_API_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(&url);
        }
        match lookup(TIMEOUT_ENV).map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(ms)) if ms > 0 => config.timeout = Duration::from_millis(ms),
            Some(_) => tracing::warn!(var = TIMEOUT_ENV, "ignoring invalid timeout"),
            None => {}
        }
        config
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.rate_limit, RateLimitConfig::new(Duration::from_secs(60), 30));
        assert_eq!(config.session_key, "petadopt_user");
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn env_overrides_base_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "https://api.example.org/v1/"),
            (TIMEOUT_ENV, "1500"),
        ]));
        assert_eq!(config.base_url, "https://api.example.org/v1");
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn missing_or_invalid_env_falls_back() {
        let config = ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "  "), (TIMEOUT_ENV, "soon")]));
        assert_eq!(config, ClientConfig::default());
    }
}
