//! Where the backend lives and which session it is called with.
//!
//! The origin defaults to a per-deployment URL picked by the `env_*` cargo
//! features, and can be overridden at runtime through `ROSTER_*` variables.

use serde::Deserialize;
use std::env::vars;

/// Overrides read from the process environment.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_backend_url: Option<String>,
    roster_session_cookie: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read roster configuration from environment: {0}")]
    Env(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Backend origin, e.g. `https://roster.example.edu`. Empty means same-origin.
    pub backend_url: String,
    /// Session cookie sent with every backend call.
    ///
    /// This is the native stand-in for a browser's `credentials: 'include'`.
    pub session_cookie: Option<String>,
}

impl BusinessConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            session_cookie: None,
        }
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Build-time defaults overlaid with `ROSTER_BACKEND_URL` and `ROSTER_SESSION_COOKIE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;

        let mut config = Self::default();
        if let Some(url) = raw.roster_backend_url {
            config.backend_url = url;
        }
        if let Some(cookie) = raw.roster_session_cookie.filter(|c| !c.is_empty()) {
            config.session_cookie = Some(cookie);
        }
        Ok(config)
    }

    fn origin(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    /// `GET` endpoint listing user records.
    pub fn users_url(&self) -> String {
        format!("{}/server/student/getusers", self.origin())
    }

    /// `DELETE` endpoint for a single user record.
    pub fn delete_url(&self, id: &str) -> String {
        format!(
            "{}/server/student/delete/{}",
            self.origin(),
            urlencoding::encode(id)
        )
    }

    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            backend_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://roster-test.example.edu".to_owned()
            } else if cfg!(feature = "env_pr") {
                "https://roster-pr.example.edu".to_owned()
            } else if cfg!(feature = "env_internal") {
                "https://roster-internal.example.edu".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://roster-nightly.example.edu".to_owned()
            } else {
                "https://roster.example.edu".to_owned()
            },
            session_cookie: None,
        }
    }
}
