//! The authenticated actor looking at the users view.
//!
//! The viewer is supplied by whoever owns the session (login flow, embedding
//! app, tests) and passed into the view explicitly. The view never mutates it.
//! Native builds read it from the environment, the web build from the page URL.

use serde::Deserialize;
use std::env::vars;
use ustr::Ustr;

use crate::ConfigError;

#[derive(Debug, Default, Deserialize)]
struct RawViewer {
    roster_viewer_id: Option<String>,
    roster_viewer_admin: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub id: Ustr,
    pub is_admin: bool,
}

impl Viewer {
    pub fn admin(id: impl AsRef<str>) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            is_admin: true,
        }
    }

    pub fn member(id: impl AsRef<str>) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            is_admin: false,
        }
    }

    /// A viewer with no identity and no capabilities.
    pub fn anonymous() -> Self {
        Self::member("")
    }

    /// Viewer named by `ROSTER_VIEWER_ID` and `ROSTER_VIEWER_ADMIN`.
    ///
    /// Without an id the viewer is anonymous, whatever the admin flag says.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    /// Viewer named by a page query string such as `?viewer_id=root&viewer_admin=true`.
    ///
    /// This is how the web build learns who is looking, since a browser has no
    /// process environment. `viewer_admin` accepts `true` or `1`. Unknown
    /// parameters are ignored, and without an id the viewer is anonymous.
    pub fn from_query(query: &str) -> Self {
        let mut id = None;
        let mut is_admin = false;

        for pair in query.trim_start_matches('?').split('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(&value.replace('+', " "))
                .map(|v| v.into_owned())
                .unwrap_or_default();
            match name {
                "viewer_id" => id = Some(value).filter(|v| !v.is_empty()),
                "viewer_admin" => is_admin = matches!(value.as_str(), "true" | "1"),
                _ => {}
            }
        }

        match id {
            Some(id) if is_admin => Self::admin(id),
            Some(id) => Self::member(id),
            None => Self::anonymous(),
        }
    }

    fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawViewer =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;

        Ok(match raw.roster_viewer_id.filter(|id| !id.is_empty()) {
            Some(id) if raw.roster_viewer_admin.unwrap_or(false) => Self::admin(id),
            Some(id) => Self::member(id),
            None => Self::anonymous(),
        })
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::anonymous()
    }
}
