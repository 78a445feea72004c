use log::warn;
use roster_business::{BusinessConfig, UserListState, UsersDispatcher, Viewer};

/// The main application state.
pub struct State {
    /// Who is looking at the app. Owned by the session, only read by the views.
    pub viewer: Viewer,
    /// The users list shown by the users panel.
    pub users: UserListState,
    /// Runs the users panel's backend calls.
    pub dispatcher: UsersDispatcher,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default(), Viewer::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig, viewer: Viewer) -> Self {
        Self {
            viewer,
            users: UserListState::new(),
            dispatcher: UsersDispatcher::new(config),
        }
    }

    /// Config and viewer from the process environment, falling back to the build defaults.
    ///
    /// The web build has no environment and takes the viewer from the page's query string.
    pub fn from_env() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|e| {
            warn!("{e}, using build defaults");
            BusinessConfig::default()
        });
        Self::new(config, page_viewer())
    }

    pub fn test(base_url: String, viewer: Viewer) -> Self {
        Self::new(BusinessConfig::new(base_url), viewer)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn page_viewer() -> Viewer {
    Viewer::from_env().unwrap_or_else(|e| {
        warn!("{e}, continuing as anonymous");
        Viewer::anonymous()
    })
}

#[cfg(target_arch = "wasm32")]
fn page_viewer() -> Viewer {
    let search = web_sys::window().and_then(|window| window.location().search().ok());
    match search {
        Some(query) => Viewer::from_query(&query),
        None => {
            warn!("Page location is unavailable, continuing as anonymous");
            Viewer::anonymous()
        }
    }
}
