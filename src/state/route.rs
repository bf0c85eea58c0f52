//! Screens the client can show.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Route enum so the gate can reason about screens without string
/// comparisons; the router itself still works in paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// One-time endpoint configuration.
    Setup,
    /// Credential entry.
    Login,
    /// Protected landing screen.
    Home,
    /// Protected live broadcast feed.
    Live,
    /// Protected profile and notification preferences.
    Profile,
    /// Anything unrecognized; rendered by the router fallback.
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/setup" => Route::Setup,
            "/login" => Route::Login,
            "/live" => Route::Live,
            "/profile" => Route::Profile,
            _ => Route::NotFound,
        }
    }

    /// Path for navigation. `NotFound` is never a redirect target; it maps
    /// home for completeness.
    pub fn path(self) -> &'static str {
        match self {
            Route::Setup => "/setup",
            Route::Login => "/login",
            Route::Home | Route::NotFound => "/",
            Route::Live => "/live",
            Route::Profile => "/profile",
        }
    }
}
