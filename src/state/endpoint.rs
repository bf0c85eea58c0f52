//! Configured backend endpoint and its load status.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use crate::store::{CredentialStore, keys};

/// Where the client should talk to, and whether the initial persistence read
/// has completed.
///
/// `url` stays `None` until the read finds a value or the user saves one.
/// `loaded` flips false→true exactly once per process lifetime, when the
/// initial read completes — regardless of its outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointState {
    pub url: Option<String>,
    pub loaded: bool,
}

impl EndpointState {
    /// Record the result of the initial persistence read. Later calls are
    /// ignored; the load happens once per process lifetime.
    pub fn finish_load(&mut self, url: Option<String>) {
        if self.loaded {
            return;
        }
        self.url = url;
        self.loaded = true;
    }

    /// Update the in-memory endpoint. Persistence is the caller's concern:
    /// the setup screen persists before calling this, and logout deletes the
    /// key and then clears with `None`.
    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }
}

/// Read the persisted endpoint. A read failure is treated as "no value" —
/// the user is sent through setup rather than shown an error they cannot
/// act on.
pub async fn load_persisted_endpoint<S: CredentialStore>(store: &S) -> Option<String> {
    match store.get(keys::ENDPOINT_URL).await {
        Ok(url) => url,
        Err(err) => {
            log::warn!("endpoint read failed, starting unconfigured: {err}");
            None
        }
    }
}
