//! Authenticated session state and the rehydration flow.
//!
//! Rehydration restores a session from the credential store and validates it
//! against the configured endpoint. It re-runs on every endpoint change, and
//! each attempt is tagged with the endpoint it targets so a completion that
//! raced past a newer endpoint change can be discarded instead of clobbering
//! fresher state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::SessionApi;
use crate::net::types::User;
use crate::store::{CredentialStore, StoreError, keys};

/// The authenticated identity held by the client.
///
/// `loaded` is scoped to the current endpoint value: it drops back to false
/// whenever the endpoint changes and a new validation round-trip begins, and
/// becomes true when that round-trip settles either way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loaded: bool,
}

impl SessionState {
    /// True exactly when both a token and a user are held.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Mark the session as reloading for a new endpoint value.
    pub fn begin_reload(&mut self) {
        self.loaded = false;
    }

    /// Install an authenticated session.
    pub fn set_authenticated(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loaded = true;
    }

    /// Drop the in-memory identity. Leaves `loaded` alone; callers decide
    /// whether the clearing settles the current attempt.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// What a rehydration attempt found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rehydration {
    /// No token on disk — a cold start with no prior session.
    NoStoredSession,
    /// The hub validated the stored token and returned the account.
    Restored { token: String, user: User },
    /// The stored token was rejected, unverifiable, or the payload was
    /// malformed.
    Rejected,
}

/// A settled rehydration attempt, tagged with the endpoint it ran against.
/// The tag is what lets a newer endpoint discard a stale completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RehydrationOutcome {
    pub endpoint: String,
    pub rehydration: Rehydration,
}

/// How an outcome was applied to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RehydrationEffect {
    /// The outcome targeted an endpoint that is no longer current; state was
    /// left untouched.
    Discarded,
    /// The session settled, restored or cleanly logged out.
    Settled,
    /// The stored credential was invalid. The session settled logged out and
    /// the caller must clear the persisted keys and surface the
    /// session-expired notice.
    Expired,
}

/// Run one validation round-trip for `endpoint`.
///
/// With no stored token this settles immediately and issues no network call.
/// With a token, any failure — network, non-2xx, malformed payload — marks
/// the session invalid: fail closed, and never silently retry a cached
/// credential. A token read failure counts as "no token"; if one was
/// actually there, the user re-authenticates, which is the safe direction.
pub async fn run_rehydration<S, A>(store: &S, api: &A, endpoint: &str) -> RehydrationOutcome
where
    S: CredentialStore,
    A: SessionApi,
{
    let token = match store.get(keys::SESSION_TOKEN).await {
        Ok(Some(token)) => token,
        Ok(None) => {
            return RehydrationOutcome {
                endpoint: endpoint.to_owned(),
                rehydration: Rehydration::NoStoredSession,
            };
        }
        Err(err) => {
            log::warn!("session token read failed: {err}");
            return RehydrationOutcome {
                endpoint: endpoint.to_owned(),
                rehydration: Rehydration::NoStoredSession,
            };
        }
    };

    let rehydration = match api.fetch_me(endpoint, &token).await {
        Ok(user) => Rehydration::Restored { token, user },
        Err(err) => {
            log::warn!("stored session rejected: {err}");
            Rehydration::Rejected
        }
    };

    RehydrationOutcome {
        endpoint: endpoint.to_owned(),
        rehydration,
    }
}

/// Apply a settled attempt to the session, discarding stale completions.
///
/// `current_endpoint` is the endpoint value the app holds *now*; an outcome
/// tagged with anything else must not overwrite state derived from a newer
/// endpoint.
pub fn apply_rehydration(
    session: &mut SessionState,
    current_endpoint: Option<&str>,
    outcome: RehydrationOutcome,
) -> RehydrationEffect {
    if current_endpoint != Some(outcome.endpoint.as_str()) {
        return RehydrationEffect::Discarded;
    }

    match outcome.rehydration {
        Rehydration::NoStoredSession => {
            session.clear();
            session.loaded = true;
            RehydrationEffect::Settled
        }
        Rehydration::Restored { token, user } => {
            session.set_authenticated(token, user);
            RehydrationEffect::Settled
        }
        Rehydration::Rejected => {
            session.clear();
            session.loaded = true;
            RehydrationEffect::Expired
        }
    }
}

/// Persist a freshly issued token and user.
///
/// Both writes must succeed before the caller may mark the session logged
/// in; on failure the caller leaves in-memory state untouched. A crash
/// between the two writes leaves a half-written pair on disk, which the next
/// rehydration resolves by validating server-side.
pub async fn persist_login<S: CredentialStore>(
    store: &S,
    token: &str,
    user: &User,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(user).map_err(|_| StoreError::Failed {
        op: "encode",
        key: keys::SESSION_USER.to_owned(),
    })?;
    store.set(keys::SESSION_TOKEN, token).await?;
    store.set(keys::SESSION_USER, &encoded).await?;
    Ok(())
}

/// Best-effort removal of every session-related key, the endpoint included:
/// a logged-out client goes back through setup.
///
/// Logout must always succeed from the user's perspective, so deletion
/// failures are logged for the error reporter and swallowed.
pub async fn clear_persisted_session<S: CredentialStore>(store: &S) {
    for key in [
        keys::SESSION_TOKEN,
        keys::SESSION_USER,
        keys::PUSH_TOKEN,
        keys::ENDPOINT_URL,
    ] {
        if let Err(err) = store.delete(key).await {
            log::warn!("logout: failed to delete {key}: {err}");
        }
    }
}
