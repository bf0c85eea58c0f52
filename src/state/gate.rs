//! Navigation gate: decides which screen the user may see.
//!
//! Two cooperating gates evaluated in a fixed order — the endpoint gate
//! outranks the auth gate, so a missing endpoint always sends the user to
//! setup regardless of auth state. The decision itself is a pure function;
//! [`NavigationGate`] wraps it with just enough memory to keep re-renders
//! from re-issuing the same redirect.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::endpoint::EndpointState;
use crate::state::route::Route;
use crate::state::session::SessionState;

/// Snapshot of the two state machines the gate decides over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateSnapshot {
    pub endpoint_loaded: bool,
    pub endpoint: Option<String>,
    pub session_loaded: bool,
    pub logged_in: bool,
}

impl GateSnapshot {
    pub fn capture(endpoint: &EndpointState, session: &SessionState) -> Self {
        Self {
            endpoint_loaded: endpoint.loaded,
            endpoint: endpoint.url.clone(),
            session_loaded: session.loaded,
            logged_in: session.is_logged_in(),
        }
    }
}

/// What the gate wants done with the current screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// A prerequisite is still loading; show a spinner, never redirect.
    Wait,
    /// The current route is allowed.
    Stay,
    /// Replace the current route.
    Redirect(Route),
}

/// Route selection, straight from the state table.
fn decide(snap: &GateSnapshot, current: Route) -> GateDecision {
    if !snap.endpoint_loaded {
        return GateDecision::Wait;
    }
    if snap.endpoint.is_none() {
        return if current == Route::Setup {
            GateDecision::Stay
        } else {
            GateDecision::Redirect(Route::Setup)
        };
    }
    if !snap.session_loaded {
        return GateDecision::Wait;
    }
    if !snap.logged_in {
        return if matches!(current, Route::Login | Route::Setup) {
            GateDecision::Stay
        } else {
            GateDecision::Redirect(Route::Login)
        };
    }
    if current == Route::Login {
        return GateDecision::Redirect(Route::Home);
    }
    GateDecision::Stay
}

/// Stateful wrapper enforcing the loop-prevention invariant: at most one
/// redirect per distinct `(endpoint.url, current route)` pair until that
/// pair changes. Re-evaluating with unchanged inputs — a re-render — must
/// not re-issue the redirect.
#[derive(Clone, Debug, Default)]
pub struct NavigationGate {
    last_redirect: Option<(Option<String>, Route)>,
}

impl NavigationGate {
    /// Evaluate the gate for the current snapshot and route.
    pub fn evaluate(&mut self, snap: &GateSnapshot, current: Route) -> GateDecision {
        let decision = decide(snap, current);
        let key = (snap.endpoint.clone(), current);

        match decision {
            GateDecision::Redirect(_) => {
                if self.last_redirect.as_ref() == Some(&key) {
                    // Same pair as the redirect already issued; the router
                    // just has not caught up yet.
                    return GateDecision::Stay;
                }
                self.last_redirect = Some(key);
                decision
            }
            _ => {
                // The pair moved on; drop the memory so a later return to a
                // previously redirected pair can redirect again.
                if self.last_redirect.as_ref() != Some(&key) {
                    self.last_redirect = None;
                }
                decision
            }
        }
    }
}
