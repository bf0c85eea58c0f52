//! Reactive bridge between the navigation gate and the router.
//!
//! Watches the endpoint and session state plus the current location, runs the
//! gate, and issues `replace` navigations for its redirects. Renders nothing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::endpoint::EndpointState;
use crate::state::gate::{GateDecision, GateSnapshot, NavigationGate};
use crate::state::route::Route;
use crate::state::session::SessionState;

/// Evaluates the gate on every state or location change.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let endpoint = expect_context::<RwSignal<EndpointState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    // The gate's redirect memory lives across effect runs, not in a signal:
    // nothing renders from it.
    let mut gate = NavigationGate::default();

    Effect::new(move || {
        let snap = GateSnapshot::capture(&endpoint.get(), &session.get());
        let current = Route::from_path(&location.pathname.get());

        match gate.evaluate(&snap, current) {
            GateDecision::Wait | GateDecision::Stay => {}
            GateDecision::Redirect(target) => {
                navigate(
                    target.path(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });
}
