//! Root application component with routing, context providers, and the
//! background controllers that drive endpoint and session state.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::pages::{
    home::HomePage, live::LivePage, login::LoginPage, profile::ProfilePage, setup::SetupPage,
};
use crate::state::endpoint::EndpointState;
use crate::state::live::LiveState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides all shared state contexts, starts the controllers, and sets up
/// client-side routing behind the navigation gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let endpoint = RwSignal::new(EndpointState::default());
    let session = RwSignal::new(SessionState::default());
    let notices = RwSignal::new(NoticeState::default());
    let live = RwSignal::new(LiveState::default());

    provide_context(endpoint);
    provide_context(session);
    provide_context(notices);
    provide_context(live);

    start_controllers(endpoint, session, notices, live);

    // Until the endpoint read (and, with an endpoint, the session
    // revalidation) settles, show the loading shell instead of a screen the
    // gate has not approved.
    let ready = move || {
        let ep = endpoint.get();
        ep.loaded && (ep.url.is_none() || session.get().loaded)
    };
    let logged_in = move || session.get().is_logged_in();

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Beacon"/>

        <Router>
            <RouteGuard/>
            <Show when=ready fallback=|| view! { <LoadingScreen/> }>
                <main class="app-shell">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("setup") view=SetupPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("live") view=LivePage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                    </Routes>
                </main>
                <Show when=logged_in>
                    <NavBar/>
                </Show>
            </Show>
        </Router>
    }
}

/// Full-screen spinner shown while startup state settles.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Wire up the background controllers: theme, the initial endpoint read, the
/// endpoint-driven session revalidation, and the live feed.
#[cfg(feature = "csr")]
fn start_controllers(
    endpoint: RwSignal<EndpointState>,
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
    live: RwSignal<LiveState>,
) {
    use crate::net::api::HubApi;
    use crate::net::live_client::spawn_live_client;
    use crate::state::endpoint::load_persisted_endpoint;
    use crate::state::notice::Notice;
    use crate::state::session::{
        RehydrationEffect, apply_rehydration, clear_persisted_session, run_rehydration,
    };
    use crate::store::BrowserStore;
    use crate::util::theme;

    theme::init();

    // Initial endpoint read. `finish_load` ignores any later call, so this
    // runs at most once per process even if the component remounts.
    leptos::task::spawn_local(async move {
        let url = load_persisted_endpoint(&BrowserStore).await;
        endpoint.update(|ep| ep.finish_load(url));
    });

    // The session follows the endpoint: each distinct endpoint value triggers
    // a fresh revalidation, and no endpoint means a settled logged-out
    // session. `last_seen` keeps unrelated endpoint-state writes from
    // re-running a revalidation for the same URL.
    let last_seen: StoredValue<Option<Option<String>>> = StoredValue::new(None);
    Effect::new(move || {
        let ep = endpoint.get();
        if !ep.loaded {
            return;
        }
        if last_seen.get_value().as_ref() == Some(&ep.url) {
            return;
        }
        last_seen.set_value(Some(ep.url.clone()));

        match ep.url {
            None => {
                session.update(|s| {
                    s.clear();
                    s.loaded = true;
                });
            }
            Some(url) => {
                session.update(SessionState::begin_reload);
                leptos::task::spawn_local(async move {
                    let outcome = run_rehydration(&BrowserStore, &HubApi, &url).await;
                    // The endpoint may have changed while the request was in
                    // flight; apply_rehydration discards the stale outcome.
                    let current = endpoint.get_untracked().url;
                    let mut effect = RehydrationEffect::Discarded;
                    session.update(|s| {
                        effect = apply_rehydration(s, current.as_deref(), outcome);
                    });
                    if effect == RehydrationEffect::Expired {
                        notices.update(|n| n.raise(Notice::SessionExpired));
                        clear_persisted_session(&BrowserStore).await;
                        endpoint.update(|ep| ep.set_url(None));
                    }
                });
            }
        }
    });

    spawn_live_client(endpoint, session, live);
}

#[cfg(not(feature = "csr"))]
fn start_controllers(
    endpoint: RwSignal<EndpointState>,
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
    live: RwSignal<LiveState>,
) {
    let _ = (endpoint, session, notices, live);
}
