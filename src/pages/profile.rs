//! Profile tab: account details, notification preferences, theme, logout.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::types::NotificationType;
use crate::state::endpoint::EndpointState;
use crate::state::live::LiveState;
use crate::state::session::SessionState;
use crate::util::theme;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let endpoint = expect_context::<RwSignal<EndpointState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let live = expect_context::<RwSignal<LiveState>>();

    let types = RwSignal::new(Vec::<NotificationType>::new());
    let prefs = RwSignal::new(BTreeMap::<String, bool>::new());
    let prefs_error = RwSignal::new(Option::<String>::None);
    let dark = RwSignal::new(theme::current_is_dark());
    let logging_out = RwSignal::new(false);

    // Load the preference list once on mount.
    #[cfg(feature = "csr")]
    {
        use crate::net::api;
        use crate::store::{BrowserStore, CredentialStore, keys};

        if let (Some(url), Some(token)) = {
            let s = session.get_untracked();
            (endpoint.get_untracked().url, s.token)
        } {
            leptos::task::spawn_local(async move {
                match api::fetch_notification_types(&url).await {
                    Ok(list) => types.set(list),
                    Err(err) => {
                        prefs_error.set(Some(err.user_message()));
                        return;
                    }
                }
                let push_token = BrowserStore.get(keys::PUSH_TOKEN).await.ok().flatten();
                match api::fetch_preferences(&url, &token, push_token.as_deref()).await {
                    Ok(map) => prefs.set(map),
                    Err(err) => prefs_error.set(Some(err.user_message())),
                }
            });
        }
    }

    let on_toggle_pref = move |key: String| {
        let was_enabled = prefs.get_untracked().get(&key).copied().unwrap_or(true);
        // Optimistic flip; reverted below if the hub rejects it.
        prefs.update(|map| {
            map.insert(key.clone(), !was_enabled);
        });

        #[cfg(feature = "csr")]
        {
            use crate::net::api;
            use crate::store::{BrowserStore, CredentialStore, keys};

            let (url, token) = {
                let s = session.get_untracked();
                (endpoint.get_untracked().url, s.token)
            };
            let (Some(url), Some(token)) = (url, token) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let push_token = BrowserStore.get(keys::PUSH_TOKEN).await.ok().flatten();
                if let Err(err) =
                    api::update_preference(&url, &token, push_token.as_deref(), &key, !was_enabled)
                        .await
                {
                    log::warn!("profile: preference update rejected: {err}");
                    prefs.update(|map| {
                        map.insert(key, was_enabled);
                    });
                    prefs_error.set(Some(err.user_message()));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    };

    let on_toggle_theme = move |_| {
        dark.set(theme::toggle(dark.get_untracked()));
    };

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::net::api;
            use crate::state::session::clear_persisted_session;
            use crate::store::{BrowserStore, CredentialStore, keys};

            let (url, token) = {
                let s = session.get_untracked();
                (endpoint.get_untracked().url, s.token)
            };
            leptos::task::spawn_local(async move {
                // Tell the hub first, but never let a failure keep the user
                // signed in locally.
                if let (Some(url), Some(token)) = (url, token) {
                    let push_token = BrowserStore.get(keys::PUSH_TOKEN).await.ok().flatten();
                    if let Err(err) = api::logout(&url, &token, push_token.as_deref()).await {
                        log::warn!("logout: hub rejected the request: {err}");
                    }
                }
                clear_persisted_session(&BrowserStore).await;
                live.set(LiveState::default());
                session.update(|s| {
                    s.clear();
                    s.loaded = true;
                });
                // Dropping the endpoint sends the gate back to setup.
                endpoint.update(|ep| ep.set_url(None));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = live;
            logging_out.set(false);
        }
    };

    view! {
        <div class="page profile-page">
            <h1>"Profile"</h1>

            <section class="profile-card">
                {move || {
                    session
                        .get()
                        .user
                        .map(|u| {
                            view! {
                                <p class="profile-card__name">{u.name}</p>
                                <p class="profile-card__email">{u.email}</p>
                            }
                        })
                }}
                <p class="hint">"Hub: " {move || endpoint.get().url.unwrap_or_default()}</p>
            </section>

            <section class="profile-prefs">
                <h2>"Notifications"</h2>
                <Show when=move || prefs_error.get().is_some()>
                    <p class="error">{move || prefs_error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !types.get().is_empty()
                    fallback=|| view! { <p class="hint">"Loading preferences..."</p> }
                >
                    <ul class="profile-prefs__list">
                        <For
                            each=move || types.get()
                            key=|ty| ty.name.clone()
                            let:ty
                        >
                            {
                                let key = ty.name.clone();
                                let toggle_key = ty.name.clone();
                                // Unknown keys default to enabled, matching the hub.
                                let enabled = Signal::derive(move || {
                                    prefs.get().get(&key).copied().unwrap_or(true)
                                });
                                view! {
                                    <li class="profile-prefs__row">
                                        <div>
                                            <span class="profile-prefs__label">{ty.label()}</span>
                                            {ty
                                                .description
                                                .clone()
                                                .map(|d| view! { <p class="hint">{d}</p> })}
                                        </div>
                                        <button
                                            class="btn"
                                            class=("btn--on", move || enabled.get())
                                            on:click=move |_| on_toggle_pref(toggle_key.clone())
                                        >
                                            {move || if enabled.get() { "On" } else { "Off" }}
                                        </button>
                                    </li>
                                }
                            }
                        </For>
                    </ul>
                </Show>
            </section>

            <section class="profile-appearance">
                <h2>"Appearance"</h2>
                <button class="btn" on:click=on_toggle_theme>
                    {move || if dark.get() { "Switch to light theme" } else { "Switch to dark theme" }}
                </button>
            </section>

            <section class="profile-actions">
                <button class="btn btn--danger" disabled=move || logging_out.get() on:click=on_logout>
                    {move || if logging_out.get() { "Signing out..." } else { "Sign out" }}
                </button>
            </section>
        </div>
    }
}
