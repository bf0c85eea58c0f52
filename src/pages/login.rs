//! Login page.
//!
//! Submits credentials to the configured hub and, on success, persists the
//! issued session before marking it live in memory. Shows the session-expired
//! notice when rehydration forced a logout.

use leptos::prelude::*;

use crate::net::types::FieldErrors;
use crate::state::endpoint::EndpointState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;

/// Credential form plus the one-slot notice banner.
#[component]
pub fn LoginPage() -> impl IntoView {
    let endpoint = expect_context::<RwSignal<EndpointState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let field_errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        field_errors.set(FieldErrors::default());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::net::api;
            use crate::net::types::LoginRequest;
            use crate::state::session::persist_login;
            use crate::store::{BrowserStore, CredentialStore, keys};

            let Some(url) = endpoint.get_untracked().url else {
                busy.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                let push_token = BrowserStore.get(keys::PUSH_TOKEN).await.ok().flatten();
                let req = LoginRequest {
                    email: &email.get_untracked(),
                    password: &password.get_untracked(),
                    push_token: push_token.as_deref(),
                    device_type: "web",
                };
                match api::login(&url, &req).await {
                    Ok(resp) => {
                        // Persist first: the in-memory session only flips once
                        // the credentials are safely on disk.
                        match persist_login(&BrowserStore, &resp.token, &resp.user).await {
                            Ok(()) => {
                                notices.update(NoticeState::dismiss);
                                session.update(|s| s.set_authenticated(resp.token, resp.user));
                            }
                            Err(err) => {
                                log::warn!("login: failed to persist session: {err}");
                                error.set(Some(
                                    "Could not save your session on this device. Please try again."
                                        .to_owned(),
                                ));
                            }
                        }
                    }
                    Err(err) => {
                        if let Some(fields) = err.field_errors() {
                            field_errors.set(fields.clone());
                        }
                        error.set(Some(err.user_message()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            busy.set(false);
        }
    };

    let first_error = move |list: Vec<String>| list.into_iter().next().unwrap_or_default();

    view! {
        <div class="page login-page">
            <h1>"Sign in"</h1>

            <Show when=move || notices.get().current.is_some()>
                <p class="notice">
                    {move || notices.get().current.map(|n| n.message()).unwrap_or_default()}
                </p>
            </Show>

            <form on:submit=on_submit>
                <div class="field">
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || !field_errors.get().email.is_empty()>
                        <p class="error">{move || first_error(field_errors.get().email)}</p>
                    </Show>
                </div>

                <div class="field">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !field_errors.get().password.is_empty()>
                        <p class="error">{move || first_error(field_errors.get().password)}</p>
                    </Show>
                </div>

                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="hint">
                "Hub: " {move || endpoint.get().url.unwrap_or_default()} " ("
                <a href="/setup">"change"</a> ")"
            </p>
        </div>
    }
}
