//! Endpoint setup page.
//!
//! First screen on a fresh install: asks for the hub URL, persists it, and
//! publishes it to [`EndpointState`]. Also reachable later to point the app
//! at a different hub.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::state::endpoint::EndpointState;

/// Normalize a typed hub URL, rejecting anything that is not http(s).
fn normalize_endpoint(input: &str) -> Option<String> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_owned())
    } else {
        None
    }
}

/// Hub URL entry form.
#[component]
pub fn SetupPage() -> impl IntoView {
    let endpoint = expect_context::<RwSignal<EndpointState>>();

    let input = RwSignal::new(endpoint.get_untracked().url.unwrap_or_default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_save = move |_| {
        let Some(url) = normalize_endpoint(&input.get()) else {
            error.set(Some(
                "Enter the full hub address, including http:// or https://.".to_owned(),
            ));
            return;
        };
        error.set(None);
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::store::{BrowserStore, CredentialStore, keys};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match BrowserStore.set(keys::ENDPOINT_URL, &url).await {
                    Ok(()) => {
                        endpoint.update(|ep| ep.set_url(Some(url)));
                        navigate(
                            "/",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => {
                        log::warn!("setup: failed to save endpoint: {err}");
                        error.set(Some("Could not save the address. Please try again.".to_owned()));
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &url;
            saving.set(false);
        }
    };

    view! {
        <div class="page setup-page">
            <h1>"Connect to a hub"</h1>
            <p class="hint">"Enter the address of the notification hub this device should use."</p>

            <div class="field">
                <label for="endpoint-url">"Hub address"</label>
                <input
                    id="endpoint-url"
                    type="url"
                    placeholder="https://hub.example.com"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <button class="btn btn--primary" disabled=move || saving.get() on:click=on_save>
                {move || if saving.get() { "Saving..." } else { "Save and continue" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_endpoint;

    #[test]
    fn accepts_http_and_https_and_strips_trailing_slashes() {
        assert_eq!(
            normalize_endpoint("https://hub.example.com/").as_deref(),
            Some("https://hub.example.com")
        );
        assert_eq!(
            normalize_endpoint("  http://10.0.0.5:8080  ").as_deref(),
            Some("http://10.0.0.5:8080")
        );
    }

    #[test]
    fn rejects_other_schemes_and_bare_hosts() {
        assert_eq!(normalize_endpoint("hub.example.com"), None);
        assert_eq!(normalize_endpoint("ftp://hub.example.com"), None);
        assert_eq!(normalize_endpoint(""), None);
    }
}
