//! Home tab.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Landing screen for a signed-in user.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="page home-page">
            <h1>
                "Welcome"
                {move || {
                    session.get().user.map(|u| format!(", {}", u.name)).unwrap_or_default()
                }}
            </h1>
            <p class="hint">
                "You are connected to your notification hub. Check the live tab for broadcasts."
            </p>
        </div>
    }
}
