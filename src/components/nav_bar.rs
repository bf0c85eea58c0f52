//! Bottom navigation bar for authenticated screens.

use leptos::prelude::*;
use leptos_router::components::A;

/// Navigation links to the three main tabs.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <A href="/" exact=true>
                "Home"
            </A>
            <A href="/live">"Live"</A>
            <A href="/profile">"Profile"</A>
        </nav>
    }
}
