//! Live broadcast tab.
//!
//! Renders whatever the background live client last heard; the connection
//! itself is owned by [`crate::net::live_client`].

use leptos::prelude::*;

use crate::state::live::{LiveState, LiveStatus};

/// Connection status plus the most recent broadcast message.
#[component]
pub fn LivePage() -> impl IntoView {
    let live = expect_context::<RwSignal<LiveState>>();

    let status_label = move || match live.get().status {
        LiveStatus::Idle => "Not connected",
        LiveStatus::Connecting => "Connecting...",
        LiveStatus::Connected => "Connected",
    };
    let status_class = move || match live.get().status {
        LiveStatus::Idle => "live-status live-status--idle",
        LiveStatus::Connecting => "live-status live-status--connecting",
        LiveStatus::Connected => "live-status live-status--connected",
    };

    view! {
        <div class="page live-page">
            <h1>"Live"</h1>
            <p class=status_class>{status_label}</p>

            {move || match live.get().last_message {
                Some(message) => view! {
                    <div class="live-message">
                        <span class="live-message__label">"Latest broadcast"</span>
                        <p>{message}</p>
                    </div>
                }
                    .into_any(),
                None => view! {
                    <p class="hint">"No broadcasts received yet."</p>
                }
                    .into_any(),
            }}
        </div>
    }
}
