//! WebSocket client for the hub's broadcast feed.
//!
//! Connects to `{endpoint}/live` while an endpoint is configured and a
//! session is active, feeds incoming broadcasts into [`LiveState`], and
//! reconnects with exponential backoff. Everything but the URL derivation
//! needs a browser, so the loop is behind the `csr` feature.

#[cfg(test)]
#[path = "live_client_test.rs"]
mod live_client_test;

#[cfg(feature = "csr")]
use leptos::prelude::{GetUntracked, RwSignal, Update};

#[cfg(feature = "csr")]
use crate::state::endpoint::EndpointState;
#[cfg(feature = "csr")]
use crate::state::live::{LiveState, LiveStatus};
#[cfg(feature = "csr")]
use crate::state::session::SessionState;

/// Derive the WebSocket URL from the configured HTTP endpoint.
pub fn live_url(endpoint: &str) -> String {
    let base = endpoint.trim_end_matches('/');
    let ws = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{base}")
    };
    format!("{ws}/live")
}

/// Spawn the live-feed lifecycle as a local async task.
#[cfg(feature = "csr")]
pub fn spawn_live_client(
    endpoint: RwSignal<EndpointState>,
    session: RwSignal<SessionState>,
    live: RwSignal<LiveState>,
) {
    leptos::task::spawn_local(live_loop(endpoint, session, live));
}

#[cfg(feature = "csr")]
async fn live_loop(
    endpoint: RwSignal<EndpointState>,
    session: RwSignal<SessionState>,
    live: RwSignal<LiveState>,
) {
    use std::time::Duration;

    let mut backoff_ms: u32 = 1_000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        let target = {
            let ep = endpoint.get_untracked();
            match ep.url {
                Some(url) if session.get_untracked().is_logged_in() => Some(url),
                _ => None,
            }
        };

        let Some(url) = target else {
            live.update(|l| l.status = LiveStatus::Idle);
            gloo_timers::future::sleep(Duration::from_millis(1_000)).await;
            backoff_ms = 1_000;
            continue;
        };

        live.update(|l| l.status = LiveStatus::Connecting);
        match listen(&live_url(&url), live).await {
            Ok(()) => {
                leptos::logging::log!("live feed disconnected cleanly");
                backoff_ms = 1_000;
            }
            Err(e) => {
                leptos::logging::warn!("live feed error: {e}");
            }
        }
        live.update(|l| l.status = LiveStatus::Idle);

        gloo_timers::future::sleep(Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Listen on an open socket until it closes or errors.
// TODO: tear the socket down when the session ends instead of waiting for
// the server to drop it.
#[cfg(feature = "csr")]
async fn listen(url: &str, live: RwSignal<LiveState>) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    live.update(|l| l.status = LiveStatus::Connected);

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(message) = crate::state::live::parse_broadcast(&text) {
                    live.update(|l| l.last_message = Some(message));
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}
