//! Live broadcast feed state.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

/// Connection status and the most recent broadcast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveState {
    pub status: LiveStatus,
    pub last_message: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LiveStatus {
    /// Not connected; either logged out or no endpoint configured yet.
    #[default]
    Idle,
    Connecting,
    Connected,
}

/// Extract the display message from a broadcast payload (`{"message": ...}`).
pub fn parse_broadcast(text: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}
