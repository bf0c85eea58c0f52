//! Network boundary: typed HTTP client for the hub API and the live-feed
//! WebSocket client.

pub mod api;
pub mod live_client;
pub mod types;
