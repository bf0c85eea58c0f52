//! # beacon
//!
//! Leptos + WASM companion client for a self-hosted notification hub.
//!
//! The interesting part of this crate is the session/navigation gating core
//! under [`state`]: the endpoint configuration and session models, the
//! rehydration flow that revalidates a stored credential whenever the
//! configured endpoint changes, and the pure navigation gate that decides
//! which screen the user may see. Everything browser-specific (HTTP,
//! WebSocket, localStorage, mounting) is gated behind the `csr` feature so
//! the core builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;
