//! Top-level screens, one per route.

pub mod home;
pub mod live;
pub mod login;
pub mod profile;
pub mod setup;
