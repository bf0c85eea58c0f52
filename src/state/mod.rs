//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The gating core lives here. [`endpoint`] and [`session`] are the two
//! independently loading state machines; [`gate`] is the pure decision layer
//! that maps snapshots of both plus the current route to the screen the user
//! may see. Nothing in this tree touches the browser — persistence and the
//! network come in through the traits in [`crate::store`] and
//! [`crate::net::api`], which keeps every transition testable natively.

pub mod endpoint;
pub mod gate;
pub mod live;
pub mod notice;
pub mod route;
pub mod session;
