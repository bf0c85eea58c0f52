//! Small browser utilities.

pub mod theme;
