//! User-visible notices raised by the gating core.
//!
//! The core never throws across the navigation boundary; failures resolve
//! into a defined state plus, where the user needs an explanation, one of
//! these.

/// One-slot notice channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
}

impl NoticeState {
    pub fn raise(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// Notices with fixed copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A stored session failed validation and was cleared. Distinct wording
    /// so the user knows this is not a new failure on their part.
    SessionExpired,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::SessionExpired => "Your session has expired. Please log in again.",
        }
    }
}
