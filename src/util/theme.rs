//! Theme initialization and toggle.
//!
//! Reads the stored theme from `localStorage` and applies the `.dark` class
//! to the `<html>` element. Toggle writes back to `localStorage` and updates
//! the class. Requires a browser environment.

#[cfg(feature = "csr")]
use crate::store::keys;

/// Read the stored theme preference.
///
/// Returns `true` for dark. Falls back to the system preference when nothing
/// is stored.
pub fn current_is_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(keys::THEME) {
                return val == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if dark {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}

/// Apply the stored preference on startup.
pub fn init() {
    apply(current_is_dark());
}

/// Toggle the theme and persist the new preference.
pub fn toggle(dark: bool) -> bool {
    let next = !dark;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(keys::THEME, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
