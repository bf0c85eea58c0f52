//! Secure key-value persistence boundary.
//!
//! The app treats persistence as an external collaborator: a durable string
//! store with async get/set/delete, scoped by key. In the browser this is
//! backed by localStorage; tests use an in-memory store with failure
//! injection. There is no transactional guarantee across keys — callers must
//! tolerate partial writes, and rehydration validates the stored token
//! server-side anyway.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use thiserror::Error;

/// Keys used in the credential store.
pub mod keys {
    /// Configured backend base URL.
    pub const ENDPOINT_URL: &str = "endpoint-url";
    /// Bearer token for the authenticated session.
    pub const SESSION_TOKEN: &str = "session-token";
    /// JSON-encoded [`crate::net::types::User`].
    pub const SESSION_USER: &str = "session-user";
    /// Push token stored by the platform notification layer.
    pub const PUSH_TOKEN: &str = "push-token";
    /// Light/dark preference.
    pub const THEME: &str = "theme";
}

/// Errors from the credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("secure store unavailable")]
    Unavailable,
    #[error("secure store {op} failed for key {key}")]
    Failed { op: &'static str, key: String },
}

/// Durable key→string storage, the client's only persistence surface.
#[allow(async_fn_in_trait)] // single-threaded WASM app, no Send bounds wanted
pub trait CredentialStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Credential store backed by browser localStorage.
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl CredentialStore for BrowserStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|_| StoreError::Failed {
            op: "read",
            key: key.to_owned(),
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Failed {
                op: "write",
                key: key.to_owned(),
            })
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StoreError::Failed {
                op: "delete",
                key: key.to_owned(),
            })
    }
}

#[cfg(not(feature = "csr"))]
impl CredentialStore for BrowserStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory store for tests, with per-operation failure injection.

    use std::cell::{Cell, RefCell};
    use std::collections::{BTreeMap, BTreeSet};

    use super::{CredentialStore, StoreError};

    #[derive(Default)]
    pub struct MemoryStore {
        map: RefCell<BTreeMap<String, String>>,
        pub fail_reads: Cell<bool>,
        pub fail_deletes: Cell<bool>,
        write_failures: RefCell<BTreeSet<String>>,
    }

    impl MemoryStore {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            let store = Self::default();
            {
                let mut map = store.map.borrow_mut();
                for (key, value) in entries {
                    map.insert((*key).to_owned(), (*value).to_owned());
                }
            }
            store
        }

        /// Make writes to `key` fail.
        pub fn fail_writes_for(&self, key: &str) {
            self.write_failures.borrow_mut().insert(key.to_owned());
        }

        /// Make every write fail.
        pub fn fail_all_writes(&self) {
            self.write_failures.borrow_mut().insert("*".to_owned());
        }

        pub fn contains(&self, key: &str) -> bool {
            self.map.borrow().contains_key(key)
        }

        pub fn value(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }
    }

    impl CredentialStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_reads.get() {
                return Err(StoreError::Failed {
                    op: "read",
                    key: key.to_owned(),
                });
            }
            Ok(self.map.borrow().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            let failures = self.write_failures.borrow();
            if failures.contains("*") || failures.contains(key) {
                return Err(StoreError::Failed {
                    op: "write",
                    key: key.to_owned(),
                });
            }
            drop(failures);
            self.map.borrow_mut().insert(key.to_owned(), value.to_owned());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), StoreError> {
            if self.fail_deletes.get() {
                return Err(StoreError::Failed {
                    op: "delete",
                    key: key.to_owned(),
                });
            }
            self.map.borrow_mut().remove(key);
            Ok(())
        }
    }
}
