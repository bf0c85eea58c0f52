use futures::executor::block_on;

use super::testing::MemoryStore;
use super::{CredentialStore, keys};

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    block_on(async {
        assert_eq!(store.get(keys::ENDPOINT_URL).await.unwrap(), None);
        store.set(keys::ENDPOINT_URL, "https://hub.test").await.unwrap();
        assert_eq!(
            store.get(keys::ENDPOINT_URL).await.unwrap().as_deref(),
            Some("https://hub.test")
        );
        store.delete(keys::ENDPOINT_URL).await.unwrap();
        assert_eq!(store.get(keys::ENDPOINT_URL).await.unwrap(), None);
    });
}

#[test]
fn write_failure_injection_is_scoped_to_the_key() {
    let store = MemoryStore::default();
    store.fail_writes_for(keys::SESSION_USER);
    block_on(async {
        store.set(keys::SESSION_TOKEN, "tok").await.unwrap();
        assert!(store.set(keys::SESSION_USER, "{}").await.is_err());
    });
    assert!(store.contains(keys::SESSION_TOKEN));
    assert!(!store.contains(keys::SESSION_USER));
}

#[test]
fn read_failure_injection_fails_every_key() {
    let store = MemoryStore::with(&[(keys::SESSION_TOKEN, "tok")]);
    store.fail_reads.set(true);
    assert!(block_on(store.get(keys::SESSION_TOKEN)).is_err());
}
