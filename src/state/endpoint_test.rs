use futures::executor::block_on;

use super::*;
use crate::store::testing::MemoryStore;

#[test]
fn finish_load_records_value_and_marks_loaded() {
    let mut state = EndpointState::default();
    assert!(!state.loaded);

    state.finish_load(Some("https://hub.test".to_owned()));
    assert!(state.loaded);
    assert_eq!(state.url.as_deref(), Some("https://hub.test"));
}

#[test]
fn finish_load_with_no_value_still_marks_loaded() {
    let mut state = EndpointState::default();
    state.finish_load(None);
    assert!(state.loaded);
    assert!(state.url.is_none());
}

#[test]
fn finish_load_runs_at_most_once() {
    let mut state = EndpointState::default();
    state.finish_load(Some("https://first.test".to_owned()));
    state.finish_load(Some("https://second.test".to_owned()));
    assert_eq!(state.url.as_deref(), Some("https://first.test"));
}

#[test]
fn set_url_does_not_touch_loaded() {
    let mut state = EndpointState::default();
    state.finish_load(None);
    state.set_url(Some("https://hub.test".to_owned()));
    assert!(state.loaded);
    assert_eq!(state.url.as_deref(), Some("https://hub.test"));

    state.set_url(None);
    assert!(state.loaded);
    assert!(state.url.is_none());
}

#[test]
fn load_reads_the_persisted_key() {
    let store = MemoryStore::with(&[(keys::ENDPOINT_URL, "https://hub.test")]);
    assert_eq!(
        block_on(load_persisted_endpoint(&store)).as_deref(),
        Some("https://hub.test")
    );
}

#[test]
fn load_treats_read_failure_as_no_value() {
    let store = MemoryStore::with(&[(keys::ENDPOINT_URL, "https://hub.test")]);
    store.fail_reads.set(true);
    assert_eq!(block_on(load_persisted_endpoint(&store)), None);
}
