use super::live_url;

#[test]
fn live_url_swaps_scheme_and_appends_path() {
    assert_eq!(live_url("https://hub.test"), "wss://hub.test/live");
    assert_eq!(live_url("http://10.0.0.5:8080"), "ws://10.0.0.5:8080/live");
}

#[test]
fn live_url_tolerates_trailing_slash() {
    assert_eq!(live_url("https://hub.test/"), "wss://hub.test/live");
}
