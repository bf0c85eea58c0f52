use super::*;

#[test]
fn parse_broadcast_extracts_the_message() {
    assert_eq!(
        parse_broadcast(r#"{"message":"deploy finished"}"#).as_deref(),
        Some("deploy finished")
    );
}

#[test]
fn parse_broadcast_rejects_other_shapes() {
    assert_eq!(parse_broadcast(r#"{"note":"hi"}"#), None);
    assert_eq!(parse_broadcast(r#"{"message":42}"#), None);
    assert_eq!(parse_broadcast("not json"), None);
}
