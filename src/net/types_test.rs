use super::*;

#[test]
fn notification_type_label_title_cases_snake_names() {
    let ty = NotificationType {
        name: "deploy_failed".to_owned(),
        description: None,
    };
    assert_eq!(ty.label(), "Deploy Failed");
}

#[test]
fn notification_type_label_handles_single_words() {
    let ty = NotificationType {
        name: "mentions".to_owned(),
        description: None,
    };
    assert_eq!(ty.label(), "Mentions");
}

#[test]
fn login_request_omits_absent_push_token() {
    let req = LoginRequest {
        email: "a@b.c",
        password: "pw",
        push_token: None,
        device_type: "web",
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("push_token").is_none());
    assert_eq!(json["device_type"], "web");
}

#[test]
fn failure_body_fields_are_all_optional() {
    let body: FailureBody = serde_json::from_str(r"{}").unwrap();
    assert!(body.message.is_none());
    assert!(body.errors.is_none());
}
