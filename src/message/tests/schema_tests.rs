//! Unit tests for schema validation of message bodies.

use crate::message::domain::{FasMessage, MemberSponsorV1, UserCreateV1, UserUpdateV1};
use crate::message::error::SchemaValidationError;
use crate::message::schema::SCHEMA_ID;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::create(&UserCreateV1::new("dudemcpants", "testuser") as &dyn FasMessage)]
#[case::update(
    &UserUpdateV1::new("dudemcpants", "testuser", ["firstname", "lastname"]) as &dyn FasMessage
)]
#[case::sponsor(&MemberSponsorV1::new("dudemcpants", "testuser", "developers") as &dyn FasMessage)]
fn constructed_bodies_validate(#[case] message: &dyn FasMessage) {
    assert!(message.validate().is_ok());
}

#[test]
fn create_body_missing_user_is_rejected() {
    let message = UserCreateV1::from_body(json!({"msg": {"agent": "dudemcpants"}}));
    let error = message.validate().expect_err("missing 'user' must fail");
    assert!(matches!(error, SchemaValidationError::Mismatch { .. }));
    assert!(error.to_string().contains("fas.user.create"));
}

#[test]
fn update_body_missing_fields_is_rejected() {
    let message = UserUpdateV1::from_body(json!({
        "msg": {"agent": "dudemcpants", "user": "testuser"}
    }));
    assert!(message.validate().is_err());
}

#[test]
fn sponsor_body_missing_group_is_rejected() {
    let message = MemberSponsorV1::from_body(json!({
        "msg": {"agent": "dudemcpants", "user": "testuser"}
    }));
    assert!(message.validate().is_err());
}

#[test]
fn body_without_msg_object_is_rejected() {
    let message = UserCreateV1::from_body(json!({"agent": "dudemcpants"}));
    assert!(message.validate().is_err());
}

#[test]
fn mistyped_fields_value_is_rejected_with_its_path() {
    let message = UserUpdateV1::from_body(json!({
        "msg": {"agent": "dudemcpants", "user": "testuser", "fields": 42}
    }));
    let error = message.validate().expect_err("non-array 'fields' must fail");
    let violations = error.violations().expect("mismatch carries violations");
    assert!(
        violations
            .iter()
            .any(|violation| violation.instance_path == "/msg/fields")
    );
}

#[test]
fn mistyped_agent_value_is_rejected() {
    let message = MemberSponsorV1::from_body(json!({
        "msg": {"agent": 7, "user": "testuser", "group": "developers"}
    }));
    assert!(message.validate().is_err());
}

#[rstest]
#[case::create(&UserCreateV1::new("a", "b") as &dyn FasMessage, "The message sent when a user is created")]
#[case::update(
    &UserUpdateV1::new("a", "b", ["c"]) as &dyn FasMessage,
    "The message sent when a user is updated"
)]
#[case::sponsor(
    &MemberSponsorV1::new("a", "b", "c") as &dyn FasMessage,
    "The message sent when a user is added to a group by a sponsor"
)]
fn schema_documents_carry_registry_metadata(
    #[case] message: &dyn FasMessage,
    #[case] description: &str,
) {
    let document = message.body_schema();
    assert_eq!(document.get("id").and_then(Value::as_str), Some(SCHEMA_ID));
    assert_eq!(
        document.get("$schema").and_then(Value::as_str),
        Some("http://json-schema.org/draft-04/schema#")
    );
    assert_eq!(
        document.get("description").and_then(Value::as_str),
        Some(description)
    );
}

#[test]
fn validation_error_lists_every_violation() {
    let message = MemberSponsorV1::from_body(json!({"msg": {}}));
    let error = message.validate().expect_err("empty msg must fail");
    let violations = error.violations().expect("mismatch carries violations");
    assert!(!violations.is_empty());
}
