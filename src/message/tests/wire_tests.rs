//! Unit tests for the wire envelope.

use crate::message::domain::{FasMessage, MemberSponsorV1, UserCreateV1};
use crate::message::error::ParseSeverityError;
use crate::message::wire::{Envelope, MessageId, Severity};
use chrono::{DateTime, Local, Utc};
use mockable::{Clock, DefaultClock};
use rstest::rstest;
use serde_json::Value;

/// A clock pinned to a fixed instant, for byte-exact header assertions.
struct FixedClock(DateTime<Utc>);

impl FixedClock {
    fn at(raw: &str) -> Self {
        Self(
            DateTime::parse_from_rfc3339(raw)
                .expect("test timestamp parses")
                .with_timezone(&Utc),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[test]
fn envelope_carries_message_identity() {
    let message = MemberSponsorV1::new("dudemcpants", "testuser", "developers");
    let envelope = Envelope::for_message(&message, &DefaultClock);

    assert_eq!(envelope.topic(), "fas.group.member.sponsor");
    assert_eq!(
        envelope.headers().schema_name,
        "noggin.group.member.sponsor.v1"
    );
    assert_eq!(envelope.headers().severity, Severity::Info);
    assert_eq!(envelope.body(), message.body());
    assert_eq!(envelope.queue(), None);
    assert!(!envelope.id().as_ref().is_nil());
}

#[test]
fn wire_dump_uses_the_published_header_names() {
    let message = UserCreateV1::new("dudemcpants", "testuser");
    let clock = FixedClock::at("2020-03-02T08:53:38+00:00");
    let envelope = Envelope::for_message(&message, &clock);

    let raw = envelope.to_wire().expect("envelope serialises");
    let dump: Value = serde_json::from_str(&raw).expect("dump parses as JSON");

    assert_eq!(
        dump.pointer("/headers/fedora_messaging_schema")
            .and_then(Value::as_str),
        Some("noggin.user.create.v1")
    );
    assert_eq!(
        dump.pointer("/headers/fedora_messaging_severity")
            .and_then(Value::as_u64),
        Some(20)
    );
    assert_eq!(
        dump.pointer("/headers/sent-at").and_then(Value::as_str),
        Some("2020-03-02T08:53:38+00:00")
    );
    assert_eq!(
        dump.pointer("/queue").map(Value::is_null),
        Some(true),
        "undelivered messages dump a null queue"
    );
    assert_eq!(
        dump.pointer("/body/msg/agent").and_then(Value::as_str),
        Some("dudemcpants")
    );
}

#[test]
fn sent_at_is_truncated_to_wire_precision() {
    let clock = FixedClock::at("2020-03-02T08:53:38.242576+00:00");
    let message = UserCreateV1::new("dudemcpants", "testuser");
    let envelope = Envelope::for_message(&message, &clock);

    // The held timestamp matches the second-precision wire header, so a
    // publisher's envelope compares equal to what consumers parse back.
    let expected = FixedClock::at("2020-03-02T08:53:38+00:00").utc();
    assert_eq!(envelope.headers().sent_at, expected);

    let raw = envelope.to_wire().expect("envelope serialises");
    let parsed = Envelope::from_wire(&raw).expect("dump parses back");
    assert_eq!(parsed.headers().sent_at, envelope.headers().sent_at);
}

#[test]
fn wire_round_trip_preserves_topic_and_body() {
    let message = MemberSponsorV1::new("dudemcpants", "testuser", "developers");
    let envelope = Envelope::for_message(&message, &DefaultClock)
        .with_severity(Severity::Warning)
        .with_queue("fas-notify");

    let raw = envelope.to_wire().expect("envelope serialises");
    let parsed = Envelope::from_wire(&raw).expect("dump parses back");

    assert_eq!(parsed.topic(), envelope.topic());
    assert_eq!(parsed.body(), envelope.body());
    assert_eq!(parsed.id(), envelope.id());
    assert_eq!(parsed.headers(), envelope.headers());
    assert_eq!(parsed.queue(), Some("fas-notify"));
}

#[test]
fn from_wire_rejects_malformed_input() {
    assert!(Envelope::from_wire("not json").is_err());
    assert!(Envelope::from_wire("{\"topic\": \"fas.user.create\"}").is_err());
}

#[rstest]
#[case(10, Severity::Debug)]
#[case(20, Severity::Info)]
#[case(30, Severity::Warning)]
#[case(40, Severity::Error)]
fn severity_round_trips_through_its_numeric_form(#[case] value: u8, #[case] severity: Severity) {
    assert_eq!(u8::from(severity), value);
    assert_eq!(Severity::try_from(value), Ok(severity));
}

#[test]
fn unknown_severity_values_are_rejected() {
    assert_eq!(Severity::try_from(25), Err(ParseSeverityError(25)));
}

#[test]
fn message_id_conversions_are_lossless() {
    let id = MessageId::new();
    assert_eq!(MessageId::from_uuid(id.into_inner()), id);
    assert_eq!(id.to_string(), id.into_inner().to_string());
}
