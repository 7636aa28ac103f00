//! The message sent when a user is added to a group by a sponsor.

use super::FasMessage;
use crate::message::error::SchemaValidationError;
use crate::message::schema;
use serde_json::{Value, json};
use std::fmt;

/// The message sent when a sponsor adds a user to a group.
///
/// # Examples
///
/// ```
/// use noggin_messages::message::domain::{FasMessage, MemberSponsorV1};
///
/// let message = MemberSponsorV1::new("dudemcpants", "testuser", "developers");
/// message.validate().expect("body matches the schema");
/// assert_eq!(message.groups(), ["developers"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSponsorV1 {
    body: Value,
}

impl MemberSponsorV1 {
    /// The bus topic for group-sponsorship events.
    pub const TOPIC: &'static str = "fas.group.member.sponsor";

    /// The schema-name header for group-sponsorship events.
    pub const SCHEMA_NAME: &'static str = "noggin.group.member.sponsor.v1";

    /// Builds a sponsorship message from its usernames and group.
    #[must_use]
    pub fn new(
        agent: impl Into<String>,
        user: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            body: json!({
                "msg": {
                    "agent": agent.into(),
                    "user": user.into(),
                    "group": group.into(),
                }
            }),
        }
    }

    /// Wraps a raw body without validating it.
    ///
    /// Validation is deferred; call [`FasMessage::validate`] before
    /// trusting the derived accessors.
    #[must_use]
    pub const fn from_body(body: Value) -> Self {
        Self { body }
    }

    /// Consumes the message, returning its body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// The sponsored group's name, from `body.msg.group`.
    #[must_use]
    pub fn group(&self) -> &str {
        super::message::msg_str(&self.body, "/msg/group")
    }
}

impl FasMessage for MemberSponsorV1 {
    fn topic(&self) -> &'static str {
        Self::TOPIC
    }

    fn schema_name(&self) -> &'static str {
        Self::SCHEMA_NAME
    }

    fn body(&self) -> &Value {
        &self.body
    }

    fn body_schema(&self) -> &'static Value {
        schema::member_sponsor().document()
    }

    // Historical format: there is no space between "group" and the group
    // name. Consumers match the published string, so it stays verbatim.
    fn summary(&self) -> String {
        format!(
            "Sponsor {} added {} to the group{}",
            self.agent_name(),
            self.subject_name(),
            self.group()
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        schema::member_sponsor().check(Self::TOPIC, &self.body)
    }

    fn groups(&self) -> Vec<String> {
        vec![self.group().to_owned()]
    }
}

impl fmt::Display for MemberSponsorV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail())
    }
}
