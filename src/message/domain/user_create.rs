//! The message sent when a user is created.

use super::FasMessage;
use crate::message::error::SchemaValidationError;
use crate::message::schema;
use serde_json::{Value, json};
use std::fmt;

/// The message sent when a new Fedora Account is created.
///
/// # Examples
///
/// ```
/// use noggin_messages::message::domain::{FasMessage, UserCreateV1};
///
/// let message = UserCreateV1::new("dudemcpants", "testuser");
/// message.validate().expect("body matches the schema");
/// assert_eq!(message.agent_name(), "dudemcpants");
/// assert_eq!(message.subject_name(), "testuser");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreateV1 {
    body: Value,
}

impl UserCreateV1 {
    /// The bus topic for user-creation events.
    pub const TOPIC: &'static str = "fas.user.create";

    /// The schema-name header for user-creation events.
    pub const SCHEMA_NAME: &'static str = "noggin.user.create.v1";

    /// Builds a creation message from its constituent usernames.
    #[must_use]
    pub fn new(agent: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            body: json!({"msg": {"agent": agent.into(), "user": user.into()}}),
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
}

impl FasMessage for UserCreateV1 {
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
        schema::user_create().document()
    }

    fn summary(&self) -> String {
        let agent = self.agent_name();
        let user = self.subject_name();
        if agent == user {
            format!("{agent} created a new Fedora Account")
        } else {
            format!("{agent} created a new Fedora Account for {user}")
        }
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        schema::user_create().check(Self::TOPIC, &self.body)
    }
}

impl fmt::Display for UserCreateV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail())
    }
}
