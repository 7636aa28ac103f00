//! The message sent when a user is updated.

use super::FasMessage;
use crate::message::error::SchemaValidationError;
use crate::message::schema;
use serde_json::{Value, json};
use std::fmt;

/// The message sent when details of a Fedora Account change.
///
/// The body carries the list of changed field names in the order the
/// changes were reported; that order is preserved in the rendered detail.
///
/// # Examples
///
/// ```
/// use noggin_messages::message::domain::{FasMessage, UserUpdateV1};
///
/// let message = UserUpdateV1::new("dudemcpants", "testuser", ["firstname", "lastname"]);
/// message.validate().expect("body matches the schema");
/// assert_eq!(message.fields(), ["firstname", "lastname"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdateV1 {
    body: Value,
}

impl UserUpdateV1 {
    /// The bus topic for user-update events.
    pub const TOPIC: &'static str = "fas.user.update";

    /// The schema-name header for user-update events.
    pub const SCHEMA_NAME: &'static str = "noggin.user.update.v1";

    /// Builds an update message from its usernames and changed fields.
    #[must_use]
    pub fn new<I, S>(agent: impl Into<String>, user: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field_names: Vec<String> = fields.into_iter().map(Into::into).collect();
        Self {
            body: json!({
                "msg": {
                    "agent": agent.into(),
                    "user": user.into(),
                    "fields": field_names,
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

    /// The names of the changed fields, in reported order.
    ///
    /// Empty on malformed bodies; non-string entries are skipped.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.body
            .pointer("/msg/fields")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl FasMessage for UserUpdateV1 {
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
        schema::user_update().document()
    }

    fn summary(&self) -> String {
        let agent = self.agent_name();
        let user = self.subject_name();
        let count = self.fields().len();
        if agent == user {
            format!("{agent} edited {count} details of their Fedora Account")
        } else {
            format!("{agent} edited {count} details of {user}'s Fedora Account")
        }
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        schema::user_update().check(Self::TOPIC, &self.body)
    }

    // The trailing space after the last field name is part of the
    // published format; existing consumers compare against it verbatim.
    fn detail(&self) -> String {
        format!(
            "{}\n\nDetails changed:\n\n{} ",
            self.summary(),
            self.fields().join("\n")
        )
    }
}

impl fmt::Display for UserUpdateV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail())
    }
}
