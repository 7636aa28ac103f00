//! The shared contract implemented by every catalogue message.
//!
//! Mirrors the class hierarchy of the original publisher: a common base
//! exposing topic, schema, and derived accessors, specialised once per
//! event kind. Bodies are held as raw JSON and validated on demand;
//! accessors assume a previously validated body and fall back to empty
//! values rather than re-validating.

use super::avatar;
use crate::message::error::SchemaValidationError;
use serde_json::Value;

/// The application name shared by every Fedora Account System event.
pub const APP_NAME: &str = "fas";

/// Contract implemented by all noggin message variants.
///
/// A message binds a fixed bus topic to a JSON Schema body contract and
/// derives human-readable and query-friendly views over the body. All
/// operations are pure functions of the constructed body.
///
/// # Validation
///
/// Construction never validates; call [`FasMessage::validate`] before
/// relying on the derived accessors in code that cannot otherwise
/// guarantee the body's shape. On malformed bodies the accessors return
/// empty strings and empty sequences instead of panicking.
pub trait FasMessage {
    /// The fixed bus routing key for this event kind.
    fn topic(&self) -> &'static str;

    /// The schema-name header value, distinct from the topic
    /// (e.g. `noggin.user.create.v1`).
    fn schema_name(&self) -> &'static str;

    /// The payload instance.
    fn body(&self) -> &Value;

    /// The draft-04 JSON Schema document this body must satisfy.
    fn body_schema(&self) -> &'static Value;

    /// A short, single-line human description of the event.
    #[must_use]
    fn summary(&self) -> String;

    /// Checks the body against the variant's schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError`] when a required field is absent
    /// or mis-typed, naming the instance path of each violation.
    fn validate(&self) -> Result<(), SchemaValidationError>;

    /// The name of the application that emitted the event.
    #[must_use]
    fn app_name(&self) -> &'static str {
        APP_NAME
    }

    /// The acting user's username, from `body.msg.agent`.
    #[must_use]
    fn agent_name(&self) -> &str {
        msg_str(self.body(), "/msg/agent")
    }

    /// The username the event is about, from `body.msg.user`.
    #[must_use]
    fn subject_name(&self) -> &str {
        msg_str(self.body(), "/msg/user")
    }

    /// The usernames affected by this event, sorted lexicographically.
    ///
    /// Always two entries; when the agent acted on their own account the
    /// name appears twice. Consumers index notifications by this list.
    #[must_use]
    fn usernames(&self) -> Vec<String> {
        let mut names = vec![
            self.agent_name().to_owned(),
            self.subject_name().to_owned(),
        ];
        names.sort_unstable();
        names
    }

    /// The libravatar URL for the acting user.
    #[must_use]
    fn agent_avatar(&self) -> String {
        avatar::libravatar_url(self.agent_name())
    }

    /// The groups affected by this event; empty for most event kinds.
    #[must_use]
    fn groups(&self) -> Vec<String> {
        Vec::new()
    }

    /// The full human-readable description of the event.
    ///
    /// Equals [`FasMessage::summary`] unless a variant itemises further
    /// detail.
    #[must_use]
    fn detail(&self) -> String {
        self.summary()
    }
}

/// Looks up a string field inside the body, yielding `""` when the body
/// is malformed.
pub(super) fn msg_str<'a>(body: &'a Value, pointer: &str) -> &'a str {
    body.pointer(pointer).and_then(Value::as_str).unwrap_or("")
}
