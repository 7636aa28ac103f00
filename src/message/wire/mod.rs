//! The bus envelope wrapping a catalogue message for transmission.
//!
//! The transport layer addresses messages through an envelope carrying
//! the schema-name header, a severity level, a send timestamp, and a
//! unique message id alongside the topic and body. The envelope's JSON
//! dump form is a compatibility surface: field names and timestamp
//! formatting must match what existing bus consumers parse.

use crate::message::domain::FasMessage;
use crate::message::error::{ParseSeverityError, WireError};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Unique identifier assigned to a message on the bus.
///
/// # Examples
///
/// ```
/// use noggin_messages::message::wire::MessageId;
///
/// let id = MessageId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: This implementation generates a new random UUID on each call,
/// which is non-standard behaviour for `Default`. Use `MessageId::new()`
/// if the intent to generate a random ID should be explicit.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level attached to a published message.
///
/// Serialised as its numeric value; the levels match the bus convention
/// (10 through 40).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    /// Diagnostic traffic, normally filtered out.
    Debug,
    /// Routine event; the default for catalogue messages.
    #[default]
    Info,
    /// Something a human may want to look at.
    Warning,
    /// A failure consumers should surface.
    Error,
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: u8) -> Result<Self, ParseSeverityError> {
        match value {
            10 => Ok(Self::Debug),
            20 => Ok(Self::Info),
            30 => Ok(Self::Warning),
            40 => Ok(Self::Error),
            other => Err(ParseSeverityError(other)),
        }
    }
}

/// Transport headers accompanying a message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeHeaders {
    /// Name of the schema the body satisfies, distinct from the topic.
    #[serde(rename = "fedora_messaging_schema")]
    pub schema_name: String,

    /// Severity of the event.
    #[serde(rename = "fedora_messaging_severity")]
    pub severity: Severity,

    /// When the message was handed to the transport.
    #[serde(rename = "sent-at", with = "sent_at_format")]
    pub sent_at: DateTime<Utc>,
}

/// A catalogue message wrapped for bus transmission.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use noggin_messages::message::domain::UserCreateV1;
/// use noggin_messages::message::wire::Envelope;
///
/// let message = UserCreateV1::new("dudemcpants", "testuser");
/// let envelope = Envelope::for_message(&message, &DefaultClock);
///
/// assert_eq!(envelope.topic(), "fas.user.create");
/// assert_eq!(envelope.headers().schema_name, "noggin.user.create.v1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// The message body.
    body: Value,
    /// Transport headers.
    headers: EnvelopeHeaders,
    /// Unique message identifier.
    id: MessageId,
    /// Queue the message was consumed from; absent until delivery.
    queue: Option<String>,
    /// Bus routing key.
    topic: String,
}

impl Envelope {
    /// Wraps a catalogue message in a fresh envelope.
    ///
    /// The envelope takes a copy of the body, the message's schema-name
    /// header, [`Severity::Info`], the clock's current time, and a random
    /// id. The queue is unset until a consumer receives the message.
    ///
    /// The timestamp is truncated to whole seconds, the precision of the
    /// `sent-at` wire header, so the envelope a publisher holds is
    /// identical to what consumers parse back.
    #[must_use]
    pub fn for_message(message: &impl FasMessage, clock: &impl Clock) -> Self {
        Self {
            body: message.body().clone(),
            headers: EnvelopeHeaders {
                schema_name: message.schema_name().to_owned(),
                severity: Severity::Info,
                sent_at: clock.utc().trunc_subsecs(0),
            },
            id: MessageId::new(),
            queue: None,
            topic: message.topic().to_owned(),
        }
    }

    /// Overrides the severity header.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.headers.severity = severity;
        self
    }

    /// Overrides the message id.
    #[must_use]
    pub const fn with_id(mut self, id: MessageId) -> Self {
        self.id = id;
        self
    }

    /// Records the queue the message was consumed from.
    #[must_use]
    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    /// Returns the message body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Returns the transport headers.
    #[must_use]
    pub const fn headers(&self) -> &EnvelopeHeaders {
        &self.headers
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the queue the message was consumed from, if any.
    #[must_use]
    pub fn queue(&self) -> Option<&str> {
        self.queue.as_deref()
    }

    /// Returns the bus routing key.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Serialises the envelope to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Serialise`] when the body cannot be encoded.
    pub fn to_wire(&self) -> Result<String, WireError> {
        serde_json::to_string(self).map_err(WireError::Serialise)
    }

    /// Parses an envelope from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Deserialise`] when the input is not a valid
    /// envelope dump.
    pub fn from_wire(raw: &str) -> Result<Self, WireError> {
        serde_json::from_str(raw).map_err(WireError::Deserialise)
    }
}

/// RFC 3339 with an explicit numeric offset and second precision, the
/// format historical consumers expect in the `sent-at` header.
mod sent_at_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
