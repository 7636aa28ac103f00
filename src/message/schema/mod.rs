//! Embedded JSON Schema documents for the message catalogue.
//!
//! Schemas are declarative constants, kept as data rather than derived
//! from the Rust types, so schema-registry tooling on the bus sees the
//! same draft-04 documents the original publisher registered. Each
//! document is compiled once on first use; a document that fails to
//! compile surfaces as a typed error from validation rather than a panic.

use crate::message::error::{SchemaValidationError, SchemaViolation};
use jsonschema::JSONSchema;
use serde_json::{Value, json};
use std::sync::LazyLock;

/// Stable `id` URI shared by all noggin schema documents.
pub const SCHEMA_ID: &str = "http://fedoraproject.org/message-schema/noggin";

const DRAFT_04: &str = "http://json-schema.org/draft-04/schema#";

static USER_CREATE_DOCUMENT: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "id": SCHEMA_ID,
        "$schema": DRAFT_04,
        "description": "The message sent when a user is created",
        "type": "object",
        "required": ["msg"],
        "properties": {
            "msg": {
                "required": ["agent", "user"],
                "description": "the contents of the event",
                "type": "object",
                "properties": {
                    "agent": {"type": "string"},
                    "user": {"type": "string"},
                },
            }
        },
    })
});

static USER_UPDATE_DOCUMENT: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "id": SCHEMA_ID,
        "$schema": DRAFT_04,
        "description": "The message sent when a user is updated",
        "type": "object",
        "required": ["msg"],
        "properties": {
            "msg": {
                "required": ["agent", "user", "fields"],
                "description": "the contents of the event",
                "type": "object",
                "properties": {
                    "agent": {"type": "string"},
                    "user": {"type": "string"},
                    "fields": {
                        "type": "array",
                        "contains": {
                            "type": "string",
                        },
                    },
                },
            },
        },
    })
});

static MEMBER_SPONSOR_DOCUMENT: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "id": SCHEMA_ID,
        "$schema": DRAFT_04,
        "description": "The message sent when a user is added to a group by a sponsor",
        "type": "object",
        "required": ["msg"],
        "properties": {
            "msg": {
                "required": ["agent", "user", "group"],
                "description": "the contents of the event",
                "type": "object",
                "properties": {
                    "agent": {"type": "string"},
                    "user": {"type": "string"},
                    "group": {"type": "string"},
                },
            }
        },
    })
});

static USER_CREATE_COMPILED: LazyLock<Result<JSONSchema, String>> =
    LazyLock::new(|| compile(&USER_CREATE_DOCUMENT));

static USER_UPDATE_COMPILED: LazyLock<Result<JSONSchema, String>> =
    LazyLock::new(|| compile(&USER_UPDATE_DOCUMENT));

static MEMBER_SPONSOR_COMPILED: LazyLock<Result<JSONSchema, String>> =
    LazyLock::new(|| compile(&MEMBER_SPONSOR_DOCUMENT));

fn compile(document: &'static Value) -> Result<JSONSchema, String> {
    JSONSchema::compile(document).map_err(|err| err.to_string())
}

/// A schema document paired with its compiled validator.
pub(crate) struct CompiledDocument {
    document: &'static LazyLock<Value>,
    compiled: &'static LazyLock<Result<JSONSchema, String>>,
}

impl CompiledDocument {
    /// Returns the raw schema document.
    pub(crate) fn document(&self) -> &'static Value {
        self.document
    }

    /// Checks a message body against this schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::Mismatch`] listing every violation
    /// with its instance path, or [`SchemaValidationError::InvalidSchema`]
    /// when the embedded document itself did not compile.
    pub(crate) fn check(&self, topic: &str, body: &Value) -> Result<(), SchemaValidationError> {
        let compiled = (**self.compiled)
            .as_ref()
            .map_err(|reason| SchemaValidationError::invalid_schema(topic, reason.clone()))?;

        if let Err(errors) = compiled.validate(body) {
            let violations = errors
                .map(|err| SchemaViolation {
                    instance_path: err.instance_path.to_string(),
                    detail: err.to_string(),
                })
                .collect();
            return Err(SchemaValidationError::mismatch(topic, violations));
        }

        Ok(())
    }
}

/// The schema for `fas.user.create` bodies.
pub(crate) fn user_create() -> CompiledDocument {
    CompiledDocument {
        document: &USER_CREATE_DOCUMENT,
        compiled: &USER_CREATE_COMPILED,
    }
}

/// The schema for `fas.user.update` bodies.
pub(crate) fn user_update() -> CompiledDocument {
    CompiledDocument {
        document: &USER_UPDATE_DOCUMENT,
        compiled: &USER_UPDATE_COMPILED,
    }
}

/// The schema for `fas.group.member.sponsor` bodies.
pub(crate) fn member_sponsor() -> CompiledDocument {
    CompiledDocument {
        document: &MEMBER_SPONSOR_DOCUMENT,
        compiled: &MEMBER_SPONSOR_COMPILED,
    }
}
