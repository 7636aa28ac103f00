//! Unit tests for the message module.
//!
//! Tests are organised by concern: domain accessors and rendering,
//! schema validation, and the wire envelope.

mod schema_tests;
mod wire_tests;
