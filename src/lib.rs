//! Noggin messages: schemas for Fedora Account System events.
//!
//! This crate defines the message contracts published by noggin, the
//! Fedora identity-management application, when accounts change: user
//! creation, user update, and group sponsorship. Each message type binds
//! a bus topic to a JSON Schema body contract and derives human-readable
//! summaries and query-friendly views over a validated body.
//!
//! The crate is a data-contract layer only. Bus transport, the
//! publish/consume runtime, and schema-registry tooling live elsewhere;
//! consumers here construct a message, validate it, and hand the wire
//! envelope to the transport.
//!
//! # Modules
//!
//! - [`message`]: the message catalogue, schema documents, and wire envelope

pub mod message;
