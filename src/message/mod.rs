//! The message catalogue for noggin account-lifecycle events.
//!
//! Three event kinds are defined, each pairing a fixed bus topic with a
//! draft-04 JSON Schema body contract:
//!
//! | Variant | Topic |
//! |---|---|
//! | [`domain::UserCreateV1`] | `fas.user.create` |
//! | [`domain::UserUpdateV1`] | `fas.user.update` |
//! | [`domain::MemberSponsorV1`] | `fas.group.member.sponsor` |
//!
//! # Architecture
//!
//! - **Domain**: the [`domain::FasMessage`] contract and its three
//!   concrete variants, plus avatar URL derivation
//! - **Schema**: embedded JSON Schema documents and compiled validators
//! - **Wire**: the bus envelope (headers, id, topic) and its JSON dump form
//! - **Error**: typed failures for validation and wire handling
//!
//! # Example
//!
//! ```
//! use noggin_messages::message::domain::{FasMessage, UserCreateV1};
//!
//! let message = UserCreateV1::new("dudemcpants", "testuser");
//! message.validate().expect("body matches the schema");
//!
//! assert_eq!(message.topic(), "fas.user.create");
//! assert_eq!(
//!     message.summary(),
//!     "dudemcpants created a new Fedora Account for testuser",
//! );
//! ```

pub mod domain;
pub mod error;
pub mod schema;
pub mod wire;

#[cfg(test)]
mod tests;
