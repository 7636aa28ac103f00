//! Domain types for the message catalogue.
//!
//! Pure domain types with no infrastructure dependencies: the shared
//! message contract, one concrete type per event kind, and avatar URL
//! derivation.

mod avatar;
mod member_sponsor;
mod message;
mod user_create;
mod user_update;

pub use avatar::libravatar_url;
pub use member_sponsor::MemberSponsorV1;
pub use message::{APP_NAME, FasMessage};
pub use user_create::UserCreateV1;
pub use user_update::UserUpdateV1;
