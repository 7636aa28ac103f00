//! Libravatar URL derivation for message agents.
//!
//! Avatars are served by the Fedora libravatar CDN, keyed by the SHA-256
//! digest of the user's Fedora OpenID URL. The derivation is pure: the
//! same username always yields the same URL. Fetching the image is the
//! consumer's business, not this crate's.

use sha2::{Digest, Sha256};

const LIBRAVATAR_BASE: &str = "https://seccdn.libravatar.org/avatar/";
const AVATAR_SIZE: u32 = 64;
const AVATAR_DEFAULT: &str = "retro";

/// Returns the libravatar URL for a Fedora username.
///
/// The hash input is the lowercased OpenID URL
/// `http://{username}.id.fedoraproject.org/`, matching what the account
/// system registers with the avatar service.
///
/// # Examples
///
/// ```
/// use noggin_messages::message::domain::libravatar_url;
///
/// let url = libravatar_url("dudemcpants");
/// assert!(url.starts_with("https://seccdn.libravatar.org/avatar/"));
/// assert!(url.ends_with("?s=64&d=retro"));
/// ```
#[must_use]
pub fn libravatar_url(username: &str) -> String {
    let openid = format!("http://{username}.id.fedoraproject.org/").to_lowercase();
    let digest = Sha256::digest(openid.as_bytes());
    let hash: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    format!("{LIBRAVATAR_BASE}{hash}?s={AVATAR_SIZE}&d={AVATAR_DEFAULT}")
}
