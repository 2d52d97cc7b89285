//! Gravatar URLs derived from email addresses.

use md5::{Digest, Md5};

/// Protocol-relative so the page decides between http and https.
const BASE_URL: &str = "//www.gravatar.com/avatar/";

/// Avatar URL for an email. Gravatar hashes the trimmed, lowercased address.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    format!("{}{}", BASE_URL, hex::encode(digest))
}
