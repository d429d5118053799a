//! Source media descriptor and pass-through credentials.

use serde::{Deserialize, Serialize};

/// A candidate video from the stock-footage provider.
///
/// The engine only reads `url` (handed to the media service) and
/// `attribution` (folded into the caption); the rest rides along so the
/// stored record stays useful to whatever renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Provider-side id.
    pub id: u64,

    /// Direct link to the media file. May be empty when the provider listed
    /// no files for a hit; the publish attempt then fails at the service.
    pub url: String,

    /// Thumbnail URL.
    pub image: String,

    /// Duration in seconds.
    pub duration: u32,

    /// Display name of the creator, for attribution in captions.
    pub attribution: String,
}

/// Opaque publish credentials: an access token plus the target account id.
///
/// Carried through the engine untouched; only the media service client ever
/// puts them on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub account_id: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            account_id: account_id.into(),
        }
    }
}
