//! Domain identifiers (strongly-typed IDs).
//!
//! Post IDs are ULIDs (Universally Unique Lexicographically Sortable
//! Identifiers):
//! - **Sortable by time**: the timestamp leads, so ids sort in creation order
//!   and the store's "storage order" matches scheduling order for free.
//! - **Coordination-free**: safe to generate from concurrent schedulers.
//! - **UUID-sized**: 128-bit.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of a Post (one scheduled publish attempt).
///
/// Serializes as the bare ULID string; `Display` adds the `post-` prefix for
/// logs and CLI output.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(Ulid);

impl PostId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for PostId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post-{}", self.0)
    }
}
