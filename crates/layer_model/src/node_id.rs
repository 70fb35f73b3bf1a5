//! Layer ID type and id minting

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use uuid::Uuid;

/// Unique identifier for a layer within a page.
///
/// Ids are opaque strings: documents arrive with hand-written ids such as
/// `"frame-hero"`, and duplicated layers get ids minted by [`generate_id`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    /// Create a LayerId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for LayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LayerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LayerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Number of random characters appended to a minted id
const RANDOM_SUFFIX_LEN: usize = 6;

/// Mint a fresh id derived from `base`.
///
/// The result has the shape `{base}-{millis}-{random}` where `millis` is the
/// current Unix time in milliseconds written in base 36 and `random` is taken
/// from a v4 UUID.
pub fn generate_id(base: &str) -> LayerId {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = Uuid::new_v4().simple().to_string();
    LayerId(format!(
        "{}-{}-{}",
        base,
        to_base36(millis),
        &random[..RANDOM_SUFFIX_LEN]
    ))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
