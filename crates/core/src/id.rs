//! Identifiers used across the billing domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Identifier of a play in a catalog (e.g. `"hamlet"`).
///
/// Play identifiers are caller-chosen slugs rather than generated ids, so
/// this wraps a string instead of a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PlayId> for String {
    fn from(value: PlayId) -> Self {
        value.0
    }
}

impl core::borrow::Borrow<str> for PlayId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayId {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
