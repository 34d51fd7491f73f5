use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use playbill_core::PlayId;

/// Category of play; selects the pricing rule.
///
/// Genres without a pricing rule are kept as `Other` so they survive
/// deserialization and are rejected at pricing time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Tragedy,
    Comedy,
    Other(GenreName),
}

/// Name of a genre without a pricing rule.
///
/// Only built by `Genre::from`, so it never holds a known genre name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenreName(String);

impl GenreName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for GenreName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Genre {
    pub fn as_str(&self) -> &str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for Genre {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            _ => Genre::Other(GenreName(value)),
        }
    }
}

impl From<&str> for Genre {
    fn from(value: &str) -> Self {
        Genre::from(value.to_string())
    }
}

impl From<Genre> for String {
    fn from(value: Genre) -> Self {
        match value {
            Genre::Other(name) => name.0,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference data for a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(alias = "type")]
    pub genre: Genre,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<Genre>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }
}

/// Read-only catalog of plays keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.insert(id, play);
        self
    }

    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> Option<Play> {
        self.plays.insert(id.into(), play)
    }

    pub fn get(&self, id: &str) -> Option<&Play> {
        self.plays.get(id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl<K: Into<PlayId>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
