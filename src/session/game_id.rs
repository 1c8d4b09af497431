//! Game identifiers: non-empty, whitespace-free names of one persisted log.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chess_errors::InputError;

const RANDOM_ID_ALPHABET: &[u8] = b"abcdefghijkmnpqrstuvwxyz23456789";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameId(String);

impl GameId {
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InputError::BlankGameId);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(InputError::GameIdContainsWhitespace(text));
        }
        Ok(Self(text))
    }

    /// A fresh identifier of `len` characters (at least one) drawn from a
    /// lower-case alphabet without easily confused glyphs.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let text = (0..len.max(1))
            .map(|_| char::from(RANDOM_ID_ALPHABET[rng.random_range(0..RANDOM_ID_ALPHABET.len())]))
            .collect();
        Self(text)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for GameId {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.0
    }
}
