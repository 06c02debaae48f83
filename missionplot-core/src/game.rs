//! Game enumeration
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DataError;

/// The games a mission can belong to, plus the `All` filter wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Game {
    #[default]
    All,
    T1,
    TG,
    T2,
    T3,
    TDM,
}

const REGISTERED: [Game; 6] = [Game::All, Game::T1, Game::TG, Game::T2, Game::T3, Game::TDM];

static BY_NAME: Lazy<HashMap<&'static str, Game>> =
    Lazy::new(|| REGISTERED.iter().map(|game| (game.name(), *game)).collect());

impl Game {
    /// Display name, also the value used in the dataset's `game` field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "All Games",
            Self::T1 => "Thief: The Dark Project",
            Self::TG => "Thief Gold",
            Self::T2 => "Thief II: The Metal Age",
            Self::T3 => "Thief: Deadly Shadows",
            Self::TDM => "The Dark Mod",
        }
    }

    /// Every value in registration order, wildcard first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &REGISTERED
    }

    /// Resolve a display name with an exact match.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownGame`] when `name` is not registered.
    pub fn parse_by_name(name: &str) -> Result<Self, DataError> {
        BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| DataError::UnknownGame(name.to_string()))
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Game {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_by_name(s)
    }
}

impl Serialize for Game {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse_by_name(&name).map_err(serde::de::Error::custom)
    }
}
