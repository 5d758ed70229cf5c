//! Field registry.
//!
//! Maps field names, and the synonyms users type for them, to a typed
//! accessor on [`BoardGame`]. Resolution folds case and drops all whitespace,
//! so `"Min Players"`, `"MINPLAYERS"` and `"min_players"` all land on
//! [`Field::MinPlayers`].

use std::str::FromStr;

use crate::error::{Result, SeekerError};
use crate::record::BoardGame;
use crate::value::{fold_text, Number, Value};

/// A queryable, sortable attribute of a [`BoardGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Id,
    MinPlayers,
    MaxPlayers,
    MinPlayTime,
    MaxPlayTime,
    Difficulty,
    Rank,
    Rating,
    YearPublished,
}

/// The kind of value a field yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Real,
    Text,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Text => "text",
        }
    }
}

impl Field {
    /// Every registered field, in display order.
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Id,
        Field::MinPlayers,
        Field::MaxPlayers,
        Field::MinPlayTime,
        Field::MaxPlayTime,
        Field::Difficulty,
        Field::Rank,
        Field::Rating,
        Field::YearPublished,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Id => "id",
            Field::MinPlayers => "minplayers",
            Field::MaxPlayers => "maxplayers",
            Field::MinPlayTime => "minplaytime",
            Field::MaxPlayTime => "maxplaytime",
            Field::Difficulty => "difficulty",
            Field::Rank => "rank",
            Field::Rating => "rating",
            Field::YearPublished => "yearpublished",
        }
    }

    /// Accepted spellings besides the canonical name, already folded.
    ///
    /// Covers the enum-style display names (`min_time`, `year`) and the CSV
    /// column headers (`objectname`, `average`, `avgweight`).
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["objectname"],
            Field::Id => &[],
            Field::MinPlayers => &["min_players"],
            Field::MaxPlayers => &["max_players"],
            Field::MinPlayTime => &["min_time", "mintime", "min_play_time"],
            Field::MaxPlayTime => &["max_time", "maxtime", "max_play_time"],
            Field::Difficulty => &["avgweight"],
            Field::Rank => &[],
            Field::Rating => &["average"],
            Field::YearPublished => &["year", "year_published"],
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Field::Name => ValueKind::Text,
            Field::Difficulty | Field::Rating => ValueKind::Real,
            _ => ValueKind::Integer,
        }
    }

    /// Extracts this field's value from a game.
    pub fn value(self, game: &BoardGame) -> Value<'_> {
        match self {
            Field::Name => Value::Text(game.name()),
            Field::Id => {
                let id = i64::try_from(game.id()).unwrap_or(i64::MAX);
                Value::Number(Number::Int(id))
            }
            Field::MinPlayers => Value::Number(game.min_players().into()),
            Field::MaxPlayers => Value::Number(game.max_players().into()),
            Field::MinPlayTime => Value::Number(game.min_play_time().into()),
            Field::MaxPlayTime => Value::Number(game.max_play_time().into()),
            Field::Difficulty => Value::Number(game.difficulty().into()),
            Field::Rank => Value::Number(game.rank().into()),
            Field::Rating => Value::Number(game.rating().into()),
            Field::YearPublished => Value::Number(game.year_published().into()),
        }
    }

    /// Resolves a user-supplied field name.
    ///
    /// Matching is case-insensitive and ignores whitespace anywhere in the
    /// input. Unknown names fail with [`SeekerError::UnknownField`].
    pub fn resolve(text: &str) -> Result<Field> {
        let key = fold_text(text);
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == key || field.synonyms().contains(&key.as_str()))
            .ok_or_else(|| SeekerError::UnknownField(text.trim().to_string()))
    }
}

impl FromStr for Field {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Field::resolve(s)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
