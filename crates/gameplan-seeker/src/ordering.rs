//! Sorting of game lists.
//!
//! Provides [`Dir`] for sort direction and [`sort`] / [`sort_by_field`] for
//! ordering by a single column. The order is total: ties on the primary
//! column always fall back to the folded name, ascending, whatever the
//! requested direction.

use std::cmp::Ordering;

use crate::error::Result;
use crate::field::Field;
use crate::record::BoardGame;
use crate::value::{fold_text, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Maps an `ascending` flag to a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two field values of the same field.
///
/// Text compares by folded form, numbers by their native type.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => fold_text(a).cmp(&fold_text(b)),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(*b),
        // A single field never yields mixed kinds
        (Value::Text(_), Value::Number(_)) => Ordering::Greater,
        (Value::Number(_), Value::Text(_)) => Ordering::Less,
    }
}

/// Compares two games by `field` in direction `dir`, then by name.
pub fn compare_games(a: &BoardGame, b: &BoardGame, field: Field, dir: Dir) -> Ordering {
    let primary = compare_values(&field.value(a), &field.value(b));
    dir.apply(primary)
        .then_with(|| fold_text(a.name()).cmp(&fold_text(b.name())))
        .then_with(|| a.cmp_attributes(b))
}

/// Returns a sorted copy of `games` ordered by `field`.
pub fn sort_by_field(games: &[BoardGame], field: Field, dir: Dir) -> Vec<BoardGame> {
    log::debug!("sorting {} game(s) by {field} {dir}", games.len());
    let mut sorted = games.to_vec();
    sorted.sort_by(|a, b| compare_games(a, b, field, dir));
    sorted
}

/// Returns a sorted copy of `games` ordered by the named column.
///
/// The column resolves through the field registry; an unknown column fails
/// with [`SeekerError::UnknownField`](crate::SeekerError::UnknownField).
pub fn sort(games: &[BoardGame], column: &str, dir: Dir) -> Result<Vec<BoardGame>> {
    let field = Field::resolve(column)?;
    Ok(sort_by_field(games, field, dir))
}
