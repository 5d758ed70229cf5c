//! The selection list.
//!
//! A [`SelectionList`] is an insertion-ordered set of games the user has
//! picked. Games are added by resolving a [`Selector`] against a candidate
//! list (usually the most recent filter output) and removed by resolving one
//! against the selection itself.
//!
//! Selector grammar:
//!
//! ```text
//! all          every candidate
//! 2-4          1-based inclusive range, clamped to the list
//! 3            1-based index; out of range selects nothing
//! Catan        name, case-insensitive
//! ```

use std::ops::Range;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::{Result, SeekerError};
use crate::record::BoardGame;
use crate::store::{self, StoreError};

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every element.
    All,
    /// Inclusive 1-based range.
    Range { start: usize, end: usize },
    /// Single 1-based position.
    Index(usize),
    /// Case-insensitive name match.
    Name(String),
}

impl Selector {
    /// Parses a selector. Blank input yields `None`.
    ///
    /// Text containing a single `-` is a range when either side is a run of
    /// digits; the other side must then be digits too, otherwise this fails
    /// with [`SeekerError::InvalidSelector`]. Names such as `Go-Fish` stay
    /// names.
    pub fn parse(text: &str) -> Result<Option<Selector>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if text.eq_ignore_ascii_case("all") {
            return Ok(Some(Selector::All));
        }

        let invalid = || SeekerError::InvalidSelector(text.to_string());

        if is_digits(text) {
            let index = text.parse().map_err(|_| invalid())?;
            return Ok(Some(Selector::Index(index)));
        }

        if let Some((start, end)) = text.split_once('-') {
            let (start, end) = (start.trim(), end.trim());
            if is_digits(start) || is_digits(end) {
                if !(is_digits(start) && is_digits(end)) {
                    return Err(invalid());
                }
                return Ok(Some(Selector::Range {
                    start: start.parse().map_err(|_| invalid())?,
                    end: end.parse().map_err(|_| invalid())?,
                }));
            }
        }

        Ok(Some(Selector::Name(text.to_string())))
    }

    /// Zero-based positions selected within a list of `len` elements.
    ///
    /// Only meaningful for `Range` and `Index`; other selectors yield an empty
    /// range.
    fn positions(&self, len: usize) -> Range<usize> {
        match *self {
            Selector::Range { start, end } => {
                let start = start.max(1);
                let end = end.min(len);
                if start > end {
                    0..0
                } else {
                    start - 1..end
                }
            }
            Selector::Index(index) if (1..=len).contains(&index) => index - 1..index,
            _ => 0..0,
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn list_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) if !p.as_os_str().to_string_lossy().trim().is_empty() => p.to_path_buf(),
        _ => PathBuf::from(store::DEFAULT_LIST_FILE),
    }
}

fn same_name(game: &BoardGame, lowered: &str) -> bool {
    game.name().to_lowercase() == lowered
}

/// An insertion-ordered set of selected games.
///
/// No two elements are ever equal; re-adding a game is a no-op.
///
/// # Example
///
/// ```
/// use gameplan_seeker::{BoardGame, SelectionList};
///
/// let candidates: Vec<_> = ["a", "b", "c", "d", "e"].into_iter().map(BoardGame::new).collect();
///
/// let mut list = SelectionList::new();
/// list.add("2-4", &candidates).unwrap();
/// assert_eq!(list.names(), ["b", "c", "d"]);
///
/// list.remove("1").unwrap();
/// assert_eq!(list.names(), ["c", "d"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    selected: IndexSet<BoardGame>,
}

impl SelectionList {
    /// Creates an empty selection.
    pub fn new() -> Self {
        SelectionList::default()
    }

    /// Adds the candidates chosen by `selector`.
    ///
    /// `candidates` is what the selector indexes into, never the selection
    /// itself. Returns how many games were newly added.
    pub fn add(&mut self, selector: &str, candidates: &[BoardGame]) -> Result<usize> {
        let Some(parsed) = Selector::parse(selector)? else {
            return Ok(0);
        };
        let before = self.selected.len();

        match &parsed {
            Selector::All => self.selected.extend(candidates.iter().cloned()),
            Selector::Name(name) => {
                let lowered = name.to_lowercase();
                if let Some(game) = candidates.iter().find(|game| same_name(game, &lowered)) {
                    self.selected.insert(game.clone());
                }
            }
            positional => {
                let range = positional.positions(candidates.len());
                self.selected.extend(candidates[range].iter().cloned());
            }
        }

        let added = self.selected.len() - before;
        log::debug!("selector {parsed:?} added {added} game(s)");
        Ok(added)
    }

    /// Removes the games chosen by `selector`.
    ///
    /// Positions refer to the selection in its current order. A name removes
    /// every game with that name. Returns how many games were removed.
    pub fn remove(&mut self, selector: &str) -> Result<usize> {
        let Some(parsed) = Selector::parse(selector)? else {
            return Ok(0);
        };
        let before = self.selected.len();

        match &parsed {
            Selector::All => self.selected.clear(),
            Selector::Name(name) => {
                let lowered = name.to_lowercase();
                self.selected.retain(|game| !same_name(game, &lowered));
            }
            positional => {
                let range = positional.positions(self.selected.len());
                self.selected.drain(range);
            }
        }

        let removed = before - self.selected.len();
        log::debug!("selector {parsed:?} removed {removed} game(s)");
        Ok(removed)
    }

    /// Number of selected games.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, game: &BoardGame) -> bool {
        self.selected.contains(game)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Names of the selected games, in selection order.
    pub fn names(&self) -> Vec<&str> {
        self.selected.iter().map(BoardGame::name).collect()
    }

    /// Iterates over the selected games, in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &BoardGame> {
        self.selected.iter()
    }

    /// Writes the selected names to `path`, one per line.
    ///
    /// A missing or blank path falls back to [`store::DEFAULT_LIST_FILE`].
    /// Returns the path written.
    pub fn save(&self, path: Option<&Path>) -> std::result::Result<PathBuf, StoreError> {
        let target = list_path(path);
        store::save_names(self.names(), &target)?;
        Ok(target)
    }

    /// Rebuilds a selection from saved names, resolving each against `games`.
    ///
    /// Names with no matching game are skipped.
    pub fn restore<S: AsRef<str>>(names: &[S], games: &[BoardGame]) -> SelectionList {
        let mut list = SelectionList::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let lowered = name.to_lowercase();
            if let Some(game) = games.iter().find(|game| same_name(game, &lowered)) {
                list.selected.insert(game.clone());
            } else {
                log::warn!("saved game {name:?} not found in collection");
            }
        }
        list
    }
}

impl<'a> IntoIterator for &'a SelectionList {
    type Item = &'a BoardGame;
    type IntoIter = indexmap::set::Iter<'a, BoardGame>;

    fn into_iter(self) -> Self::IntoIter {
        self.selected.iter()
    }
}
